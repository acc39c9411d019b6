#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slotpane::prelude::*;

#[derive(Debug, Arbitrary)]
struct Input {
    origin: (u8, u8),
    size: (u8, u8),
    items: u8,
    vertical: bool,
    quarter_turns: u8,
    gap: u8,
    repeat: bool,
    flips: (bool, bool),
    offset: (u8, u8),
    max: (u8, u8),
    clicks: Vec<u16>,
}

fuzz_target!(|input: Input| {
    let length = u16::from(input.size.0 % 12);
    let height = u16::from(input.size.1 % 12);
    let mut pane = OutlinePane::new(
        SlotPos::new(u16::from(input.origin.0 % 12), u16::from(input.origin.1 % 12)),
        length,
        height,
    );
    for n in 0..u32::from(input.items % 64) {
        pane.add_item(PaneItem::new(n));
    }
    if input.vertical {
        pane.set_orientation(Orientation::Vertical);
    }
    let degrees = i32::from(input.quarter_turns % 4) * 90;
    if pane.try_set_rotation(degrees).is_err() {
        assert_ne!(length, height, "square grids accept every quarter turn");
    }
    pane.set_gap(u16::from(input.gap % 16));
    pane.set_repeat(input.repeat);
    pane.flip_horizontally(input.flips.0);
    pane.flip_vertically(input.flips.1);

    let offset = PaneOffset::new(u16::from(input.offset.0 % 12), u16::from(input.offset.1 % 12));
    let max = GridSize::new(u16::from(input.max.0 % 16), u16::from(input.max.1 % 16));
    let mut buffer = SlotBuffer::with_rows(12);
    pane.place(&mut buffer, offset, max);

    // Every rendered item resolves back to itself.
    for (slot, &value) in buffer.occupied() {
        let mut event = buffer.click(slot);
        let resolution = pane.resolve(&mut event, offset, max);
        assert_eq!(resolution, Resolution::Claimed { index: value as usize });
    }

    for slot in input.clicks {
        let mut event = buffer.click(usize::from(slot));
        let _ = pane.resolve(&mut event, offset, max);
    }
});
