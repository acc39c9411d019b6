#![no_main]

use libfuzzer_sys::fuzz_target;
use slotpane::prelude::*;
use slotpane::IdDecoder;

fuzz_target!(|data: &[u8]| {
    // First byte picks the container height (1..=8 rows of 9).
    let Some((&rows, text)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(text) else {
        return;
    };
    let rows = u16::from(rows % 8) + 1;

    // Rejected documents are fine; panics are not.
    let Ok(panes) = PaneLoader::new(IdDecoder).load_panes(text) else {
        return;
    };
    let set: PaneSet<String> = panes.into_iter().collect();
    let mut buffer = SlotBuffer::with_rows(rows);
    set.place_all(&mut buffer);

    for slot in 0..buffer.capacity() + 9 {
        let (event, claimed) = set.click(&buffer, slot);
        if claimed.is_some() {
            assert!(event.current.is_some(), "claimed an empty slot");
        }
    }
});
