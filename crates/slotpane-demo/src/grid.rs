//! Text and JSON views of a rendered slot grid.

use serde::Serialize;
use slotpane::{Container, SlotBuffer};

/// Marker printed for empty slots.
pub const EMPTY_CELL: &str = ".";

/// Serializable copy of a rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub row_width: u16,
    pub rows: u16,
    /// Row-major cells, `null` where empty.
    pub cells: Vec<Option<String>>,
}

impl GridSnapshot {
    pub fn capture(buffer: &SlotBuffer<String>) -> Self {
        Self {
            row_width: buffer.row_width(),
            rows: buffer.rows(),
            cells: (0..buffer.capacity())
                .map(|slot| buffer.item_at(slot).cloned())
                .collect(),
        }
    }
}

/// Render the grid as aligned text, one line per row.
pub fn render_text(buffer: &SlotBuffer<String>) -> String {
    let width = buffer
        .occupied()
        .map(|(_, item)| item.chars().count())
        .max()
        .unwrap_or(0)
        .max(EMPTY_CELL.len());

    let mut out = String::new();
    for y in 0..buffer.rows() {
        let cells: Vec<String> = (0..buffer.row_width())
            .map(|x| {
                let cell = buffer.get(x, y).map_or(EMPTY_CELL, String::as_str);
                format!("{cell:<width$}")
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}
