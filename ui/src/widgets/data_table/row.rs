//! Body row rendering.

use bodega_business::{BodyRow, TableEvent};
use egui_extras::TableRow;

use super::cells::render_cell;

/// Renders the cells of one record. Returns an action event when a row button was clicked.
#[inline]
pub fn render_body_row(row: &mut TableRow<'_, '_>, body_row: &BodyRow) -> Option<TableEvent> {
    let mut event = None;

    for cell in &body_row.cells {
        row.col(|ui| {
            if let Some(action) = render_cell(ui, cell) {
                event = Some(TableEvent::Action {
                    action,
                    record_index: body_row.record_index,
                });
            }
        });
    }

    event
}
