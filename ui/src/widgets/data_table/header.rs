//! Table header rendering.

use bodega_business::HeaderCell;
use egui_extras::TableRow;

use super::cells::aligned;

/// Renders one bold title per column, aligned like the column's cells.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, cells: &[HeaderCell]) {
    for cell in cells {
        header.col(|ui| {
            aligned(ui, cell.align, |ui| {
                ui.strong(cell.title.as_str());
            });
        });
    }
}
