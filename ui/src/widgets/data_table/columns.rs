//! Column sizing for data tables.

use bodega_business::HeaderCell;
use egui_extras::Column;

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Narrowest a column without a fixed width may shrink to.
pub const MIN_FLEX_WIDTH: f32 = 80.0;

/// Fixed-width columns keep their width, the rest share the remaining space.
#[inline]
pub fn table_columns(header: &[HeaderCell]) -> Vec<Column> {
    header
        .iter()
        .map(|cell| match cell.width {
            Some(width) => Column::exact(width).clip(true),
            None => Column::remainder().at_least(MIN_FLEX_WIDTH).clip(true),
        })
        .collect()
}
