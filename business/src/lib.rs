//! Business layer of the Bodega admin front-end.
//!
//! Everything here is UI-agnostic: the record abstraction, the column schema,
//! client-side pagination and the [`TableModel`] that turns records into a
//! [`TableView`] for the UI layer to draw.

mod catalog;
mod cell;
mod column;
mod config;
mod error;
mod model;
mod pagination;
mod record;

pub use catalog::{Product, filter_products, sample_products};
pub use cell::{Cell, CellAction, Tone};
pub use column::{Align, CellRenderer, Column};
pub use config::{
    DEFAULT_EMPTY_MESSAGE, DEFAULT_PAGE_SIZE_OPTIONS, PaginationConfig, TableConfig, TableLabels,
};
pub use error::ConfigError;
pub use model::{
    BodyRow, HeaderCell, PaginationBar, RenderedCell, TableBody, TableCommand, TableEvent,
    TableModel, TableView,
};
pub use pagination::{DEFAULT_PAGE_SIZE, PageNav, Pagination, page_range, total_pages};
pub use record::{Record, display_value};
