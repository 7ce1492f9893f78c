//! Pages module for the application.
//!
//! - `catalog_page`: product catalog with search and a paginated table

mod catalog_page;

pub use catalog_page::{DELETE_ACTION, EDIT_ACTION, catalog_page, product_columns};
