pub mod data_table;
mod env_version;

pub use data_table::{DataTable, TableResponse};
pub use env_version::env_version;
