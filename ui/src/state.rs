use bodega_business::{Product, TableConfig, sample_products};

use crate::pages::product_columns;
use crate::widgets::DataTable;

/// Id salt of the product table.
pub const PRODUCT_TABLE_ID: &str = "product_table";

/// The main application state.
pub struct State {
    /// Every product in the catalog, before the search filter.
    pub products: Vec<Product>,
    /// Text typed in the search box.
    pub search_term: String,
    /// Shows the loading row instead of the products.
    pub loading: bool,
    /// The product table, which keeps its page between frames.
    pub table: DataTable<Product>,
    /// Last row action the user triggered, as shown under the table.
    pub last_action: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_products(sample_products())
    }
}

impl State {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self::with_config(products, TableConfig::default())
    }

    pub fn with_config(products: Vec<Product>, config: TableConfig) -> Self {
        Self {
            products,
            search_term: String::new(),
            loading: false,
            table: DataTable::with_config(PRODUCT_TABLE_ID, product_columns(), config),
            last_action: None,
        }
    }
}
