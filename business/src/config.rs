//! Table configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides. The default labels are the Spanish strings the admin screens use.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Message shown when there is nothing on the current page.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No hay datos disponibles";

/// Page sizes offered by the rows-per-page selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Pagination behaviour of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// When disabled the whole collection is shown and no pagination bar is drawn.
    pub enabled: bool,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub show_size_changer: bool,
    pub show_total: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            page_size: 10,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            show_size_changer: true,
            show_total: true,
        }
    }
}

impl PaginationConfig {
    /// Shows every record on a single, bar-less page.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.page_size()?;
        if self.page_size_options.is_empty() {
            return Err(ConfigError::EmptyPageSizeOptions);
        }
        if let Some(index) = self.page_size_options.iter().position(|&size| size == 0) {
            return Err(ConfigError::ZeroPageSizeOption { index });
        }
        Ok(())
    }

    /// The configured page size, rejected when zero.
    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.page_size).ok_or(ConfigError::ZeroPageSize)
    }
}

/// User-visible strings of the table and its pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLabels {
    pub loading: String,
    pub rows_per_page: String,
    /// Word before the current page number ("Página 2 de 3").
    pub page: String,
    /// Word between two numbers ("2 de 3", "1-10 de 25").
    pub of: String,
    /// Noun after the total item count ("1-10 de 25 elementos").
    pub items: String,
    pub first_page: String,
    pub previous_page: String,
    pub next_page: String,
    pub last_page: String,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            loading: "Cargando...".to_owned(),
            rows_per_page: "Filas por página".to_owned(),
            page: "Página".to_owned(),
            of: "de".to_owned(),
            items: "elementos".to_owned(),
            first_page: "Ir a la primera página".to_owned(),
            previous_page: "Ir a la página anterior".to_owned(),
            next_page: "Ir a la siguiente página".to_owned(),
            last_page: "Ir a la última página".to_owned(),
        }
    }
}

impl TableLabels {
    /// "Página 2 de 3"
    pub fn page_of(&self, page: usize, total_pages: usize) -> String {
        format!("{} {page} {} {total_pages}", self.page, self.of)
    }

    /// "11-20 de 25 elementos"
    pub fn item_range(&self, start: usize, end: usize, total_items: usize) -> String {
        format!("{start}-{end} {} {total_items} {}", self.of, self.items)
    }
}

/// Everything a table needs besides its columns and records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub empty_message: String,
    pub pagination: PaginationConfig,
    pub labels: TableLabels,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
            pagination: PaginationConfig::default(),
            labels: TableLabels::default(),
        }
    }
}

impl TableConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pagination.validate()
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_labels(mut self, labels: TableLabels) -> Self {
        self.labels = labels;
        self
    }
}
