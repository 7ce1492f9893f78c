//! The paginated table model.
//!
//! `TableModel` owns the column schema, the configuration and the pagination
//! counters of one table instance. Given the caller's records it produces a
//! [`TableView`]: a header, a body (loading row, empty row or the rendered
//! cells of the visible page) and, when eligible, a pagination bar. The UI
//! layer only draws a `TableView` and feeds [`TableCommand`]s back.

use std::num::NonZeroUsize;

use log::{debug, warn};

use crate::cell::Cell;
use crate::column::{Align, Column};
use crate::config::TableConfig;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageNav, Pagination, page_range, total_pages};
use crate::record::Record;

/// A user request against the pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableCommand {
    Navigate(PageNav),
    SetPage(usize),
    SetPageSize(usize),
}

/// Something that happened in a table during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    PageChanged { page: usize },
    PageSizeChanged { page_size: usize },
    /// A row button was clicked. `record_index` points into the caller's collection.
    Action { action: String, record_index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub align: Align,
    pub width: Option<f32>,
    pub sortable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub align: Align,
    pub cell: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    /// Index of the record in the caller's collection.
    pub record_index: usize,
    pub cells: Vec<RenderedCell>,
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// A single row spanning every column with a spinner and this label.
    Loading { label: String },
    /// A single row spanning every column with this message.
    Empty { message: String },
    Rows(Vec<BodyRow>),
}

/// State of the pagination bar for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// 1-based position of the first item on the page.
    pub start_item: usize,
    /// 1-based position of the last item on the page.
    pub end_item: usize,
    pub page_size_options: Vec<usize>,
    pub show_size_changer: bool,
    pub show_total: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Everything needed to draw a table for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
    pub pagination: Option<PaginationBar>,
}

impl TableView {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Rendered rows, empty while loading or when the page is empty.
    pub fn rows(&self) -> &[BodyRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Loading { .. } | TableBody::Empty { .. } => &[],
        }
    }
}

/// Column schema, configuration and pagination state of one table.
#[derive(Debug)]
pub struct TableModel<R> {
    columns: Vec<Column<R>>,
    config: TableConfig,
    pagination: Pagination,
}

impl<R: Record> TableModel<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self::with_config(columns, TableConfig::default())
    }

    /// Creates a model starting on page 1 with the configured page size.
    ///
    /// A zero page size falls back to [`DEFAULT_PAGE_SIZE`]; use
    /// [`TableConfig::validate`] to reject such configs up front.
    pub fn with_config(columns: Vec<Column<R>>, config: TableConfig) -> Self {
        let page_size = config.pagination.page_size().unwrap_or_else(|err| {
            warn!("{err}, falling back to {DEFAULT_PAGE_SIZE} rows per page");
            DEFAULT_PAGE_SIZE
        });

        Self {
            columns,
            config,
            pagination: Pagination::new(page_size),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Goes back to the first page, e.g. after the caller changed its filter.
    pub fn reset_page(&mut self) {
        self.pagination.reset();
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.pagination.page_size())
    }

    /// Applies a command for a collection of `len` records.
    ///
    /// Returns the resulting event, or `None` when the command was a no-op.
    pub fn apply(&mut self, command: TableCommand, len: usize) -> Option<TableEvent> {
        let total = self.total_pages(len);
        // Navigation starts from the page on screen, not from a stale stored one.
        if self.pagination.clamp_to(total) {
            debug!("page clamped to {} before {command:?}", self.pagination.page());
        }
        let changed = match command {
            TableCommand::Navigate(nav) => self.pagination.navigate(nav, total),
            TableCommand::SetPage(page) => self.pagination.set_page(page, total),
            TableCommand::SetPageSize(size) => {
                let Some(size) = NonZeroUsize::new(size) else {
                    warn!("ignoring request for a zero page size");
                    return None;
                };
                if self.pagination.set_page_size(size) {
                    debug!("page size changed to {size}");
                    return Some(TableEvent::PageSizeChanged {
                        page_size: size.get(),
                    });
                }
                false
            }
        };

        changed.then(|| {
            let page = self.pagination.page();
            debug!("moved to page {page} of {total}");
            TableEvent::PageChanged { page }
        })
    }

    /// Computes what to draw for `records`.
    ///
    /// When the collection is shorter than the current page the last page is
    /// shown instead. The stored page is left in place, so a collection that is
    /// briefly empty or filtered keeps its page once it grows back.
    pub fn view(&self, records: &[R], loading: bool) -> TableView {
        let len = records.len();
        let total = self.total_pages(len);
        let paginate = self.config.pagination.enabled;
        let page = self.pagination.clamped_page(total);

        let header = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_owned(),
                title: column.title().to_owned(),
                align: column.alignment(),
                width: column.fixed_width(),
                sortable: column.is_sortable(),
            })
            .collect();

        let range = if paginate {
            page_range(page, self.pagination.page_size(), len)
        } else {
            0..len
        };

        let body = if loading {
            TableBody::Loading {
                label: self.config.labels.loading.clone(),
            }
        } else if range.is_empty() {
            TableBody::Empty {
                message: self.config.empty_message.clone(),
            }
        } else {
            let offset = range.start;
            let rows = records[range]
                .iter()
                .enumerate()
                .map(|(row_index, record)| BodyRow {
                    record_index: offset + row_index,
                    cells: self
                        .columns
                        .iter()
                        .map(|column| RenderedCell {
                            align: column.alignment(),
                            cell: column.cell(record, row_index),
                        })
                        .collect(),
                })
                .collect();
            TableBody::Rows(rows)
        };

        let pagination =
            (paginate && len > 0 && !loading).then(|| self.pagination_bar(page, len, total));

        TableView {
            header,
            body,
            pagination,
        }
    }

    fn pagination_bar(&self, page: usize, len: usize, total: usize) -> PaginationBar {
        let page_size = self.pagination.page_size();
        let range = page_range(page, page_size, len);
        let config = &self.config.pagination;

        PaginationBar {
            page,
            total_pages: total,
            page_size: page_size.get(),
            total_items: len,
            start_item: range.start + 1,
            end_item: range.end,
            page_size_options: config.page_size_options.clone(),
            show_size_changer: config.show_size_changer,
            show_total: config.show_total,
            can_go_back: page > 1,
            can_go_forward: page < total,
        }
    }
}
