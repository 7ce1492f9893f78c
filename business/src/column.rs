//! Column schema for data tables.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::cell::Cell;
use crate::record::Record;

/// Rendering override for a column.
///
/// Called with the field value (`Null` when the record has no such field), the
/// record itself and the row index within the visible page.
pub type CellRenderer<R> = Arc<dyn Fn(&Value, &R, usize) -> Cell + Send + Sync>;

/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Describes how one field of a record is titled, sized, aligned and displayed.
pub struct Column<R> {
    key: String,
    title: String,
    render: Option<CellRenderer<R>>,
    width: Option<f32>,
    align: Align,
    sortable: bool,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            render: self.render.clone(),
            width: self.width,
            align: self.align,
            sortable: self.sortable,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("render", &self.render.is_some())
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            render: None,
            width: None,
            align: Align::Left,
            sortable: false,
        }
    }

    /// Fixed width in points. Columns without a width share the remaining space.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Marks the column as sortable. The flag is carried to the header but no
    /// sorting happens: callers pass records already in display order.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &R, usize) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fixed_width(&self) -> Option<f32> {
        self.width
    }

    pub fn alignment(&self) -> Align {
        self.align
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: Record> Column<R> {
    /// Produces the cell for `record` shown at `row_index` on the current page.
    pub fn cell(&self, record: &R, row_index: usize) -> Cell {
        let value = record.field(&self.key).unwrap_or(Value::Null);
        match &self.render {
            Some(render) => render(&value, record, row_index),
            None => Cell::from_value(&value),
        }
    }
}
