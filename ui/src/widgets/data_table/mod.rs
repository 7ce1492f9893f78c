//! Generic data table with client-side pagination.
//!
//! The rendering is split into small pieces:
//! - `columns`: column sizing
//! - `header`: header row
//! - `row`: body rows
//! - `cells`: cell content and alignment
//! - `pagination_bar`: rows-per-page selector and page navigation
//!
//! All state lives in a [`TableModel`]; this module only draws its
//! [`TableView`] and feeds the user's clicks back as commands after the frame.

mod cells;
pub mod columns;
pub mod header;
pub mod pagination_bar;
pub mod row;

use std::hash::Hash;

use bodega_business::{
    Column, Record, TableBody, TableConfig, TableEvent, TableModel, TableView,
};
use egui::{Frame, Id, Layout, Response, RichText, Stroke, Ui};
use egui_extras::TableBuilder;
use log::debug;

use crate::utils::colors::TABLE_BORDER_COLOR;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use pagination_bar::pagination_bar;
use row::render_body_row;

/// Vertical padding around the loading and empty messages.
const MESSAGE_PADDING: f32 = 24.0;

/// What happened in a table during one frame.
pub struct TableResponse {
    pub response: Response,
    pub events: Vec<TableEvent>,
}

impl TableResponse {
    /// Row buttons clicked this frame, as `(action id, record index)`.
    pub fn actions(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.events.iter().filter_map(|event| match event {
            TableEvent::Action {
                action,
                record_index,
            } => Some((action.as_str(), *record_index)),
            TableEvent::PageChanged { .. } | TableEvent::PageSizeChanged { .. } => None,
        })
    }
}

/// A paginated table of `R` records.
///
/// Keep the `DataTable` in the screen's state: it owns the page counters. New
/// records never move the stored page; call
/// [`TableModel::reset_page`] through [`DataTable::model_mut`] to start over.
pub struct DataTable<R> {
    id: Id,
    model: TableModel<R>,
}

impl<R: Record> DataTable<R> {
    pub fn new(id_salt: impl Hash, columns: Vec<Column<R>>) -> Self {
        Self::with_config(id_salt, columns, TableConfig::default())
    }

    pub fn with_config(id_salt: impl Hash, columns: Vec<Column<R>>, config: TableConfig) -> Self {
        Self {
            id: Id::new(id_salt),
            model: TableModel::with_config(columns, config),
        }
    }

    pub fn model(&self) -> &TableModel<R> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut TableModel<R> {
        &mut self.model
    }

    /// Stored 1-based page. A shorter collection is drawn on its last page
    /// without changing this value.
    pub fn page(&self) -> usize {
        self.model.pagination().page()
    }

    /// Draws `records` and applies whatever the user clicked in the pagination bar.
    pub fn show(&mut self, ui: &mut Ui, records: &[R], loading: bool) -> TableResponse {
        let view = self.model.view(records, loading);
        let mut events = Vec::new();
        let mut command = None;

        let response = ui
            .vertical(|ui| {
                Frame::NONE
                    .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                    .show(ui, |ui| {
                        render_table(ui, self.id, &view, &mut events);
                    });

                if let Some(bar) = &view.pagination {
                    ui.add_space(8.0);
                    command = pagination_bar(ui, self.id, bar, &self.model.config().labels);
                }
            })
            .response;

        if let Some(command) = command {
            debug!("table {:?}: {command:?}", self.id);
            if let Some(event) = self.model.apply(command, records.len()) {
                events.push(event);
                ui.ctx().request_repaint();
            }
        }

        TableResponse { response, events }
    }
}

fn render_table(ui: &mut Ui, id: Id, view: &TableView, events: &mut Vec<TableEvent>) {
    if view.column_count() > 0 {
        let mut builder = TableBuilder::new(ui)
            .id_salt(id)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(egui::Align::Center));
        for column in table_columns(&view.header) {
            builder = builder.column(column);
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header, &view.header);
            })
            .body(|mut body| {
                for body_row in view.rows() {
                    body.row(ROW_HEIGHT, |mut row| {
                        if let Some(event) = render_body_row(&mut row, body_row) {
                            events.push(event);
                        }
                    });
                }
            });
    }

    // Loading and empty rows span every column.
    match &view.body {
        TableBody::Loading { label } => {
            ui.vertical_centered(|ui| {
                ui.add_space(MESSAGE_PADDING);
                ui.spinner();
                ui.label(RichText::new(label.as_str()).weak());
                ui.add_space(MESSAGE_PADDING);
            });
        }
        TableBody::Empty { message } => {
            ui.vertical_centered(|ui| {
                ui.add_space(MESSAGE_PADDING);
                ui.label(RichText::new(message.as_str()).weak());
                ui.add_space(MESSAGE_PADDING);
            });
        }
        TableBody::Rows(_) => {}
    }
}
