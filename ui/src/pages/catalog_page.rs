//! Product catalog page.
//!
//! A search box filters the products by name or liquor type and the result is
//! shown in a paginated [`DataTable`](crate::widgets::DataTable).

use bodega_business::{Align, Cell, CellAction, Column, Product, TableEvent, Tone, filter_products};
use egui::{Response, RichText, TextEdit, Ui};
use log::{debug, info};
use serde_json::Value;

use crate::state::State;

pub const EDIT_ACTION: &str = "edit";
pub const DELETE_ACTION: &str = "delete";

const SEARCH_WIDTH: f32 = 260.0;

/// Columns of the product table.
pub fn product_columns() -> Vec<Column<Product>> {
    vec![
        Column::new("id", "ID").width(50.0).align(Align::Center),
        Column::new("nombre", "Nombre").sortable(),
        Column::new("tipo_licor", "Tipo de Licor")
            .width(150.0)
            .render(|value, _, _| match value.as_str() {
                Some(kind) => Cell::badge(kind, Tone::Info),
                None => Cell::default(),
            }),
        Column::new("precio_compra", "Precio Compra")
            .width(120.0)
            .align(Align::Center)
            .render(|value, _, _| price(value, Tone::Success)),
        Column::new("precio_venta", "Precio Venta")
            .width(120.0)
            .align(Align::Center)
            .render(|value, _, _| price(value, Tone::Info)),
        Column::new("fecha", "Fecha").width(120.0).align(Align::Center),
        Column::new("acciones", "Acciones")
            .width(180.0)
            .align(Align::Right)
            .render(|_, product: &Product, _| {
                Cell::actions([
                    CellAction::new(EDIT_ACTION, "Editar")
                        .hint(format!("Editar {}", product.nombre)),
                    CellAction::new(DELETE_ACTION, "Eliminar")
                        .hint(format!("Eliminar {}", product.nombre)),
                ])
            }),
    ]
}

fn price(value: &Value, tone: Tone) -> Cell {
    match value.as_f64() {
        Some(amount) => Cell::strong(format!("${amount:.2}"), tone),
        None => Cell::styled("-", Tone::Muted),
    }
}

/// Renders the catalog: heading, search controls and the product table.
pub fn catalog_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Productos");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let search = ui.add(
                TextEdit::singleline(&mut state.search_term)
                    .hint_text("Buscar por nombre o tipo de licor")
                    .desired_width(SEARCH_WIDTH),
            );
            if search.changed() {
                debug!("search term: {:?}", state.search_term);
            }
            ui.checkbox(&mut state.loading, "Simular carga");
        });
        ui.add_space(8.0);

        let visible = filter_products(&state.products, &state.search_term);
        let response = state.table.show(ui, &visible, state.loading);

        for event in response.events {
            match event {
                TableEvent::Action {
                    action,
                    record_index,
                } => {
                    if let Some(product) = visible.get(record_index) {
                        info!("{action} product {} ({})", product.id, product.nombre);
                        state.last_action = Some(describe_action(&action, product));
                    }
                }
                TableEvent::PageChanged { page } => debug!("product page: {page}"),
                TableEvent::PageSizeChanged { page_size } => {
                    debug!("product page size: {page_size}");
                }
            }
        }

        if let Some(last_action) = &state.last_action {
            ui.add_space(8.0);
            ui.label(RichText::new(last_action.as_str()).weak());
        }
    })
    .response
}

fn describe_action(action: &str, product: &Product) -> String {
    match action {
        EDIT_ACTION => format!("Editando: {}", product.nombre),
        DELETE_ACTION => format!("Eliminando: {}", product.nombre),
        other => format!("{other}: {}", product.nombre),
    }
}
