//! Integration tests for the product catalog page and the app shell.

mod common;

use bodega_business::sample_products;
use bodega_ui::state::State;
use bodega_ui::widgets::data_table::pagination_bar::NEXT_PAGE;
use kittest::Queryable;

use crate::common::TestCtx;

#[test]
fn test_catalog_shows_first_page_of_products() {
    let mut ctx = TestCtx::new_page(State::default());
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Productos").is_some());
    for title in [
        "ID",
        "Nombre",
        "Tipo de Licor",
        "Precio Compra",
        "Precio Venta",
        "Fecha",
        "Acciones",
    ] {
        assert!(
            harness.query_by_label(title).is_some(),
            "header {title} should be shown"
        );
    }

    let total = sample_products().len();
    assert!(harness.query_by_label("Página 1 de 3").is_some());
    assert!(
        harness
            .query_by_label(&format!("1-10 de {total} elementos"))
            .is_some()
    );
}

#[test]
fn test_every_visible_row_has_actions() {
    let mut ctx = TestCtx::new_page(State::default());
    let harness = ctx.harness_mut();

    assert_eq!(harness.query_all_by_label("Editar").count(), 10);
    assert_eq!(harness.query_all_by_label("Eliminar").count(), 10);
}

#[test]
fn test_search_filters_products() {
    let mut ctx = TestCtx::new_page(State::default());

    ctx.harness_mut().state_mut().search_term = "whisky".to_string();
    ctx.settle();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Crema de Whisky").is_some());
    assert!(harness.query_by_label("Página 1 de 1").is_some());
    assert!(harness.query_by_label("1-4 de 4 elementos").is_some());
    assert_eq!(harness.query_all_by_label("Editar").count(), 4);
}

#[test]
fn test_search_without_matches_shows_empty_message() {
    let mut ctx = TestCtx::new_page(State::default());

    ctx.harness_mut().state_mut().search_term = "sake".to_string();
    ctx.settle();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("No hay datos disponibles").is_some());
    assert!(harness.query_by_label_contains("elementos").is_none());
}

#[test]
fn test_narrow_search_then_clearing_it_returns_to_page() {
    let mut ctx = TestCtx::new_page(State::default());

    ctx.harness_mut().get_by_label(NEXT_PAGE).click();
    ctx.settle();
    assert_eq!(ctx.harness().state().table.page(), 2);

    ctx.harness_mut().state_mut().search_term = "ron".to_string();
    ctx.settle();
    assert!(ctx.harness_mut().query_by_label("Página 1 de 1").is_some());

    ctx.harness_mut().state_mut().search_term.clear();
    ctx.settle();
    assert!(ctx.harness_mut().query_by_label("Página 2 de 3").is_some());
}

#[test]
fn test_simulated_loading_hides_products() {
    let mut ctx = TestCtx::new_page(State::default());

    ctx.harness_mut().state_mut().loading = true;
    ctx.settle();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Cargando...").is_some());
    assert_eq!(harness.query_all_by_label("Editar").count(), 0);
}

#[test]
fn test_app_shows_catalog_and_version() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Bodega").is_some());
    assert!(harness.query_by_label("Productos").is_some());
    assert!(
        harness
            .query_by_label(&format!("v{}", env!("CARGO_PKG_VERSION")))
            .is_some()
    );
}
