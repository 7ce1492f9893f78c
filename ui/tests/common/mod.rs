use bodega_business::{Column, TableConfig, TableEvent};
use bodega_ui::BodegaApp;
use bodega_ui::state::State;
use bodega_ui::widgets::DataTable;
use egui_kittest::Harness;
use serde_json::{Value, json};

/// Frames rendered after every interaction. The loading spinner keeps
/// requesting repaints, so tests step a fixed number of frames instead of
/// running until the UI settles.
pub const SETTLE_STEPS: usize = 3;

/// Wide enough for every product column at its fixed width.
const WINDOW_SIZE: egui::Vec2 = egui::vec2(1280.0, 900.0);

/// A bare table over JSON records, recording every event it emits.
#[allow(unused)]
pub struct TableFixture {
    pub records: Vec<Value>,
    pub loading: bool,
    pub table: DataTable<Value>,
    pub events: Vec<TableEvent>,
}

impl TableFixture {
    #[allow(unused)]
    pub fn new(len: usize) -> Self {
        Self::with_config(len, TableConfig::default())
    }

    #[allow(unused)]
    pub fn with_config(len: usize, config: TableConfig) -> Self {
        let records = (1..=len)
            .map(|i| json!({ "id": i, "name": format!("Item {i}") }))
            .collect();
        let columns = vec![Column::new("id", "ID").width(60.0), Column::new("name", "Name")];

        Self {
            records,
            loading: false,
            table: DataTable::with_config("fixture_table", columns, config),
            events: Vec::new(),
        }
    }
}

pub struct TestCtx<'a, T = TableFixture> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    #[allow(unused)]
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    /// Renders a few frames so clicks are applied and redrawn.
    pub fn settle(&mut self) {
        for _ in 0..SETTLE_STEPS {
            self.harness.step();
        }
    }
}

impl<'a> TestCtx<'a, TableFixture> {
    #[allow(unused)]
    pub fn new(fixture: TableFixture) -> Self {
        init_logging();
        let harness = Harness::new_ui_state(
            |ui, fixture: &mut TableFixture| {
                let response = fixture.table.show(ui, &fixture.records, fixture.loading);
                fixture.events.extend(response.events);
            },
            fixture,
        );

        let mut ctx = Self { harness };
        ctx.settle();
        ctx
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub fn new_page(state: State) -> Self {
        init_logging();
        let harness = Harness::builder().with_size(WINDOW_SIZE).build_ui_state(
            |ui, state: &mut State| {
                bodega_ui::pages::catalog_page(state, ui);
            },
            state,
        );

        let mut ctx = Self { harness };
        ctx.settle();
        ctx
    }
}

impl<'a> TestCtx<'a, BodegaApp> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        init_logging();
        let app = BodegaApp::new(State::default());
        let harness = Harness::builder()
            .with_size(WINDOW_SIZE)
            .build_eframe(|_| app);

        let mut ctx = Self { harness };
        ctx.settle();
        ctx
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
