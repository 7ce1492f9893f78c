use egui::{Response, RichText, Ui};

/// Package version shown in the top bar, as `v{version}`.
pub fn version_label() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

/// Displays the application version in the UI.
pub fn env_version(ui: &mut Ui) -> Response {
    ui.label(RichText::new(version_label()).weak())
}
