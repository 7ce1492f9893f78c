//! Cell rendering for data tables.

use bodega_business::{Align, Cell, CellAction, RenderedCell, Tone};
use egui::{CornerRadius, Frame, Layout, Margin, RichText, Ui};

use crate::utils::colors::{badge_fill, tone_color};

/// Lays out `add_contents` according to a column's alignment.
#[inline]
pub fn aligned<R>(ui: &mut Ui, align: Align, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let layout = match align {
        Align::Left => Layout::left_to_right(egui::Align::Center),
        Align::Center => Layout::top_down(egui::Align::Center),
        Align::Right => Layout::right_to_left(egui::Align::Center),
    };
    ui.with_layout(layout, add_contents).inner
}

/// Renders one cell. Returns the id of the clicked action, if any.
pub fn render_cell(ui: &mut Ui, cell: &RenderedCell) -> Option<String> {
    aligned(ui, cell.align, |ui| match &cell.cell {
        Cell::Text(text) => {
            ui.label(text.as_str());
            None
        }
        Cell::Styled { text, tone, strong } => {
            let mut rich = RichText::new(text.as_str()).color(tone_color(*tone, ui.visuals()));
            if *strong {
                rich = rich.strong();
            }
            ui.label(rich);
            None
        }
        Cell::Badge { text, tone } => {
            render_badge(ui, text, *tone);
            None
        }
        Cell::Actions(actions) => render_actions(ui, actions, cell.align),
    })
}

fn render_badge(ui: &mut Ui, text: &str, tone: Tone) {
    let color = tone_color(tone, ui.visuals());
    let fill = badge_fill(tone, ui.visuals());
    Frame::NONE
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

fn render_actions(ui: &mut Ui, actions: &[CellAction], align: Align) -> Option<String> {
    let mut clicked = None;

    // Right-to-left layouts place the first widget rightmost.
    let mut ordered: Vec<&CellAction> = actions.iter().collect();
    if align == Align::Right {
        ordered.reverse();
    }

    for action in ordered {
        let mut response = ui.button(action.label.as_str());
        if let Some(hint) = &action.hint {
            response = response.on_hover_text(hint.as_str());
        }
        if response.clicked() {
            clicked = Some(action.id.clone());
        }
    }

    clicked
}
