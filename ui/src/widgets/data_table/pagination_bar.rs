//! Pagination bar below a data table.

use bodega_business::{PageNav, PaginationBar, TableCommand, TableLabels};
use egui::{Align, Button, ComboBox, Id, Layout, RichText, Ui};

/// Navigation button glyphs, in bar order.
pub const FIRST_PAGE: &str = "«";
pub const PREVIOUS_PAGE: &str = "‹";
pub const NEXT_PAGE: &str = "›";
pub const LAST_PAGE: &str = "»";

const SIZE_SELECTOR_WIDTH: f32 = 70.0;

/// Renders the rows-per-page selector, the page counters and the navigation
/// buttons. Returns the command the user issued this frame, if any.
pub fn pagination_bar(
    ui: &mut Ui,
    id: Id,
    bar: &PaginationBar,
    labels: &TableLabels,
) -> Option<TableCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        if bar.show_size_changer {
            ui.label(labels.rows_per_page.as_str());
            let mut selected = bar.page_size;
            ComboBox::from_id_salt(id.with("page_size"))
                .selected_text(selected.to_string())
                .width(SIZE_SELECTOR_WIDTH)
                .show_ui(ui, |ui| {
                    for &size in &bar.page_size_options {
                        ui.selectable_value(&mut selected, size, size.to_string());
                    }
                });
            if selected != bar.page_size {
                command = Some(TableCommand::SetPageSize(selected));
            }
            ui.add_space(16.0);
        }

        if bar.show_total {
            ui.label(labels.page_of(bar.page, bar.total_pages));
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let buttons = [
                (LAST_PAGE, &labels.last_page, bar.can_go_forward, PageNav::Last),
                (NEXT_PAGE, &labels.next_page, bar.can_go_forward, PageNav::Next),
                (PREVIOUS_PAGE, &labels.previous_page, bar.can_go_back, PageNav::Previous),
                (FIRST_PAGE, &labels.first_page, bar.can_go_back, PageNav::First),
            ];
            for (glyph, hint, enabled, nav) in buttons {
                if nav_button(ui, glyph, hint, enabled) {
                    command = Some(TableCommand::Navigate(nav));
                }
            }

            if bar.show_total {
                ui.add_space(16.0);
                let range = labels.item_range(bar.start_item, bar.end_item, bar.total_items);
                ui.label(RichText::new(range).weak());
            }
        });
    });

    command
}

/// A navigation button that is greyed out at its boundary.
#[inline]
fn nav_button(ui: &mut Ui, glyph: &str, hint: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(glyph))
        .on_hover_text(hint)
        .on_disabled_hover_text(hint)
        .clicked()
}
