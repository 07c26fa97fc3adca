// logwindow - ui/panels/log_view.rs
//
// The scrolling log list (central area).
//
// Uses egui's `ScrollArea::show_rows` which renders only the rows currently
// visible in the viewport, so rendering cost stays flat as the list grows.
// Each row is a LayoutJob built from the row's spans, with every span's
// colour role resolved through the theme table; sticks to the bottom while
// auto-scroll is enabled so the newest row is always in view.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the log list panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let total = state.rows.len();

    if total == 0 {
        ui.centered_and_justified(|ui| {
            ui.label("No log records yet.");
        });
        return;
    }

    let row_height = theme::ROW_HEIGHT;
    let font = egui::FontId::monospace(theme::ROW_FONT_SIZE);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(state.auto_scroll)
        .show_rows(ui, row_height, total, |ui, row_range| {
            for idx in row_range {
                let Some(row) = state.rows.get(idx) else {
                    continue;
                };

                let mut job = LayoutJob::default();
                for span in &row.spans {
                    job.append(
                        &span.text,
                        0.0,
                        TextFormat {
                            font_id: font.clone(),
                            color: theme::span_colour(span.role, state.dark_mode),
                            ..Default::default()
                        },
                    );
                }
                ui.label(job);
            }
        });
}
