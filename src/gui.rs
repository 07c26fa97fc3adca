// logwindow - gui.rs
//
// Top-level eframe::App implementation.
// Drains the sink bridge each frame, feeds the row list, and renders the
// menu bar, status bar, and the scrolling log panel.

use crate::app::demo::DemoManager;
use crate::app::sink::ViewBridge;
use crate::app::state::AppState;
use crate::ui;
use crate::util::constants::{MAX_SINK_ROWS_PER_FRAME, SINK_REPAINT_INTERVAL_MS};

/// The log window application.
pub struct LogWindowApp {
    pub state: AppState,
    bridge: ViewBridge,
    demo: Option<DemoManager>,
}

impl LogWindowApp {
    /// Create a new application instance wired to a sink bridge.
    pub fn new(state: AppState, bridge: ViewBridge, demo: Option<DemoManager>) -> Self {
        Self {
            state,
            bridge,
            demo,
        }
    }
}

impl eframe::App for LogWindowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain pending rows under the per-frame budget. Any excess stays
        // queued and is picked up on the next frame.
        let rows = self.bridge.poll_rows(MAX_SINK_ROWS_PER_FRAME);
        let had_rows = !rows.is_empty();
        self.state.ingest(rows);

        // Track the demo emitter so the status bar reflects completion.
        // Completion is declared only once the channel has drained, so the
        // final record count is accurate.
        let demo_running = self.demo.as_ref().is_some_and(|d| d.is_running());
        if self.state.demo_active && !demo_running && !had_rows {
            self.state.demo_active = false;
            self.state.status_message =
                format!("Demo complete: {} records.", self.state.rows.len());
        }

        // Keep repainting while records are still arriving so new rows (and
        // the auto-scroll that follows them) appear promptly.
        if had_rows || demo_running {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                SINK_REPAINT_INTERVAL_MS,
            ));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.auto_scroll, "Auto-scroll to newest");
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // LIVE badge while the demo emitter is streaming.
                if self.state.demo_active {
                    ui.label(
                        egui::RichText::new(" \u{25cf} LIVE ")
                            .strong()
                            .color(egui::Color32::from_rgb(34, 197, 94)) // Green 500
                            .background_color(egui::Color32::from_rgba_premultiplied(
                                34, 197, 94, 30,
                            )),
                    );
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.rows.len();
                    if total > 0 {
                        if self.state.error_count > 0 {
                            ui.label(format!(
                                "{total} records \u{00b7} {} errors",
                                self.state.error_count
                            ));
                        } else {
                            ui.label(format!("{total} records"));
                        }
                    }
                });
            });
        });

        // Central panel: the scrolling log list.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, &mut self.state);
        });

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }
}
