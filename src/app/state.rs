// logwindow - app/state.rs
//
// Application state: the append-only row list and its auto-scroll
// bookkeeping. Owned by the eframe::App implementation; mutated on the GUI
// thread only.

use crate::core::model::Severity;
use crate::core::render::{RowKind, StyledRow};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// All rendered rows, in arrival order. Append-only: rows are never
    /// removed or mutated after creation.
    pub rows: Vec<StyledRow>,

    /// Auto-scroll target. Points at the last row whenever the list grows;
    /// `None` until the first row arrives.
    pub follow_row: Option<usize>,

    /// Whether the list follows the newest row. On by default; toggled from
    /// the View menu.
    pub auto_scroll: bool,

    /// Count of rows at or above Error severity (Fatal, Error, Exception).
    pub error_count: usize,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether the demo emitter is still running.
    pub demo_active: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark (true) or light (false) theme, from config.
    pub dark_mode: bool,

    /// UI body font size in points, from config.
    pub font_size: f32,
}

impl AppState {
    /// Create initial state from the loaded configuration values.
    pub fn new(dark_mode: bool, font_size: f32) -> Self {
        Self {
            rows: Vec::new(),
            follow_row: None,
            auto_scroll: true,
            error_count: 0,
            status_message: "Ready.".to_string(),
            demo_active: false,
            show_about: false,
            dark_mode,
            font_size,
        }
    }

    /// Append newly arrived rows.
    ///
    /// Whenever the list grows, the auto-scroll target moves to the newly
    /// added last row.
    pub fn ingest(&mut self, rows: Vec<StyledRow>) {
        if rows.is_empty() {
            return;
        }
        for row in &rows {
            if matches!(
                row.kind,
                RowKind::Exception
                    | RowKind::Message(Severity::Fatal)
                    | RowKind::Message(Severity::Error)
            ) {
                self.error_count += 1;
            }
        }
        self.rows.extend(rows);
        self.follow_row = Some(self.rows.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::LogStamp;
    use crate::core::render;

    fn row(number: u64, severity: Severity) -> StyledRow {
        render::render_message(
            "test",
            severity,
            number,
            &LogStamp::from_parts("2026-08-06", "12:00:00.000"),
            &["msg".to_string()],
        )
    }

    #[test]
    fn ingest_appends_in_order_and_follows_last_row() {
        let mut state = AppState::new(true, 14.0);
        assert_eq!(state.follow_row, None);

        state.ingest(vec![row(1, Severity::Message), row(2, Severity::Debug)]);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.follow_row, Some(1));

        state.ingest(vec![row(3, Severity::Trace)]);
        assert_eq!(state.rows.len(), 3);
        assert_eq!(state.follow_row, Some(2));

        let numbers: Vec<u64> = state.rows.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn empty_ingest_leaves_follow_target_unchanged() {
        let mut state = AppState::new(true, 14.0);
        state.ingest(vec![row(1, Severity::Message)]);
        state.ingest(Vec::new());
        assert_eq!(state.follow_row, Some(0));
    }

    #[test]
    fn error_counter_covers_fatal_error_and_exception() {
        let mut state = AppState::new(true, 14.0);
        let trace = crate::core::model::ExceptionTrace {
            summary: "x".to_string(),
            causes: Vec::new(),
        };
        let exc = render::render_exception(
            "test",
            &LogStamp::from_parts("2026-08-06", "12:00:00.000"),
            4,
            &trace,
        );
        state.ingest(vec![
            row(1, Severity::Fatal),
            row(2, Severity::Error),
            row(3, Severity::Warning),
            exc,
        ]);
        assert_eq!(state.error_count, 3);
    }
}
