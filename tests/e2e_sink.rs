// logwindow - tests/e2e_sink.rs
//
// End-to-end tests for the logger -> sink -> bridge -> state path.
//
// These tests exercise the real logger dispatch, the real channel sink,
// and the real state ingestion -- no mocks, no stubs. This is the full
// path a record travels from emission to the visible (headless) row list;
// only the final egui paint is absent.

use logwindow::app::sink;
use logwindow::app::state::AppState;
use logwindow::core::logger::Logger;
use logwindow::core::model::{ExceptionTrace, Severity, EXCEPTION_LABEL};
use logwindow::core::render::{RowKind, SpanRole};
use logwindow::ui::theme;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Helpers
// =============================================================================

/// A two-level error chain with known text, used for the exception path.
#[derive(Debug)]
struct TestFailure {
    source: TestCause,
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("snapshot creation failed")
    }
}

impl std::error::Error for TestFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
struct TestCause;

impl fmt::Display for TestCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("volume is offline")
    }
}

impl std::error::Error for TestCause {}

/// Wire a fresh logger/sink/state triple.
fn wire() -> (Arc<Logger>, sink::ViewBridge, AppState) {
    let logger = Arc::new(Logger::new("e2e::test"));
    let (view, bridge) = sink::channel_view();
    logger.connect_view(view);
    (logger, bridge, AppState::new(true, 14.0))
}

// =============================================================================
// List length and ordering
// =============================================================================

/// The list length after N append calls equals N, and row order matches
/// call order exactly.
#[test]
fn e2e_n_appends_yield_n_rows_in_order() {
    let (logger, bridge, mut state) = wire();

    const N: usize = 250;
    for i in 0..N {
        match i % 5 {
            0 => logger.error(format!("error {i}")),
            1 => logger.warning(format!("warning {i}")),
            2 => logger.message(format!("message {i}")),
            3 => logger.debug(format!("debug {i}")),
            _ => logger.trace(format!("trace {i}")),
        }
    }

    state.ingest(bridge.poll_rows(usize::MAX));

    assert_eq!(state.rows.len(), N);
    let numbers: Vec<u64> = state.rows.iter().map(|r| r.number).collect();
    let expected: Vec<u64> = (1..=N as u64).collect();
    assert_eq!(numbers, expected, "sequence numbers contiguous from 1");
    for (i, row) in state.rows.iter().enumerate() {
        assert!(
            row.text().ends_with(&format!(" {i}")),
            "row {i} carries its own message: {}",
            row.text()
        );
    }
}

/// Incremental ingestion (the per-frame pattern) preserves order across
/// poll boundaries.
#[test]
fn e2e_budgeted_polling_preserves_order() {
    let (logger, bridge, mut state) = wire();

    for i in 0..100 {
        logger.message(format!("m{i}"));
    }

    // Drain in small budget-limited chunks, as the GUI frame loop does.
    loop {
        let rows = bridge.poll_rows(7);
        if rows.is_empty() {
            break;
        }
        state.ingest(rows);
    }

    assert_eq!(state.rows.len(), 100);
    let numbers: Vec<u64> = state.rows.iter().map(|r| r.number).collect();
    assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
}

// =============================================================================
// Auto-scroll target
// =============================================================================

/// After each append the auto-scroll target points at the last row.
#[test]
fn e2e_follow_row_tracks_the_last_row() {
    let (logger, bridge, mut state) = wire();

    for i in 0..10 {
        logger.debug(format!("d{i}"));
        state.ingest(bridge.poll_rows(usize::MAX));
        assert_eq!(state.follow_row, Some(state.rows.len() - 1));
    }
}

// =============================================================================
// Severity colour mapping
// =============================================================================

/// All six severities plus the exception variant produce a level span that
/// resolves through the static colour table.
#[test]
fn e2e_colour_mapping_covers_all_levels_and_exception() {
    let (logger, bridge, mut state) = wire();

    logger.fatal("f");
    logger.error("e");
    logger.warning("w");
    logger.message("m");
    logger.debug("d");
    logger.trace("t");
    logger.exception(&TestFailure { source: TestCause });

    state.ingest(bridge.poll_rows(usize::MAX));
    assert_eq!(state.rows.len(), 7);

    for (row, &severity) in state.rows.iter().zip(Severity::all()) {
        assert_eq!(row.kind, RowKind::Message(severity));
        let level_span = row
            .spans
            .iter()
            .find(|s| matches!(s.role, SpanRole::Level(_)))
            .expect("message row has a level span");
        assert_eq!(level_span.text, severity.label());
        // The table resolves every severity in both themes.
        let dark = theme::span_colour(level_span.role, true);
        let light = theme::span_colour(level_span.role, false);
        assert_eq!(dark, theme::severity_colour(severity, true));
        assert_eq!(light, theme::severity_colour(severity, false));
    }

    let exception_row = state.rows.last().unwrap();
    assert_eq!(exception_row.kind, RowKind::Exception);
    let label_span = exception_row
        .spans
        .iter()
        .find(|s| s.role == SpanRole::ExceptionLevel)
        .expect("exception row has the exception label span");
    assert_eq!(label_span.text, EXCEPTION_LABEL);
    assert_eq!(
        theme::span_colour(SpanRole::ExceptionLevel, true),
        theme::severity_colour(Severity::Error, true)
    );
}

// =============================================================================
// Row text shape
// =============================================================================

/// The first record renders with the fixed-width number field, the origin
/// in brackets, and the concatenated message.
#[test]
fn e2e_row_text_has_the_expected_shape() {
    let (logger, bridge, mut state) = wire();

    logger.log_parts(
        Severity::Message,
        vec!["hello ".to_string(), "world".to_string()],
    );
    state.ingest(bridge.poll_rows(usize::MAX));

    let text = state.rows[0].text();
    assert!(text.starts_with("[      1] "), "padded number: {text}");
    assert!(text.contains(" MESSAGE + [e2e::test] "), "shape: {text}");
    assert!(text.ends_with("hello world"), "concatenated parts: {text}");
}

// =============================================================================
// Exception trace rendering
// =============================================================================

/// The rendered trace text matches the error's standard formatted chain.
#[test]
fn e2e_exception_trace_matches_formatted_chain() {
    let (logger, bridge, mut state) = wire();

    let error = TestFailure { source: TestCause };
    let expected = ExceptionTrace::capture(&error).render();
    assert_eq!(
        expected,
        "snapshot creation failed\n\tCaused by: volume is offline"
    );

    logger.exception(&error);
    state.ingest(bridge.poll_rows(usize::MAX));

    let text = state.rows[0].text();
    assert!(
        text.ends_with(&expected),
        "trace text present verbatim: {text}"
    );
    assert!(text.contains("|EXCEPTION| + [e2e::test] \n\t"));
}

// =============================================================================
// Disconnect guard
// =============================================================================

/// Dropping the bridge marks the view disconnected and the logger prunes it
/// on the next dispatch instead of delivering into the void.
#[test]
fn e2e_disconnected_view_is_pruned() {
    let logger = Arc::new(Logger::new("e2e::test"));
    let (view, bridge) = sink::channel_view();
    logger.connect_view(view);
    assert_eq!(logger.view_count(), 1);

    logger.message("delivered");
    drop(bridge);
    logger.message("dropped, flags the view");
    logger.message("triggers the prune");

    assert_eq!(logger.view_count(), 0);
}
