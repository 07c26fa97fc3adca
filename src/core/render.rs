// logwindow - core/render.rs
//
// Pure record-to-row conversion: fixed-width number padding, message part
// concatenation, exception trace layout, and span sequencing.
//
// Core layer: spans carry a colour *role*, not a concrete colour; the UI
// theme resolves roles to colours at paint time. Rows are immutable once
// created and are appended to the visible list in arrival order.

use crate::core::model::{
    ExceptionTrace, LogPayload, LogRecord, LogStamp, Severity, EXCEPTION_LABEL,
};
use crate::util::constants::NUMBER_PAD_WIDTH;

/// Colour role of a span, resolved to a concrete colour by `ui::theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanRole {
    /// The bracketed sequence number.
    Number,
    /// A severity label, coloured per the static severity table.
    Level(Severity),
    /// The `|EXCEPTION|` label.
    ExceptionLevel,
    /// The origin name.
    Origin,
    /// Date, time, separators, message body, and trace text.
    Plain,
}

/// One coloured fragment of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: SpanRole,
}

impl Span {
    fn new(text: impl Into<String>, role: SpanRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// What kind of record produced a row. Drives the status-bar counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Message(Severity),
    Exception,
}

/// A rendered row: an ordered span sequence, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRow {
    /// Sequence number of the record this row renders.
    pub number: u64,
    pub kind: RowKind,
    pub spans: Vec<Span>,
}

impl StyledRow {
    /// The row's full text with styling stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Format the sequence number with fixed-width padding, e.g. `[   1234]`.
fn format_number(number: u64) -> String {
    format!("[{number:>NUMBER_PAD_WIDTH$}]")
}

/// Convert a record into its styled row.
pub fn render_record(record: &LogRecord) -> StyledRow {
    match &record.payload {
        LogPayload::Message { severity, parts } => {
            render_message(&record.origin, *severity, record.number, &record.stamp, parts)
        }
        LogPayload::Exception { trace } => {
            render_exception(&record.origin, &record.stamp, record.number, trace)
        }
    }
}

/// Build a message row. The span sequence mirrors the on-screen line:
///
/// `[   1234] 2026-08-06 - 14:03:59.120 ERROR + [origin] message`
pub fn render_message(
    origin: &str,
    severity: Severity,
    number: u64,
    stamp: &LogStamp,
    parts: &[String],
) -> StyledRow {
    let message: String = parts.concat();
    StyledRow {
        number,
        kind: RowKind::Message(severity),
        spans: vec![
            Span::new(format_number(number), SpanRole::Number),
            Span::new(" ", SpanRole::Plain),
            Span::new(stamp.date.clone(), SpanRole::Plain),
            Span::new(" - ", SpanRole::Plain),
            Span::new(stamp.time.clone(), SpanRole::Plain),
            Span::new(" ", SpanRole::Plain),
            Span::new(severity.label(), SpanRole::Level(severity)),
            Span::new(" + [", SpanRole::Plain),
            Span::new(origin, SpanRole::Origin),
            Span::new("] ", SpanRole::Plain),
            Span::new(message, SpanRole::Plain),
        ],
    }
}

/// Build an exception row: same prefix as a message row, with the
/// `|EXCEPTION|` label in place of a severity and the formatted trace on
/// continuation lines.
pub fn render_exception(
    origin: &str,
    stamp: &LogStamp,
    number: u64,
    trace: &ExceptionTrace,
) -> StyledRow {
    StyledRow {
        number,
        kind: RowKind::Exception,
        spans: vec![
            Span::new(format_number(number), SpanRole::Number),
            Span::new(" ", SpanRole::Plain),
            Span::new(stamp.date.clone(), SpanRole::Plain),
            Span::new(" - ", SpanRole::Plain),
            Span::new(stamp.time.clone(), SpanRole::Plain),
            Span::new(" ", SpanRole::Plain),
            Span::new(EXCEPTION_LABEL, SpanRole::ExceptionLevel),
            Span::new(" + [", SpanRole::Plain),
            Span::new(origin, SpanRole::Origin),
            Span::new("] \n\t", SpanRole::Plain),
            Span::new(trace.render(), SpanRole::Plain),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> LogStamp {
        LogStamp::from_parts("2026-08-06", "14:03:59.120")
    }

    #[test]
    fn number_is_padded_to_fixed_width() {
        assert_eq!(format_number(1), "[      1]");
        assert_eq!(format_number(12_345), "[  12345]");
        assert_eq!(format_number(1_234_567), "[1234567]");
        // Wider than the field: no truncation.
        assert_eq!(format_number(123_456_789), "[123456789]");
    }

    #[test]
    fn message_row_concatenates_parts_in_order() {
        let parts = vec!["connection ".to_string(), "refused".to_string()];
        let row = render_message("net", Severity::Error, 42, &stamp(), &parts);
        assert_eq!(
            row.text(),
            "[     42] 2026-08-06 - 14:03:59.120 ERROR + [net] connection refused"
        );
    }

    #[test]
    fn message_row_colours_level_origin_and_number() {
        let row = render_message(
            "net",
            Severity::Warning,
            7,
            &stamp(),
            &["slow".to_string()],
        );
        assert_eq!(row.kind, RowKind::Message(Severity::Warning));
        assert_eq!(row.spans[0].role, SpanRole::Number);
        let level = row
            .spans
            .iter()
            .find(|s| s.role == SpanRole::Level(Severity::Warning))
            .expect("level span");
        assert_eq!(level.text, "WARNING");
        let origin = row
            .spans
            .iter()
            .find(|s| s.role == SpanRole::Origin)
            .expect("origin span");
        assert_eq!(origin.text, "net");
    }

    #[test]
    fn exception_row_uses_exception_label_and_trace() {
        let trace = ExceptionTrace {
            summary: "some exception..".to_string(),
            causes: vec!["root cause".to_string()],
        };
        let row = render_exception("main", &stamp(), 9, &trace);
        assert_eq!(row.kind, RowKind::Exception);
        assert!(row
            .spans
            .iter()
            .any(|s| s.role == SpanRole::ExceptionLevel && s.text == EXCEPTION_LABEL));
        let text = row.text();
        assert!(text.contains("some exception..\n\tCaused by: root cause"));
    }

    #[test]
    fn render_record_dispatches_on_payload() {
        let record = LogRecord {
            origin: "main".to_string(),
            number: 1,
            stamp: stamp(),
            payload: LogPayload::Message {
                severity: Severity::Debug,
                parts: vec!["x".to_string()],
            },
        };
        assert_eq!(
            render_record(&record).kind,
            RowKind::Message(Severity::Debug)
        );
    }
}
