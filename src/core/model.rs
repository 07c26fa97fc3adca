// logwindow - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies. These types are the shared vocabulary across all layers.

use chrono::Local;

// =============================================================================
// Severity
// =============================================================================

/// Severity levels, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Message,
    Debug,
    Trace,
}

impl Severity {
    /// Returns all variants in display order (most severe first).
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Fatal,
            Severity::Error,
            Severity::Warning,
            Severity::Message,
            Severity::Debug,
            Severity::Trace,
        ]
    }

    /// Label rendered in the level column of a row.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Message => "MESSAGE",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Level label used for exception records in place of a severity label.
pub const EXCEPTION_LABEL: &str = "|EXCEPTION|";

// =============================================================================
// Timestamp
// =============================================================================

/// Wall-clock stamp captured at emission time, already split into the date
/// and time strings the row renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStamp {
    /// Local date, `YYYY-MM-DD`.
    pub date: String,
    /// Local time with millisecond precision, `HH:MM:SS.mmm`.
    pub time: String,
}

impl LogStamp {
    /// Capture the current local time.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S%.3f").to_string(),
        }
    }

    /// Build a stamp from pre-formatted parts.
    pub fn from_parts(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

// =============================================================================
// Log record
// =============================================================================

/// A single emitted log event, as handed to registered views.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Name of the logger that emitted the record.
    pub origin: String,

    /// Monotonically increasing sequence number, starting at 1, shared
    /// across all severities and the exception path.
    pub number: u64,

    /// Stamp captured when the record was emitted.
    pub stamp: LogStamp,

    /// Message parts or a captured exception.
    pub payload: LogPayload,
}

/// Record payload: either a variadic message or a captured exception.
#[derive(Debug, Clone)]
pub enum LogPayload {
    /// Message parts, concatenated in order at render time.
    Message {
        severity: Severity,
        parts: Vec<String>,
    },

    /// A captured error chain.
    Exception { trace: ExceptionTrace },
}

// =============================================================================
// Exception trace
// =============================================================================

/// The formatted chain of a `std::error::Error`: the error's own display
/// line plus each `source()` cause in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionTrace {
    /// Display text of the error itself.
    pub summary: String,
    /// Display text of each cause, outermost first.
    pub causes: Vec<String>,
}

impl ExceptionTrace {
    /// Capture an error and its full source chain.
    pub fn capture(error: &(dyn std::error::Error + 'static)) -> Self {
        let summary = error.to_string();
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self { summary, causes }
    }

    /// Render the trace as plain text: the summary line followed by one
    /// indented `Caused by:` line per cause.
    pub fn render(&self) -> String {
        let mut out = self.summary.clone();
        for cause in &self.causes {
            out.push_str("\n\tCaused by: ");
            out.push_str(cause);
        }
        out
    }
}
