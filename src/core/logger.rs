// logwindow - core/logger.rs
//
// The logging collaborator the window consumes: severity dispatch, sequence
// numbering, timestamp capture, and fan-out to registered views.
//
// Dispatch is synchronous and in emission order. Views that report
// themselves disconnected are pruned before each dispatch, so a dead sink
// never receives further callbacks.

use crate::core::model::{ExceptionTrace, LogPayload, LogRecord, LogStamp, Severity};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Inbound callback contract implemented by anything displaying the stream.
///
/// One callback per record, in emission order. `stamp` and `number` are
/// produced by the logger; implementations must not renumber or reorder.
pub trait LogView: Send + Sync {
    /// A message record: variadic parts to be concatenated in order.
    fn append(
        &self,
        origin: &str,
        severity: Severity,
        number: u64,
        stamp: &LogStamp,
        parts: &[String],
    );

    /// An exception record carrying a captured error chain.
    fn append_exception(&self, origin: &str, stamp: &LogStamp, number: u64, trace: &ExceptionTrace);

    /// Whether the view can still accept records. Views returning false are
    /// pruned on the next dispatch.
    fn is_connected(&self) -> bool {
        true
    }
}

/// A named log emitter dispatching to registered views.
pub struct Logger {
    origin: String,
    sequence: AtomicU64,
    views: RwLock<Vec<Arc<dyn LogView>>>,
}

impl Logger {
    /// Create a logger emitting under the given origin name.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            sequence: AtomicU64::new(0),
            views: RwLock::new(Vec::new()),
        }
    }

    /// Register a view. Every subsequent record is delivered to it.
    pub fn connect_view(&self, view: Arc<dyn LogView>) {
        self.views
            .write()
            .expect("logger view registry poisoned")
            .push(view);
    }

    /// Number of currently registered views (dead views count until the
    /// next dispatch prunes them).
    pub fn view_count(&self) -> usize {
        self.views
            .read()
            .expect("logger view registry poisoned")
            .len()
    }

    pub fn fatal(&self, message: impl Into<String>) {
        self.log_parts(Severity::Fatal, vec![message.into()]);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log_parts(Severity::Error, vec![message.into()]);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log_parts(Severity::Warning, vec![message.into()]);
    }

    pub fn message(&self, message: impl Into<String>) {
        self.log_parts(Severity::Message, vec![message.into()]);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log_parts(Severity::Debug, vec![message.into()]);
    }

    pub fn trace(&self, message: impl Into<String>) {
        self.log_parts(Severity::Trace, vec![message.into()]);
    }

    /// Emit a message record from pre-split parts.
    pub fn log_parts(&self, severity: Severity, parts: Vec<String>) {
        let record = LogRecord {
            origin: self.origin.clone(),
            number: self.next_number(),
            stamp: LogStamp::now(),
            payload: LogPayload::Message { severity, parts },
        };
        self.dispatch(&record);
    }

    /// Emit an exception record capturing `error` and its source chain.
    pub fn exception(&self, error: &(dyn std::error::Error + 'static)) {
        let record = LogRecord {
            origin: self.origin.clone(),
            number: self.next_number(),
            stamp: LogStamp::now(),
            payload: LogPayload::Exception {
                trace: ExceptionTrace::capture(error),
            },
        };
        self.dispatch(&record);
    }

    /// Sequence numbers start at 1 and increase by 1 per record across all
    /// severities and the exception path.
    fn next_number(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn dispatch(&self, record: &LogRecord) {
        let mut views = self.views.write().expect("logger view registry poisoned");
        views.retain(|view| {
            let connected = view.is_connected();
            if !connected {
                tracing::warn!(origin = %record.origin, "Pruning disconnected log view");
            }
            connected
        });
        for view in views.iter() {
            match &record.payload {
                LogPayload::Message { severity, parts } => view.append(
                    &record.origin,
                    *severity,
                    record.number,
                    &record.stamp,
                    parts,
                ),
                LogPayload::Exception { trace } => {
                    view.append_exception(&record.origin, &record.stamp, record.number, trace)
                }
            }
        }
    }
}
