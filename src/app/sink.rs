// logwindow - app/sink.rs
//
// The Log View Sink: implements the LogView callback contract, converts
// each record into a styled row, and marshals it onto the GUI thread over
// an mpsc channel.
//
// Architecture:
//   - `ChannelLogView` is registered with the logger and may be called from
//     any thread; each callback renders the row and sends it.
//   - `ViewBridge` lives on the GUI thread and is drained once per frame
//     under a per-frame budget.
//   - The list model itself (AppState::rows) is therefore only ever touched
//     on the GUI thread; the channel preserves emission order.
//
// Failure path: if the bridge has been dropped the send fails with
// `SinkError::ViewDisconnected`. The view then reports itself disconnected
// so the logger prunes it, and the lost record number is logged.

use crate::core::logger::LogView;
use crate::core::model::{ExceptionTrace, LogStamp, Severity};
use crate::core::render::{self, StyledRow};
use crate::util::error::SinkError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

/// Create a connected sink/bridge pair.
///
/// The view goes to `Logger::connect_view`; the bridge stays with the GUI.
pub fn channel_view() -> (Arc<ChannelLogView>, ViewBridge) {
    let (tx, rx) = mpsc::channel();
    (
        Arc::new(ChannelLogView {
            tx,
            connected: AtomicBool::new(true),
        }),
        ViewBridge { rx },
    )
}

/// Sink side: renders records and sends rows across the channel.
pub struct ChannelLogView {
    tx: mpsc::Sender<StyledRow>,
    connected: AtomicBool,
}

impl ChannelLogView {
    fn send(&self, row: StyledRow) -> Result<(), SinkError> {
        let record_number = row.number;
        self.tx
            .send(row)
            .map_err(|_| SinkError::ViewDisconnected { record_number })
    }

    fn send_or_disconnect(&self, row: StyledRow) {
        if let Err(e) = self.send(row) {
            self.connected.store(false, Ordering::SeqCst);
            tracing::warn!(error = %e, "Dropping log record");
        }
    }
}

impl LogView for ChannelLogView {
    fn append(
        &self,
        origin: &str,
        severity: Severity,
        number: u64,
        stamp: &LogStamp,
        parts: &[String],
    ) {
        let row = render::render_message(origin, severity, number, stamp, parts);
        self.send_or_disconnect(row);
    }

    fn append_exception(
        &self,
        origin: &str,
        stamp: &LogStamp,
        number: u64,
        trace: &ExceptionTrace,
    ) {
        let row = render::render_exception(origin, stamp, number, trace);
        self.send_or_disconnect(row);
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// GUI side: receiver polled once per frame.
pub struct ViewBridge {
    rx: mpsc::Receiver<StyledRow>,
}

impl ViewBridge {
    /// Drain up to `budget` pending rows without blocking.
    pub fn poll_rows(&self, budget: usize) -> Vec<StyledRow> {
        let mut rows = Vec::new();
        while rows.len() < budget {
            match self.rx.try_recv() {
                Ok(row) => rows.push(row),
                Err(_) => break,
            }
        }
        rows
    }
}
