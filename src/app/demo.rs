// logwindow - app/demo.rs
//
// Demo emitter: a background thread that streams example traffic through
// the logger so the window has something to display. Each cycle emits one
// record per message severity; the run ends with one fatal record and one
// captured exception so every colour path is exercised on screen.

use crate::core::logger::Logger;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle to the detached demo thread.
pub struct DemoManager {
    running: Arc<AtomicBool>,
}

impl DemoManager {
    /// Spawn the emitter thread. It owns its logger handle and exits after
    /// the final exception record.
    pub fn start(logger: Arc<Logger>, cycles: u32) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        std::thread::spawn(move || {
            run_demo(&logger, cycles);
            flag.store(false, Ordering::SeqCst);
        });
        tracing::info!(cycles, "Demo emitter started");
        Self { running }
    }

    /// Whether the emitter thread is still producing records.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

fn run_demo(logger: &Logger, cycles: u32) {
    for _ in 0..cycles {
        logger.error("Error message example.");
        logger.warning("Warning message example.");
        logger.message("Normal log message example.");
        logger.debug("Debug message example.");
        logger.trace("Trace message example.");
    }
    logger.fatal("A fatal message example!");
    logger.exception(&DemoException::new());
    tracing::info!(cycles, "Demo emitter finished");
}

/// Two-level error chain so the exception row shows a `Caused by:` line.
#[derive(Debug)]
struct DemoException {
    source: DemoCause,
}

impl DemoException {
    fn new() -> Self {
        Self { source: DemoCause }
    }
}

impl fmt::Display for DemoException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("some exception..")
    }
}

impl std::error::Error for DemoException {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
struct DemoCause;

impl fmt::Display for DemoCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("simulated backing store failure")
    }
}

impl std::error::Error for DemoCause {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sink;

    #[test]
    fn demo_emits_the_expected_record_count() {
        let logger = Arc::new(Logger::new("demo"));
        let (view, bridge) = sink::channel_view();
        logger.connect_view(view);

        run_demo(&logger, 3);

        // 3 cycles x 5 severities, plus the fatal and the exception.
        let rows = bridge.poll_rows(usize::MAX);
        assert_eq!(rows.len(), 3 * 5 + 2);
        assert!(rows.last().unwrap().text().contains("some exception.."));
        assert!(rows
            .last()
            .unwrap()
            .text()
            .contains("Caused by: simulated backing store failure"));
    }

    #[test]
    fn manager_flag_clears_when_the_thread_finishes() {
        let logger = Arc::new(Logger::new("demo"));
        let (view, bridge) = sink::channel_view();
        logger.connect_view(view);

        let manager = DemoManager::start(logger, 1);
        // Drain until the final exception record arrives.
        let mut total = 0;
        while total < 7 {
            total += bridge.poll_rows(usize::MAX).len();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        // The flag flips right after the last record; allow a few polls.
        let mut tries = 0;
        while manager.is_running() && tries < 100 {
            std::thread::sleep(std::time::Duration::from_millis(5));
            tries += 1;
        }
        assert!(!manager.is_running());
    }
}
