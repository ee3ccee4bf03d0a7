//! Log capture for tests.
//!
//! The first call to [`capture_logs`] installs a process-wide logger. Records
//! are buffered per thread, so tests running in parallel only see their own
//! diagnostics.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// One record emitted while a capture was active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Records emitted during one [`capture_logs`] call, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedLogs {
    records: Vec<CapturedRecord>,
}

impl CapturedLogs {
    pub fn records(&self) -> &[CapturedRecord] {
        &self.records
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &CapturedRecord> + '_ {
        self.records.iter().filter(move |record| record.level == level)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.at_level(Level::Warn)
            .map(|record| record.message.as_str())
            .collect()
    }

    pub fn count(&self, level: Level) -> usize {
        self.at_level(level).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Vec<CapturedRecord>>> = const { RefCell::new(None) };
}

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        };
        ACTIVE.with(|active| {
            if let Some(buffer) = active.borrow_mut().as_mut() {
                buffer.push(captured);
            }
        });
    }

    fn flush(&self) {}
}

fn install() {
    INSTALL.call_once(|| {
        // Another logger may already be installed by the test binary; capture
        // then stays empty rather than failing the test run.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Runs `f` and returns its result together with every record it logged on
/// this thread. Captures nest: an inner capture does not leak into the outer
/// one.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    install();
    let previous = ACTIVE.with(|active| active.borrow_mut().replace(Vec::new()));
    let result = f();
    let records = ACTIVE.with(|active| {
        let mut active = active.borrow_mut();
        let records = active.take().unwrap_or_default();
        *active = previous;
        records
    });
    (result, CapturedLogs { records })
}
