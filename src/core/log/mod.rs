use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Queue operation recorded by the log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueOp {
    InsertHead,
    InsertTail,
    RemoveHead,
    Reverse,
    Sort,
}

/// Outcome of a queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Committed,
    Failed,
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub local_log_id: u64,
    pub op: QueueOp,
    pub item: Option<String>, // payload rendered for the log
    pub state: State,
    pub size_after: usize,
}

#[derive(Clone, Debug)]
/// Logger storing all entries
pub struct Logger {
    pub(crate) entries: Vec<LogEntry>,
}

impl Logger {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Log an operation
    pub fn log(&mut self, op: QueueOp, item: Option<String>, state: State, size_after: usize) {
        // --- Negative-space assertion: reversal and sorting cannot fail ---
        if matches!(op, QueueOp::Reverse | QueueOp::Sort) {
            assert_eq!(state, State::Committed, "Reverse and Sort must commit");
        }

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry { local_log_id, op, item, state, size_after });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }
}

/// Append entries as NDJSON, one JSON object per line.
pub fn append_logs(log: &[LogEntry], path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).expect("Serialization failed");
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

/// Thread-safe wrapper
pub type SafeLogger = Arc<Mutex<Logger>>;
