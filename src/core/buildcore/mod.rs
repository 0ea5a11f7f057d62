pub use crate::core::{
    log::{LogEntry, Logger, QueueOp, SafeLogger, State},
    queue::{Queue, QueueError, SafeQueue},
};
use std::sync::{Arc, Mutex};

/// Queue engine paired with an operation log.
///
/// Every call locks the queue mutex first, which is the external
/// synchronization the unsynchronized engine requires when shared.
pub struct StringQueueSystem {
    queue: SafeQueue,
    logger: SafeLogger,
}

impl StringQueueSystem {
    /// Create a new system around an empty queue
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(Queue::new())),
            logger: Arc::new(Mutex::new(Logger::new())),
        }
    }

    /// Insert at the head, with logging
    pub fn insert_head(&self, item: &str) -> Result<(), QueueError> {
        let mut queue = self.queue.lock().unwrap();
        let result = queue.insert_head(item.as_bytes());
        let size_after = queue.len();
        drop(queue);
        self.log_result(QueueOp::InsertHead, Some(item.to_string()), &result, size_after);
        result
    }

    /// Append at the tail, with logging
    pub fn insert_tail(&self, item: &str) -> Result<(), QueueError> {
        let mut queue = self.queue.lock().unwrap();
        let result = queue.insert_tail(item.as_bytes());
        let size_after = queue.len();
        drop(queue);
        self.log_result(QueueOp::InsertTail, Some(item.to_string()), &result, size_after);
        result
    }

    /// Remove the head element and return its payload.
    /// The removal buffer is sized from the head payload, so nothing is
    /// truncated on this path.
    pub fn remove_head(&self) -> Result<String, QueueError> {
        let mut queue = self.queue.lock().unwrap();
        let result = match queue.peek_head().map(<[u8]>::len) {
            None => Err(QueueError::Empty),
            Some(len) => {
                let mut buf = vec![0u8; len + 1];
                queue.remove_head(Some(&mut buf)).map(|_| {
                    buf.truncate(len); // drop the terminator
                    String::from_utf8_lossy(&buf).into_owned()
                })
            }
        };
        let size_after = queue.len();
        drop(queue);
        self.log_result(QueueOp::RemoveHead, result.as_ref().ok().cloned(), &result, size_after);
        result
    }

    /// Reverse the queue in place
    pub fn reverse(&self) {
        let mut queue = self.queue.lock().unwrap();
        queue.reverse();
        let size_after = queue.len();
        drop(queue);
        let mut logger = self.logger.lock().unwrap();
        logger.log(QueueOp::Reverse, None, State::Committed, size_after);
    }

    /// Sort the queue contents in ascending payload order
    pub fn sort(&self) {
        let mut queue = self.queue.lock().unwrap();
        queue.sort();
        let size_after = queue.len();
        drop(queue);
        let mut logger = self.logger.lock().unwrap();
        logger.log(QueueOp::Sort, None, State::Committed, size_after);
    }

    /// Get current queue state
    pub fn queue_state(&self) -> (usize, bool) {
        let queue = self.queue.lock().unwrap();
        (queue.len(), queue.is_empty())
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry> {
        let logger = self.logger.lock().unwrap();
        logger.entries.clone()
    }

    fn log_result<T>(
        &self,
        op: QueueOp,
        item: Option<String>,
        result: &Result<T, QueueError>,
        size_after: usize,
    ) {
        let state = if result.is_ok() { State::Committed } else { State::Failed };
        let mut logger = self.logger.lock().unwrap();
        logger.log(op, item, state, size_after);
    }
}
