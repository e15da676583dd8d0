use std::sync::{Arc, Mutex};
use tabula_core::Value;

/// A statement as the connection received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A wrapper around the statement log that provides a clean API for tests
pub struct ExecLog {
    executed: Arc<Mutex<Vec<Executed>>>,
}

impl ExecLog {
    pub(crate) fn new(executed: Arc<Mutex<Vec<Executed>>>) -> Self {
        Self { executed }
    }

    /// Get the number of logged statements
    pub fn len(&self) -> usize {
        self.executed.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.executed.lock().unwrap().is_empty()
    }

    /// Count statements whose SQL starts with `prefix`
    pub fn count_prefixed(&self, prefix: &str) -> usize {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .filter(|executed| executed.sql.starts_with(prefix))
            .count()
    }

    pub fn has_select(&self) -> bool {
        self.count_prefixed("SELECT") > 0
    }

    pub fn has_insert(&self) -> bool {
        self.count_prefixed("INSERT") > 0
    }

    pub fn has_update(&self) -> bool {
        self.count_prefixed("UPDATE") > 0
    }

    pub fn has_delete(&self) -> bool {
        self.count_prefixed("DELETE") > 0
    }

    /// SQL text of every logged statement, oldest first
    pub fn statements(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|executed| executed.sql.clone())
            .collect()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.executed.lock().unwrap().clear();
    }

    /// Remove and return the oldest statement from the log
    pub fn pop(&mut self) -> Option<(String, Vec<Value>)> {
        let mut executed = self.executed.lock().unwrap();
        if executed.is_empty() {
            None
        } else {
            let executed = executed.remove(0);
            Some((executed.sql, executed.params))
        }
    }
}
