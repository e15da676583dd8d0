use crate::{ExecLog, Executed};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tabula_core::{
    async_trait,
    driver::{Connection, Escape, Response},
    Error, Result, Row, Value,
};

/// A scripted connection.
///
/// Every statement is recorded. Responses are handed out in the order they
/// were queued; once the queue is empty a `SELECT` returns no rows and
/// anything else reports zero affected rows.
#[derive(Debug, Default)]
pub struct MockConnection {
    responses: VecDeque<Result<Response>>,

    /// Shared with every [`ExecLog`] handed out
    executed: Arc<Mutex<Vec<Executed>>>,

    released: bool,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next statement.
    pub fn respond(&mut self, response: Response) -> &mut Self {
        self.responses.push_back(Ok(response));
        self
    }

    /// Queue a result set.
    pub fn respond_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> &mut Self {
        self.respond(Response::values(rows.into_iter().collect::<Vec<_>>()))
    }

    /// Queue an empty result set.
    pub fn respond_empty(&mut self) -> &mut Self {
        self.respond_rows([])
    }

    /// Queue a write result.
    pub fn respond_write(&mut self, affected: u64, last_insert_id: u64) -> &mut Self {
        self.respond(Response::count(affected).with_last_insert_id(last_insert_id))
    }

    /// Queue a failure for the next statement.
    pub fn fail(&mut self, err: Error) -> &mut Self {
        self.responses.push_back(Err(err));
        self
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.executed.clone())
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Number of queued responses not consumed yet.
    pub fn pending(&self) -> usize {
        self.responses.len()
    }
}

impl Escape for MockConnection {
    fn escape(&self, value: &Value) -> String {
        tabula_driver_mysql::escape(value)
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        if self.released {
            return Err(Error::msg("connection already released"));
        }

        self.executed
            .lock()
            .expect("Failed to acquire exec log lock")
            .push(Executed {
                sql: sql.to_string(),
                params: params.to_vec(),
            });

        match self.responses.pop_front() {
            Some(response) => response,
            None if sql.starts_with("SELECT") => Ok(Response::values(vec![])),
            None => Ok(Response::count(0)),
        }
    }

    async fn release(&mut self) -> Result<()> {
        if self.released {
            return Err(Error::msg("connection already released"));
        }

        self.released = true;
        Ok(())
    }
}
