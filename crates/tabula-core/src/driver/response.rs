use crate::{Error, Result, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,

    /// Id generated by the statement, as reported by the database. Zero when
    /// the statement did not generate one.
    pub last_insert_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as rows in the order the database sent them
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
            last_insert_id: 0,
        }
    }

    pub fn values(rows: impl Into<Vec<Row>>) -> Self {
        Self {
            rows: Rows::Values(rows.into()),
            last_insert_id: 0,
        }
    }

    pub fn with_last_insert_id(mut self, id: u64) -> Self {
        self.last_insert_id = id;
        self
    }

    /// The rows of a result set. A write response yields no rows.
    pub fn into_rows(self) -> Vec<Row> {
        match self.rows {
            Rows::Values(rows) => rows,
            Rows::Count(_) => vec![],
        }
    }

    pub fn affected_rows(&self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(Error::msg("expected a row count, got a result set")),
        }
    }
}
