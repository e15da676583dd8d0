use super::Condition;
use crate::schema::{ModelMeta, TableName};

use indexmap::IndexMap;

/// A table joined onto the primary table of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableName,

    /// `None` emits a plain `JOIN`.
    pub kind: Option<JoinKind>,

    /// The join predicate. Column names are written as given, so qualify
    /// them (`orders.user_id`) when they would otherwise be ambiguous.
    pub on: IndexMap<String, Condition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
}

impl Join {
    /// Join the table of the related model.
    pub fn new(related: &ModelMeta) -> Join {
        Join::table(related.table.clone())
    }

    pub fn table(table: TableName) -> Join {
        Join {
            table,
            kind: None,
            on: IndexMap::new(),
        }
    }

    pub fn inner(mut self) -> Self {
        self.kind = Some(JoinKind::Inner);
        self
    }

    pub fn left(mut self) -> Self {
        self.kind = Some(JoinKind::Left);
        self
    }

    pub fn on(mut self, column: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.on.insert(column.into(), condition.into());
        self
    }
}
