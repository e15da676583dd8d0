mod condition;
pub use condition::{Condition, ValueType};

mod join;
pub use join::{Join, JoinKind};

mod operator;
pub use operator::Operator;

use crate::{schema::ModelMeta, Row};

use indexmap::IndexMap;

/// A request for rows: filter conditions on the primary table plus the
/// tables to join.
///
/// Entries keep the order they were added in. The order shows up in the
/// generated SQL text but never changes the result set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Criteria {
    pub filter: IndexMap<String, Condition>,
    pub joins: Vec<Join>,
}

impl Criteria {
    pub fn new() -> Criteria {
        Criteria::default()
    }

    /// Adds a condition on `column` of the primary table. A bare value means
    /// equality.
    pub fn filter(mut self, column: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.filter.insert(column.into(), condition.into());
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Criteria addressing the row `meta` identifies with `key`, ignoring
    /// any entries of `key` that are not primary-key columns.
    pub fn by_primary_key(meta: &ModelMeta, key: &Row) -> Criteria {
        Criteria {
            filter: meta
                .primary_key_columns()
                .filter_map(|column| {
                    key.get(column)
                        .map(|value| (column.to_string(), Condition::Literal(value.clone())))
                })
                .collect(),
            joins: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_empty() && self.joins.is_empty()
    }
}
