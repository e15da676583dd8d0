use super::Operator;
use crate::{Error, Result, Value};

use chrono::{NaiveDate, NaiveDateTime};

/// A single condition on a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = ?`
    Literal(Value),

    /// `column <op> ?`
    Comparison { op: Operator, value: Value },

    /// `column <op> <column>`.
    ///
    /// The referenced column is written into the statement verbatim and is
    /// never bound as a parameter. Only build this from trusted text; see
    /// [`Condition::raw_field`].
    FieldRef { op: Operator, column: String },

    /// `column [NOT] BETWEEN ? AND ?`
    Range {
        low: Value,
        high: Value,
        negated: bool,
    },

    /// `column IS [NOT] NULL`
    IsNull { negated: bool },
}

/// How the value of a loose comparison descriptor is to be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueType {
    /// Bound as a parameter.
    #[default]
    Value,

    /// A column or table reference embedded as raw SQL.
    Field,
}

impl Condition {
    pub fn eq(value: impl Into<Value>) -> Condition {
        Condition::Literal(value.into())
    }

    pub fn compare(op: Operator, value: impl Into<Value>) -> Condition {
        Condition::Comparison {
            op,
            value: value.into(),
        }
    }

    pub fn ne(value: impl Into<Value>) -> Condition {
        Condition::compare(Operator::Ne, value)
    }

    pub fn gt(value: impl Into<Value>) -> Condition {
        Condition::compare(Operator::Gt, value)
    }

    pub fn ge(value: impl Into<Value>) -> Condition {
        Condition::compare(Operator::Ge, value)
    }

    pub fn lt(value: impl Into<Value>) -> Condition {
        Condition::compare(Operator::Lt, value)
    }

    pub fn le(value: impl Into<Value>) -> Condition {
        Condition::compare(Operator::Le, value)
    }

    pub fn like(pattern: impl Into<Value>) -> Condition {
        Condition::compare(Operator::Like, pattern)
    }

    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Condition {
        Condition::Range {
            low: low.into(),
            high: high.into(),
            negated: false,
        }
    }

    pub fn not_between(low: impl Into<Value>, high: impl Into<Value>) -> Condition {
        Condition::Range {
            low: low.into(),
            high: high.into(),
            negated: true,
        }
    }

    pub fn is_null() -> Condition {
        Condition::IsNull { negated: false }
    }

    pub fn is_not_null() -> Condition {
        Condition::IsNull { negated: true }
    }

    /// Equality against another column, e.g. `users.id`.
    ///
    /// **Raw SQL.** `column` is pasted into the statement as-is. Never pass
    /// user input here.
    pub fn raw_field(column: impl Into<String>) -> Condition {
        Condition::raw_field_with(Operator::Eq, column)
    }

    /// Like [`Condition::raw_field`] with an arbitrary operator.
    pub fn raw_field_with(op: Operator, column: impl Into<String>) -> Condition {
        Condition::FieldRef {
            op,
            column: column.into(),
        }
    }

    /// Resolves a loose `{value, comparison, valueType}` descriptor.
    ///
    /// `comparison` is case-insensitive and defaults to `=`. Range
    /// comparisons need a two-element [`Value::List`]; null checks ignore
    /// `value`. A `Field` value type must carry a string.
    pub fn parse(
        comparison: Option<&str>,
        value: Value,
        value_type: ValueType,
    ) -> Result<Condition> {
        let comparison = comparison.map(|c| c.trim().to_lowercase());

        match comparison.as_deref().unwrap_or("=") {
            "is null" => return Ok(Condition::is_null()),
            "is not null" => return Ok(Condition::is_not_null()),
            c @ ("between" | "not between") => {
                let negated = c == "not between";
                return match value.into_list().as_deref() {
                    Some([low, high]) => Ok(Condition::Range {
                        low: low.clone(),
                        high: high.clone(),
                        negated,
                    }),
                    _ => Err(Error::invalid_argument(format!(
                        "`{c}` needs exactly two values"
                    ))),
                };
            }
            _ => {}
        }

        let op: Operator = comparison.as_deref().unwrap_or("=").parse()?;

        match value_type {
            ValueType::Field => match value {
                Value::String(column) => Ok(Condition::FieldRef { op, column }),
                other => Err(Error::invalid_argument(format!(
                    "field comparison needs a column name, got {}",
                    other.type_name()
                ))),
            },
            ValueType::Value if op == Operator::Eq => Ok(Condition::Literal(value)),
            ValueType::Value => Ok(Condition::Comparison { op, value }),
        }
    }

    /// Number of parameters this condition binds when compiled.
    pub fn param_count(&self) -> usize {
        match self {
            Condition::Literal(_) | Condition::Comparison { .. } => 1,
            Condition::Range { .. } => 2,
            Condition::FieldRef { .. } | Condition::IsNull { .. } => 0,
        }
    }
}

macro_rules! impl_from_for_condition {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Condition {
                fn from(value: $ty) -> Condition {
                    Condition::Literal(value.into())
                }
            }
        )*
    };
}

impl_from_for_condition!(
    Value,
    bool,
    i32,
    i64,
    u32,
    u64,
    f64,
    String,
    &String,
    &str,
    NaiveDate,
    NaiveDateTime
);
