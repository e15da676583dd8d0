use crate::Error;

use std::{fmt, str::FromStr};

/// Binary comparison operators that take one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
    NotLike,
}

impl Operator {
    pub fn as_sql(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Parses the comparison vocabulary, ignoring case and surrounding
    /// whitespace. Null checks and ranges are not operators; see
    /// [`Condition::parse`](super::Condition::parse).
    fn from_str(s: &str) -> Result<Operator, Error> {
        Ok(match s.trim().to_lowercase().as_str() {
            "=" => Operator::Eq,
            "!=" | "<>" => Operator::Ne,
            ">" => Operator::Gt,
            ">=" => Operator::Ge,
            "<" => Operator::Lt,
            "<=" => Operator::Le,
            "like" => Operator::Like,
            "not like" => Operator::NotLike,
            other => return Err(Error::invalid_argument(format!("unknown comparison `{other}`"))),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
