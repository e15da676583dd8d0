use tabula_core::{Condition, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Operands joined with `AND`
    And(Vec<Expr>),

    /// Operands joined with `OR`, each wrapped in parentheses
    Or(Vec<Expr>),

    /// A condition on a single column
    Predicate(Predicate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: ColumnRef,
    pub condition: Condition,
}

/// A column, optionally qualified by the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub name: String,
}

impl Expr {
    pub fn predicate(column: ColumnRef, condition: Condition) -> Expr {
        Expr::Predicate(Predicate { column, condition })
    }

    pub fn eq(column: ColumnRef, value: Value) -> Expr {
        Expr::predicate(column, Condition::Literal(value))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Expr::And(operands) | Expr::Or(operands) => operands.is_empty(),
            Expr::Predicate(_) => false,
        }
    }
}

impl ColumnRef {
    pub fn bare(name: impl Into<String>) -> ColumnRef {
        ColumnRef {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> ColumnRef {
        ColumnRef {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Qualifies `name` with `table` unless it already names a table.
    pub fn qualify(table: &str, name: &str) -> ColumnRef {
        if name.contains('.') {
            ColumnRef::bare(name)
        } else {
            ColumnRef::qualified(table, name)
        }
    }
}
