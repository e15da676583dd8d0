use super::{Delimited, Formatter, Params, ToSql};

use crate::stmt::{ColumnRef, Expr, Predicate};
use tabula_core::{Condition, Operator};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Expr::And(operands) => fmt!(f, Delimited(operands, " AND ")),
            Expr::Or(operands) => {
                let operands = operands.iter().map(|operand| ("(", (operand, ")")));
                fmt!(f, Delimited(operands, " OR "))
            }
            Expr::Predicate(predicate) => predicate.to_sql(f),
        }
    }
}

impl ToSql for &Predicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = &self.column;

        match &self.condition {
            Condition::Literal(value) => fmt!(f, column " = " value),
            Condition::Comparison { op, value } => fmt!(f, column " " op " " value),
            // Raw SQL, written as given
            Condition::FieldRef { op, column: other } => fmt!(f, column " " op " " other),
            Condition::Range { low, high, negated } => {
                let between = if *negated { " NOT BETWEEN " } else { " BETWEEN " };
                fmt!(f, column between low " AND " high)
            }
            Condition::IsNull { negated: false } => fmt!(f, column " IS NULL"),
            Condition::IsNull { negated: true } => fmt!(f, column " IS NOT NULL"),
        }
    }
}

impl ToSql for &ColumnRef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(table) = &self.table {
            fmt!(f, table ".");
        }
        fmt!(f, self.name);
    }
}

impl ToSql for &Operator {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self.as_sql());
    }
}
