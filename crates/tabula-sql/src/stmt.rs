mod delete;
pub use delete::Delete;

mod expr;
pub use expr::{ColumnRef, Expr, Predicate};

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Join, Select};

mod update;
pub use update::Update;

use tabula_core::{Error, ModelMeta, Result, Row};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

/// Builds `pk1 = ? AND pk2 = ? ...` over every primary-key column of `meta`,
/// in declaration order, bound to the matching entries of `key`. A missing or
/// `NULL` key value is refused: it would match no row.
pub(crate) fn primary_key_predicate(meta: &ModelMeta, key: &Row) -> Result<Expr> {
    if meta.primary_key.is_empty() {
        return Err(Error::invalid_argument(format!(
            "table `{}` has no primary key",
            meta.table
        )));
    }

    let operands = meta
        .primary_key_columns()
        .map(|column| match key.get(column) {
            Some(value) if !value.is_null() => Ok(Expr::eq(ColumnRef::bare(column), value.clone())),
            _ => Err(Error::invalid_argument(format!(
                "missing primary key value `{column}` for table `{}`",
                meta.table
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Expr::And(operands))
}
