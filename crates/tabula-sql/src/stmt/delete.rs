use super::{primary_key_predicate, Expr, Statement};

use tabula_core::{Error, ModelMeta, Result, Row, TableName};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: TableName,
    pub filter: Expr,
}

impl Statement {
    /// Delete the single row addressed by `key`.
    pub fn delete(meta: &ModelMeta, key: &Row) -> Result<Statement> {
        Ok(Delete {
            from: meta.table.clone(),
            filter: primary_key_predicate(meta, key)?,
        }
        .into())
    }

    /// Delete every row addressed by `keys` in one statement. The filter is
    /// an `OR` of one primary-key predicate per key.
    pub fn delete_many(meta: &ModelMeta, keys: &[Row]) -> Result<Statement> {
        if keys.is_empty() {
            return Err(Error::invalid_argument("bulk remove needs at least one key"));
        }

        let operands = keys
            .iter()
            .map(|key| primary_key_predicate(meta, key))
            .collect::<Result<Vec<_>>>()?;

        Ok(Delete {
            from: meta.table.clone(),
            filter: Expr::Or(operands),
        }
        .into())
    }
}
