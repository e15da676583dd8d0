use super::{primary_key_predicate, Expr, Statement};

use tabula_core::{Error, ModelMeta, Result, Row, TableName, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableName,
    pub assignments: Vec<(String, Value)>,
    pub filter: Expr,
}

impl Statement {
    /// Update the row addressed by `key` with the converted `values`.
    pub fn update(meta: &ModelMeta, values: &Row, key: &Row) -> Result<Statement> {
        if values.is_empty() {
            return Err(Error::invalid_argument(format!(
                "nothing to update in table `{}`",
                meta.table
            )));
        }

        Ok(Update {
            table: meta.table.clone(),
            assignments: values
                .iter()
                .map(|(column, value)| (column.to_string(), value.clone()))
                .collect(),
            filter: primary_key_predicate(meta, key)?,
        }
        .into())
    }
}
