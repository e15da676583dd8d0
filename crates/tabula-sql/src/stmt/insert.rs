use super::Statement;

use tabula_core::{Error, ModelMeta, Result, Row, TableName, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub into: TableName,
    pub columns: Vec<String>,

    /// One entry per row, each ordered like `columns`
    pub rows: Vec<Vec<Value>>,
}

impl Statement {
    /// Insert a single row built from already-converted field values.
    pub fn insert(meta: &ModelMeta, values: &Row) -> Statement {
        Insert {
            into: meta.table.clone(),
            columns: values.columns().map(str::to_string).collect(),
            rows: vec![values.values().cloned().collect()],
        }
        .into()
    }

    /// Insert several rows with one statement.
    ///
    /// The column list comes from the first row. Every other row must carry
    /// exactly the same columns; its values are reordered to match.
    pub fn insert_many(meta: &ModelMeta, rows: &[Row]) -> Result<Statement> {
        let [first, ..] = rows else {
            return Err(Error::invalid_argument("bulk insert needs at least one row"));
        };

        let columns: Vec<String> = first.columns().map(str::to_string).collect();

        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != columns.len() {
                    return Err(mismatch(i));
                }

                columns
                    .iter()
                    .map(|column| row.get(column).cloned().ok_or_else(|| mismatch(i)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Insert {
            into: meta.table.clone(),
            columns,
            rows,
        }
        .into())
    }
}

fn mismatch(row: usize) -> Error {
    Error::invalid_argument(format!(
        "bulk insert row {row} does not have the same columns as the first row"
    ))
}
