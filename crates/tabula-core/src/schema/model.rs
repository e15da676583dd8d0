use super::Column;

use std::fmt;

/// Table identity and column layout of a model.
///
/// Registered once per model type by the caller; the adapter and compiler
/// only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMeta {
    /// Name of the table, with its optional database qualifier.
    pub table: TableName,

    /// Selectable columns, in projection order.
    pub columns: Vec<Column>,

    /// Names of the primary-key columns.
    pub primary_key: Vec<String>,

    /// Column that receives the database-generated id after an insert.
    pub insert_id: Option<String>,
}

/// A table name, optionally qualified by the database (schema) it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    pub database: Option<String>,
    pub name: String,
}

#[derive(Debug)]
pub struct Builder {
    meta: ModelMeta,
}

impl ModelMeta {
    pub fn builder(table: impl Into<String>) -> Builder {
        Builder {
            meta: ModelMeta {
                table: TableName {
                    database: None,
                    name: table.into(),
                },
                columns: vec![],
                primary_key: vec![],
                insert_id: None,
            },
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.primary_key.iter().map(String::as_str)
    }

    /// Two models map to the same table when both name and qualifier match.
    pub fn same_table(&self, other: &ModelMeta) -> bool {
        self.table == other.table
    }
}

impl Builder {
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.meta.table.database = Some(database.into());
        self
    }

    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.meta.columns.push(column.into());
        self
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Column>,
    {
        self.meta.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn primary_key<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.meta.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn insert_id(mut self, column: impl Into<String>) -> Self {
        self.meta.insert_id = Some(column.into());
        self
    }

    pub fn build(self) -> ModelMeta {
        self.meta
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.database {
            Some(database) => write!(f, "{database}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
