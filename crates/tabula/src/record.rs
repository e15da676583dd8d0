use crate::{Model, Status};

use std::sync::Arc;
use tabula_core::{Converters, ModelMeta, Result, Row, Value};

/// A model whose fields live in a [`Row`], for tables that have no
/// dedicated Rust type.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    meta: Arc<ModelMeta>,
    fields: Row,
    status: Status,
}

impl Record {
    pub fn new(meta: Arc<ModelMeta>) -> Record {
        Record {
            meta,
            fields: Row::new(),
            status: Status::New,
        }
    }

    /// Builds a record from a row read from the database. The caller decides
    /// the status; the adapter marks records it builds as loaded.
    pub fn from_row(meta: Arc<ModelMeta>, row: Row) -> Record {
        Record {
            meta,
            fields: row,
            status: Status::New,
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(column, value);
        self
    }

    pub fn fields(&self) -> &Row {
        &self.fields
    }

    /// Declared columns that have a value, in declaration order.
    fn declared_fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.meta
            .column_names()
            .filter_map(|column| self.fields.get(column).map(|value| (column, value)))
    }
}

impl Model for Record {
    fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// An unset generated id is left out so the database can assign one.
    fn insert_values(&self, converters: &Converters) -> Row {
        let insert_id = self.meta.insert_id.as_deref();

        let fields = self
            .declared_fields()
            .filter(|(column, value)| !(Some(*column) == insert_id && value.is_null()))
            .map(|(column, value)| (column, value.clone()))
            .collect();

        converters.apply(&self.meta, fields)
    }

    /// Primary-key columns are never updated; they address the row.
    fn update_values(&self, converters: &Converters) -> Row {
        let fields = self
            .declared_fields()
            .filter(|(column, _)| !self.meta.primary_key.iter().any(|pk| pk == column))
            .map(|(column, value)| (column, value.clone()))
            .collect();

        converters.apply(&self.meta, fields)
    }

    fn primary_key_values(&self) -> Row {
        self.meta
            .primary_key_columns()
            .map(|column| (column, self.fields.get(column).cloned().unwrap_or_default()))
            .collect()
    }

    fn assign(&mut self, column: &str, value: Value) -> Result<()> {
        self.fields.insert(column, value);
        Ok(())
    }

    fn load(&mut self, row: Row) -> Result<()> {
        self.fields = row;
        Ok(())
    }

    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
