use tabula_core::{Converters, ModelMeta, Result, Row, Value};

/// Where a model instance stands relative to the database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not written yet, or not read from the database.
    #[default]
    New,

    /// Fields reflect a row as the database returned it.
    Loaded,
}

/// The contract between a model type and the [`Adapter`](crate::Adapter).
///
/// The adapter never holds on to a model. It borrows one for the length of
/// a single operation, reads its values through this trait and, after a
/// successful read or write-then-reload, overwrites its fields with
/// [`Model::load`] and marks it [`Status::Loaded`].
pub trait Model {
    /// Table identity and column layout.
    fn meta(&self) -> &ModelMeta;

    /// Column values for an `INSERT`, run through `converters`.
    fn insert_values(&self, converters: &Converters) -> Row;

    /// Column values for an `UPDATE`, run through `converters`.
    fn update_values(&self, converters: &Converters) -> Row {
        self.insert_values(converters)
    }

    /// Current values of every primary-key column.
    fn primary_key_values(&self) -> Row;

    /// Sets a single field. Used to hand over a database-generated id.
    fn assign(&mut self, column: &str, value: Value) -> Result<()>;

    /// Overwrites the model's fields from a row.
    fn load(&mut self, row: Row) -> Result<()>;

    fn status(&self) -> Status;

    fn set_status(&mut self, status: Status);
}
