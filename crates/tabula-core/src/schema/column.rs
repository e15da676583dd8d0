use super::Converter;

/// A selectable column of a model's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// Converter applied to the column's value before it is written.
    pub converter: Option<Converter>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Column {
        Column {
            name: name.into(),
            converter: None,
        }
    }

    pub fn with_converter(name: impl Into<String>, converter: Converter) -> Column {
        Column {
            name: name.into(),
            converter: Some(converter),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Column {
        Column::new(name)
    }
}
