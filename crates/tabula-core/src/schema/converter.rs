use super::ModelMeta;
use crate::{Row, Value};

/// Write-side conversion registered for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Converter {
    /// `true` is stored as `1`, anything else as `0`.
    Boolean,

    /// Stored as `YYYY-MM-DD`.
    Date,

    /// Stored as `YYYY-MM-DD HH:mm:ss`.
    DateTime,
}

/// The table of converter functions handed to models when they produce
/// their insert and update values.
///
/// The defaults match what MySQL expects for `TINYINT(1)`, `DATE` and
/// `DATETIME` columns. Each entry can be replaced.
#[derive(Debug, Clone, Copy)]
pub struct Converters {
    pub boolean: fn(Value) -> Value,
    pub date: fn(Value) -> Value,
    pub datetime: fn(Value) -> Value,
}

impl Converters {
    pub fn convert(&self, converter: Converter, value: Value) -> Value {
        match converter {
            Converter::Boolean => (self.boolean)(value),
            Converter::Date => (self.date)(value),
            Converter::DateTime => (self.datetime)(value),
        }
    }

    /// Runs every value in `fields` through the converter its column
    /// declares in `meta`. Columns without a converter, or unknown to the
    /// model, pass through unchanged.
    pub fn apply(&self, meta: &ModelMeta, fields: Row) -> Row {
        fields
            .into_iter()
            .map(|(column, value)| {
                let value = match meta.column(&column).and_then(|c| c.converter) {
                    Some(converter) => self.convert(converter, value),
                    None => value,
                };
                (column, value)
            })
            .collect()
    }
}

impl Default for Converters {
    fn default() -> Converters {
        Converters {
            boolean: convert_boolean,
            date: convert_date,
            datetime: convert_datetime,
        }
    }
}

fn convert_boolean(value: Value) -> Value {
    match value {
        Value::Bool(true) => Value::I64(1),
        _ => Value::I64(0),
    }
}

fn convert_date(value: Value) -> Value {
    match value {
        Value::Date(date) => Value::String(date.format("%Y-%m-%d").to_string()),
        Value::DateTime(datetime) => Value::String(datetime.format("%Y-%m-%d").to_string()),
        Value::Null => Value::Null,
        value => value,
    }
}

fn convert_datetime(value: Value) -> Value {
    match value {
        Value::DateTime(datetime) => {
            Value::String(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        }
        Value::Date(date) => Value::String(format!("{} 00:00:00", date.format("%Y-%m-%d"))),
        Value::Null => Value::Null,
        value => value,
    }
}
