use crate::{Error, Result};

use chrono::{NaiveDate, NaiveDateTime};

/// A single column value, either bound as a statement parameter or read back
/// from a result row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// Double precision float
    F64(f64),

    /// String value
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Calendar date without a time zone
    Date(NaiveDate),

    /// Date and time without a time zone
    DateTime(NaiveDateTime),

    /// A list of values. Only used to carry the bounds of a range comparison
    /// before it is split into separate parameters.
    List(Vec<Value>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::List(_) => "List",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_i64(&self) -> Result<i64> {
        match *self {
            Self::I64(v) => Ok(v),
            Self::U64(v) => {
                i64::try_from(v).map_err(|_| Error::type_conversion(self.clone(), "i64"))
            }
            Self::Bool(v) => Ok(v as i64),
            _ => Err(Error::type_conversion(self.clone(), "i64")),
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        match *self {
            Self::U64(v) => Ok(v),
            Self::I64(v) => {
                u64::try_from(v).map_err(|_| Error::type_conversion(self.clone(), "u64"))
            }
            _ => Err(Error::type_conversion(self.clone(), "u64")),
        }
    }

    /// Reads the value as a boolean. MySQL reports `BOOLEAN` columns as
    /// `TINYINT(1)`, so integers are accepted too.
    pub fn to_bool(&self) -> Result<bool> {
        match *self {
            Self::Bool(v) => Ok(v),
            Self::I64(v) => Ok(v != 0),
            Self::U64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(self.clone(), "bool")),
        }
    }

    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::U64(src.into())
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v)
                .map_err(|e| Error::type_conversion(Value::Bytes(e.into_bytes()), "String")),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_i64()
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_u64()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            Value::DateTime(v) => Ok(v.date()),
            Value::String(ref v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
                .map_err(|_| Error::type_conversion(value.clone(), "NaiveDate")),
            _ => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::String(ref v) => NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S")
                .map_err(|_| Error::type_conversion(value.clone(), "NaiveDateTime")),
            _ => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}
