use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use mysql_async::{
    consts::{ColumnFlags, ColumnType},
    prelude::ToValue,
    Column,
};
use tabula_core::{Error, Result, Value as CoreValue};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts a value read from `column` into a Tabula value.
    ///
    /// The text protocol sends every value as bytes, so textual values are
    /// decoded by the column's declared type. DATE columns become
    /// [`CoreValue::Date`], DATETIME and TIMESTAMP columns become
    /// [`CoreValue::DateTime`], and MySQL's zero dates become
    /// [`CoreValue::Null`]. Other text is decoded as UTF-8 and kept as bytes
    /// when that fails.
    pub fn from_sql(value: mysql_async::Value, column: &Column) -> Result<Self> {
        use mysql_async::Value::*;

        let core = match value {
            NULL => CoreValue::Null,
            Int(v) => CoreValue::I64(v),
            UInt(v) => CoreValue::U64(v),
            Float(v) => CoreValue::F64(v as f64),
            Double(v) => CoreValue::F64(v),
            Bytes(bytes) => from_text(bytes, column)?,
            Date(0, 0, 0, ..) => CoreValue::Null,
            Date(year, month, day, hour, minute, second, micros) => {
                let invalid = || {
                    let date = format!("{year:04}-{month:02}-{day:02}");
                    let time = format!("{hour:02}:{minute:02}:{second:02}.{micros:06}");
                    Error::type_conversion(CoreValue::String(format!("{date} {time}")), "date")
                };

                let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
                    .ok_or_else(invalid)?;

                if column.column_type() == ColumnType::MYSQL_TYPE_DATE {
                    CoreValue::Date(date)
                } else {
                    let time = NaiveTime::from_hms_micro_opt(
                        hour as u32,
                        minute as u32,
                        second as u32,
                        micros,
                    )
                    .ok_or_else(invalid)?;
                    CoreValue::DateTime(NaiveDateTime::new(date, time))
                }
            }
            Time(negative, days, hours, minutes, seconds, _) => {
                let hours = days * 24 + hours as u32;
                let sign = if negative { "-" } else { "" };
                CoreValue::String(format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"))
            }
        };

        Ok(Self(core))
    }

    /// Fails for values that cannot be bound as a single parameter.
    pub fn check_bindable(value: &CoreValue) -> Result<()> {
        match value {
            CoreValue::List(_) => Err(Error::type_conversion(value.clone(), "mysql parameter")),
            _ => Ok(()),
        }
    }

    pub fn into_inner(self) -> CoreValue {
        self.0
    }
}

fn from_text(bytes: Vec<u8>, column: &Column) -> Result<CoreValue> {
    use ColumnType::*;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => return Ok(CoreValue::Bytes(err.into_bytes())),
    };

    let (parsed, ty) = match column.column_type() {
        MYSQL_TYPE_TINY | MYSQL_TYPE_SHORT | MYSQL_TYPE_INT24 | MYSQL_TYPE_LONG
        | MYSQL_TYPE_LONGLONG | MYSQL_TYPE_YEAR => {
            if column.flags().contains(ColumnFlags::UNSIGNED_FLAG) {
                (text.parse().ok().map(CoreValue::U64), "u64")
            } else {
                (text.parse().ok().map(CoreValue::I64), "i64")
            }
        }
        MYSQL_TYPE_FLOAT | MYSQL_TYPE_DOUBLE => (text.parse().ok().map(CoreValue::F64), "f64"),
        MYSQL_TYPE_DATE | MYSQL_TYPE_NEWDATE => {
            if is_zero_date(&text) {
                return Ok(CoreValue::Null);
            }
            let date = NaiveDate::parse_from_str(&text, "%Y-%m-%d").ok();
            (date.map(CoreValue::Date), "date")
        }
        MYSQL_TYPE_DATETIME | MYSQL_TYPE_DATETIME2 | MYSQL_TYPE_TIMESTAMP
        | MYSQL_TYPE_TIMESTAMP2 => {
            if is_zero_date(&text) {
                return Ok(CoreValue::Null);
            }
            let datetime = NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S%.f").ok();
            (datetime.map(CoreValue::DateTime), "datetime")
        }
        // DECIMAL stays textual to keep its precision
        _ => return Ok(CoreValue::String(text)),
    };

    parsed.ok_or_else(|| Error::type_conversion(CoreValue::String(text), ty))
}

fn is_zero_date(text: &str) -> bool {
    text.starts_with("0000-00-00")
}

/// Renders `value` as a MySQL literal with backslash escapes enabled. Lists
/// render as a parenthesized, comma separated tuple.
pub fn escape(value: &CoreValue) -> String {
    match value {
        CoreValue::List(items) => {
            let items: Vec<_> = items.iter().map(escape).collect();
            format!("({})", items.join(", "))
        }
        value => Value::from(value.clone()).to_value().as_sql(false),
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::U64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
            CoreValue::Date(value) => mysql_async::Value::Date(
                value.year() as u16,
                value.month() as u8,
                value.day() as u8,
                0,
                0,
                0,
                0,
            ),
            CoreValue::DateTime(value) => mysql_async::Value::Date(
                value.year() as u16,
                value.month() as u8,
                value.day() as u8,
                value.hour() as u8,
                value.minute() as u8,
                value.second() as u8,
                // A leap second reports more than a second of nanoseconds
                (value.nanosecond() / 1_000).min(999_999),
            ),
            // Never bound; see `check_bindable`
            CoreValue::List(_) => mysql_async::Value::NULL,
        }
    }
}
