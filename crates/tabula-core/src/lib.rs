pub mod criteria;
pub use criteria::{Condition, Criteria, Join, JoinKind, Operator, ValueType};

pub mod driver;
pub use driver::Connection;

mod error;
pub use error::{Error, IntoError};

mod row;
pub use row::Row;

pub mod schema;
pub use schema::{Column, Converter, Converters, ModelMeta, TableName};

mod value;
pub use value::Value;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
