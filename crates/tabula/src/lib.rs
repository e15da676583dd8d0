//! Maps model instances to rows of a MySQL database.
//!
//! An [`Adapter`] borrows a [`Connection`] and runs compiled statements on
//! it. Writes go through the write-then-reload protocol: after an `INSERT`
//! or `UPDATE` the row is selected again by primary key and the model is
//! overwritten with what the database actually stored, so defaults,
//! generated ids and trigger-set columns are always reflected in memory.
//!
//! ```ignore
//! let mut conn = MySql::new("mysql://localhost/app")?.connect().await?;
//! let mut db = Adapter::new(&mut conn);
//!
//! let mut user = Record::new(users.clone());
//! user.set("name", "ann");
//! db.insert(&mut user).await?;
//! assert_eq!(user.status(), Status::Loaded);
//!
//! conn.release().await?;
//! ```

mod adapter;
pub use adapter::Adapter;

mod config;
pub use config::Config;

mod model;
pub use model::{Model, Status};

mod record;
pub use record::Record;

pub use tabula_core::{
    driver::{self, Connection, Response, Rows},
    schema, Condition, Converter, Converters, Criteria, Error, Join, JoinKind, ModelMeta,
    Operator, Result, Row, Value, ValueType,
};

pub use tabula_sql::Statement;

#[cfg(feature = "mysql")]
pub use tabula_driver_mysql as mysql;
