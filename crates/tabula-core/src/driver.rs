mod escape;
pub use escape::Escape;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, Result, Value};

use std::fmt::Debug;

/// A single logical database connection.
///
/// Tabula never opens or closes connections itself. The owner hands a
/// connection to an adapter for as long as it likes and calls
/// [`Connection::release`] once, when the connection is no longer needed.
/// Any call after `release` fails.
#[async_trait]
pub trait Connection: Escape + Debug + Send {
    /// Execute `sql`, binding `params` to its positional `?` placeholders in
    /// order.
    ///
    /// Statements producing a result set return [`Rows::Values`]; all others
    /// return [`Rows::Count`] with the affected row count and, for inserts
    /// into tables with an auto-increment column, the generated id.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Response>;

    /// Give the connection back. Pooled connections return to their pool,
    /// direct connections are closed.
    async fn release(&mut self) -> Result<()>;
}
