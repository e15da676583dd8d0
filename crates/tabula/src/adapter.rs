mod read;
mod transaction;
mod write;

use crate::Config;

use tabula_core::{
    driver::{Connection, Escape, Response},
    Error, Result, Row, Value,
};
use tabula_sql::{Serializer, Statement};

/// Runs statements against one borrowed connection.
///
/// Construct one per connection, or per unit of work; it is cheap. The
/// adapter never opens, closes or releases the connection it borrows.
#[derive(Debug)]
pub struct Adapter<'c> {
    connection: &'c mut dyn Connection,
    config: Config,
}

/// Lets the serializer escape join literals the way the connection does.
struct ConnectionEscape<'a>(&'a dyn Connection);

impl Escape for ConnectionEscape<'_> {
    fn escape(&self, value: &Value) -> String {
        self.0.escape(value)
    }
}

impl<'c> Adapter<'c> {
    pub fn new(connection: &'c mut dyn Connection) -> Adapter<'c> {
        Adapter::with_config(connection, Config::default())
    }

    pub fn with_config(connection: &'c mut dyn Connection, config: Config) -> Adapter<'c> {
        Adapter { connection, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn enable_debug(&mut self) {
        self.config.debug = true;
    }

    pub fn disable_debug(&mut self) {
        self.config.debug = false;
    }

    /// Compiles `stmt` to SQL text and its bound parameters.
    pub fn compile(&self, stmt: &Statement) -> (String, Vec<Value>) {
        let escape = ConnectionEscape(&*self.connection);
        let mut params = vec![];
        let sql = Serializer::new(&escape).serialize(stmt, &mut params);
        (sql, params)
    }

    /// Executes a statement and returns the raw response: rows for queries,
    /// affected rows and the generated id for writes.
    pub async fn run(&mut self, sql: &str, params: &[Value]) -> Result<Response> {
        if self.config.debug {
            tracing::info!(target: "tabula::query", param_count = params.len(), "QUERY: {sql}");
        } else {
            tracing::trace!(target: "tabula::query", param_count = params.len(), "QUERY: {sql}");
        }

        self.connection.execute(sql, params).await
    }

    /// The first column of the first row.
    pub async fn one_scalar(&mut self, sql: &str, params: &[Value]) -> Result<Value> {
        let row = self
            .one_row(sql, params)
            .await?
            .ok_or_else(|| Error::empty_result(format!("no rows for scalar query `{sql}`")))?;

        row.into_first()
            .ok_or_else(|| Error::empty_result(format!("no columns for scalar query `{sql}`")))
    }

    /// The first row, if there is one.
    pub async fn one_row(&mut self, sql: &str, params: &[Value]) -> Result<Option<Row>> {
        Ok(self.all_rows(sql, params).await?.into_iter().next())
    }

    pub async fn all_rows(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        Ok(self.run(sql, params).await?.into_rows())
    }

    /// The first column of every row. The query should project exactly one
    /// column.
    pub async fn one_column(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Value>> {
        let rows = self.all_rows(sql, params).await?;

        if rows.is_empty() {
            return Err(Error::empty_result(format!("no rows for column query `{sql}`")));
        }

        rows.into_iter()
            .map(|row| {
                row.into_first().ok_or_else(|| {
                    Error::empty_result(format!("no columns for column query `{sql}`"))
                })
            })
            .collect()
    }

    pub(crate) async fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        let (sql, params) = self.compile(stmt);
        self.run(&sql, &params).await
    }
}
