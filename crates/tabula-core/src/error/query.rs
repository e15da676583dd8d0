use super::Error;

/// Error when the database rejects a statement or the connection fails while
/// running one.
///
/// The driver error is kept verbatim as the source. Nothing in Tabula retries
/// a failed statement.
#[derive(Debug)]
pub(super) struct QueryError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("query failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failed statement.
    ///
    /// This is the preferred way to convert driver-specific errors
    /// (`mysql_async` errors, I/O errors) into Tabula errors.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Query(QueryError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a query failure.
    pub fn is_query(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Query(_))
    }
}
