use super::Error;

/// Error when a single-row or single-column accessor runs against zero rows,
/// or when the keyed reload after a write finds nothing.
#[derive(Debug)]
pub(super) struct EmptyResultError {
    context: Option<Box<str>>,
}

impl std::error::Error for EmptyResultError {}

impl core::fmt::Display for EmptyResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("empty result")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an empty result error.
    ///
    /// The context parameter describes the statement that came back empty.
    pub fn empty_result(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyResult(EmptyResultError {
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if this error is an empty result error.
    pub fn is_empty_result(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyResult(_))
    }
}
