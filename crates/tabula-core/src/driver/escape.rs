use crate::Value;

/// Renders values as SQL literals for the few places where a value cannot be
/// bound as a parameter.
pub trait Escape {
    /// Returns `value` as a quoted, escaped SQL literal in the connection's
    /// dialect.
    fn escape(&self, value: &Value) -> String;
}
