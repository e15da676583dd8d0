use super::{Formatter, ToSql};

use tabula_core::Value;

/// Sink for bound statement parameters.
pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// A bound parameter's slot in the statement text. MySQL placeholders are
/// positional, so it always renders as `?`.
pub struct Placeholder;

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
