use super::{Comma, Formatter, Params, ToSql};

use tabula_core::{driver::Escape, Value};

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Value::List(values) => {
                fmt!(f, "(" Comma(values) ")");
            }
            value if f.inline_values => {
                let literal = Escape::escape(f.serializer.escape, value);
                f.dst.push_str(&literal);
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder)
            }
        }
    }
}
