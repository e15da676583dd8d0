#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::stmt::Statement;

use tabula_core::driver::Escape;

/// Serialize a statement to a SQL string
pub struct Serializer<'a> {
    /// Renders literals for join predicates, which are embedded in the
    /// statement text instead of bound.
    escape: &'a dyn Escape,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// True while serializing a join predicate. Values are escaped into the
    /// text instead of being pushed as parameters.
    inline_values: bool,
}

impl<'a> Serializer<'a> {
    pub fn new(escape: &'a dyn Escape) -> Serializer<'a> {
        Serializer { escape }
    }

    /// Serializes `stmt`, pushing bound values onto `params` in the order
    /// their placeholders appear in the returned text.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            inline_values: false,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}

impl std::fmt::Debug for Serializer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serializer").finish_non_exhaustive()
    }
}
