//! Compiles criteria and model writes into MySQL statements with positional
//! `?` parameters.
//!
//! Building a [`Statement`] resolves model metadata and criteria into a
//! small statement tree; [`Serializer`] turns the tree into SQL text and
//! pushes the bound values onto a [`Params`] sink in placeholder order.
//! Nothing here touches a connection.

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
