mod column;
pub use column::Column;

mod converter;
pub use converter::{Converter, Converters};

mod model;
pub use model::{Builder, ModelMeta, TableName};
