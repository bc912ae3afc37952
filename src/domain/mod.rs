pub mod pattern;
pub mod schema;
pub mod source;

pub use pattern::StringPattern;
pub use schema::{AutoValue, FieldDef, FieldKind, FieldType, Schema, SchemaError};
pub use source::ValueSource;
