//! The declarative schema model.
//!
//! A [`Schema`] maps dotted field paths to [`FieldDef`]s describing a
//! document's shape and constraints. Paths use dot notation; a `$` segment
//! stands for "any array element".
//!
//! Schemas are built programmatically:
//!
//! ```rust
//! use mockdoc::{FieldDef, FieldKind, Schema};
//!
//! let schema = Schema::new()
//!     .field("title", FieldKind::String)
//!     .field("score", FieldDef { min: Some(1.0), ..FieldDef::of(FieldKind::Number) });
//! assert_eq!(schema.len(), 2);
//! ```
//!
//! or parsed from a JSON definition with [`Schema::from_value`], which
//! accepts shorthand type names, full definitions, wrapper descriptors and
//! nested schemas:
//!
//! ```json
//! {
//!     "title": "String",
//!     "score": { "type": "Number", "min": 1 },
//!     "author": { "type": { "name": "String" } }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::pattern::StringPattern;

/// Errors raised while parsing a schema definition.
///
/// Only structurally unusable definitions are errors; unknown type or
/// pattern names degrade to null-valued fields instead.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema definition must be a JSON object")]
    NotAnObject,

    #[error("field '{path}': {reason}")]
    InvalidField { path: String, reason: String },
}

/// The primitive kinds a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Array,
    Boolean,
    Date,
    Number,
    Integer,
    Object,
    String,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Array" => Some(Self::Array),
            "Boolean" => Some(Self::Boolean),
            "Date" => Some(Self::Date),
            "Number" => Some(Self::Number),
            "Integer" => Some(Self::Integer),
            "Object" => Some(Self::Object),
            "String" => Some(Self::String),
            _ => None,
        }
    }
}

/// A field's resolved type descriptor: either a primitive kind or a
/// reference to a nested schema. Resolution happens once, at schema load;
/// the synthesizer only ever matches on this tag.
#[derive(Debug, Clone)]
pub enum FieldType {
    Kind(FieldKind),
    Nested(Schema),
}

/// A zero-argument computed value, invoked at synthesis time with no field
/// context.
#[derive(Clone)]
pub struct AutoValue(Arc<dyn Fn() -> Value + Send + Sync>);

impl AutoValue {
    pub fn new(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for AutoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AutoValue(..)")
    }
}

/// Per-path field definition. All attributes are optional; a definition
/// with no resolvable type synthesizes to null.
#[derive(Debug, Clone, Default)]
pub struct FieldDef {
    pub field_type: Option<FieldType>,
    /// Explicit literal used verbatim, ahead of everything else.
    pub mock_value: Option<Value>,
    pub default_value: Option<Value>,
    pub auto_value: Option<AutoValue>,
    /// Ordered permitted literals; the first one wins when nothing more
    /// specific applies. Empty means absent.
    pub allowed_values: Vec<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub reg_ex: Option<StringPattern>,
}

impl FieldDef {
    /// Definition carrying just a primitive kind.
    pub fn of(kind: FieldKind) -> Self {
        Self {
            field_type: Some(FieldType::Kind(kind)),
            ..Default::default()
        }
    }

    /// Definition referencing a nested schema.
    pub fn nested(schema: Schema) -> Self {
        Self {
            field_type: Some(FieldType::Nested(schema)),
            ..Default::default()
        }
    }

    /// Parse one field definition. `path` is only used for diagnostics.
    fn from_value(path: &str, value: &Value) -> Result<Self, SchemaError> {
        match value {
            Value::String(name) => Ok(Self {
                field_type: parse_type_name(path, name),
                ..Default::default()
            }),
            Value::Object(map) => {
                let mut def = FieldDef::default();
                for (key, attr) in map {
                    match key.as_str() {
                        "type" => def.field_type = parse_type(path, attr)?,
                        "mockValue" => def.mock_value = Some(attr.clone()),
                        "defaultValue" => def.default_value = Some(attr.clone()),
                        "allowedValues" => {
                            def.allowed_values = attr.as_array().cloned().unwrap_or_default();
                        }
                        "min" => def.min = attr.as_f64(),
                        "max" => def.max = attr.as_f64(),
                        "regEx" => {
                            def.reg_ex = attr.as_str().and_then(|name| {
                                let pattern = StringPattern::from_name(name);
                                if pattern.is_none() {
                                    tracing::warn!(path, pattern = name, "unknown string pattern, ignoring");
                                }
                                pattern
                            });
                        }
                        other => {
                            tracing::debug!(path, attribute = other, "ignoring unsupported field attribute");
                        }
                    }
                }
                Ok(def)
            }
            _ => Err(SchemaError::InvalidField {
                path: path.to_string(),
                reason: "definition must be a type name or an object".to_string(),
            }),
        }
    }
}

impl From<FieldKind> for FieldDef {
    fn from(kind: FieldKind) -> Self {
        FieldDef::of(kind)
    }
}

impl From<Schema> for FieldDef {
    fn from(schema: Schema) -> Self {
        FieldDef::nested(schema)
    }
}

impl From<FieldType> for FieldDef {
    fn from(field_type: FieldType) -> Self {
        FieldDef {
            field_type: Some(field_type),
            ..Default::default()
        }
    }
}

/// Parse a `type` attribute: a type-name string, a wrapper descriptor
/// (array of definitions, unwrapped to the first), or a nested schema
/// object.
fn parse_type(path: &str, value: &Value) -> Result<Option<FieldType>, SchemaError> {
    match value {
        Value::String(name) => Ok(parse_type_name(path, name)),
        Value::Array(defs) => match defs.first() {
            Some(first) => parse_type(path, first),
            None => Ok(None),
        },
        Value::Object(_) => Ok(Some(FieldType::Nested(Schema::from_value(value)?))),
        _ => {
            tracing::warn!(path, "unsupported type descriptor, value will be null");
            Ok(None)
        }
    }
}

fn parse_type_name(path: &str, name: &str) -> Option<FieldType> {
    let kind = FieldKind::from_name(name);
    if kind.is_none() {
        tracing::warn!(path, type_name = name, "unknown field type, value will be null");
    }
    kind.map(FieldType::Kind)
}

/// An ordered mapping from dotted field paths to field definitions.
///
/// Declaration order is preserved and is the order in which the synthesizer
/// resolves values.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldDef)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, chainable.
    pub fn field(mut self, path: impl Into<String>, def: impl Into<FieldDef>) -> Self {
        self.fields.push((path.into(), def.into()));
        self
    }

    /// Parse a schema from a JSON definition object.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let map = value.as_object().ok_or(SchemaError::NotAnObject)?;
        let mut schema = Schema::new();
        for (path, def) in map {
            let field = FieldDef::from_value(path, def)?;
            schema.fields.push((path.clone(), field));
        }
        Ok(schema)
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields.iter().map(|(path, def)| (path.as_str(), def))
    }

    pub fn get(&self, path: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, def)| def)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Remove the `mock_value` annotation from every field definition.
    pub fn strip_mock_values(&mut self) {
        for (_, def) in &mut self.fields {
            def.mock_value = None;
        }
    }
}
