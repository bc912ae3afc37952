//! The document synthesizer.
//!
//! Walks a schema's field paths in declaration order and resolves exactly
//! one value per path:
//!
//! 1. Skip the path if an ancestor already wrote a value there (a nested
//!    schema populates its children before sibling paths are visited).
//! 2. Take the first explicit value among `mock_value`, `default_value`,
//!    `auto_value`, and the first of `allowed_values`.
//! 3. Otherwise synthesize from the field's resolved type; nested schemas
//!    recurse, unresolvable types yield null.
//!
//! Array placeholders (`$`) canonicalize to index 0, so synthesized arrays
//! carry exactly one representative element.

pub mod document;

#[cfg(test)]
mod synthesizer_test;

use serde_json::{json, Map, Value};

use crate::adapters::faker::FakerSource;
use crate::config::Settings;
use crate::domain::pattern::StringPattern;
use crate::domain::schema::{FieldDef, FieldKind, FieldType, Schema};
use crate::domain::source::ValueSource;
use document::canonical_segments;

/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "mock";

/// Length of the synthesized `_id` token.
const ID_LENGTH: usize = 17;

/// Digit templates for Phone-constrained fields. Paths containing "mobile"
/// (case-insensitive) use the mobile numbering pattern.
const PHONE_TEMPLATE: &str = "01### ######";
const MOBILE_PHONE_TEMPLATE: &str = "07### ######";

/// Options for one synthesis invocation.
#[derive(Debug, Clone, Default)]
pub struct SynthOptions {
    /// Seeds the provider and prefixes plain String values. Falls back to
    /// the synthesizer's configured prefix.
    pub prefix: Option<String>,
    /// Attach a synthesized `_id` field to the document.
    pub include_id: bool,
}

/// Schema-driven document synthesizer.
///
/// Carries an explicit enabled flag instead of reading ambient environment
/// state, so synthesis is a pure function of (schema, options, source).
/// When disabled, synthesis returns an empty document and
/// [`strip_mock_values`](Synthesizer::strip_mock_values) becomes active.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    enabled: bool,
    default_prefix: String,
}

impl Synthesizer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            default_prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Gate and default prefix taken from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enabled: settings.synthesis_enabled(),
            default_prefix: settings.prefix.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Synthesize a document with default options.
    pub fn synthesize(&self, schema: Option<&Schema>) -> Value {
        self.synthesize_with(schema, &SynthOptions::default())
    }

    /// Synthesize a document using a fresh provider seeded from the prefix,
    /// so repeated calls with the same prefix produce identical documents.
    pub fn synthesize_with(&self, schema: Option<&Schema>, opts: &SynthOptions) -> Value {
        let mut source = FakerSource::from_prefix(self.prefix_for(opts));
        self.synthesize_from(schema, opts, &mut source)
    }

    /// Synthesize a document drawing values from a caller-supplied source.
    pub fn synthesize_from(
        &self,
        schema: Option<&Schema>,
        opts: &SynthOptions,
        source: &mut dyn ValueSource,
    ) -> Value {
        let Some(schema) = schema else {
            return empty_document();
        };
        if !self.enabled {
            return empty_document();
        }

        let prefix = self.prefix_for(opts);
        let mut doc = self.document_for(schema, prefix, source);
        if opts.include_id {
            if let Value::Object(map) = &mut doc {
                map.insert("_id".to_string(), json!(source.token(ID_LENGTH)));
            }
        }
        doc
    }

    /// Gated counterpart to synthesis: removes mock annotations from the
    /// schema when synthesis is disabled, and is a pass-through otherwise.
    pub fn strip_mock_values(&self, schema: &mut Schema) {
        if self.enabled {
            return;
        }
        schema.strip_mock_values();
    }

    fn prefix_for<'a>(&'a self, opts: &'a SynthOptions) -> &'a str {
        opts.prefix.as_deref().unwrap_or(&self.default_prefix)
    }

    fn document_for(&self, schema: &Schema, prefix: &str, source: &mut dyn ValueSource) -> Value {
        let mut doc = empty_document();
        for (path, field) in schema.fields() {
            let segments = canonical_segments(path);
            // Already written by an ancestor (or duplicate) path.
            if document::read(&doc, &segments).is_some() {
                continue;
            }
            let value = match explicit_value(field) {
                Some(value) => value,
                None => self.type_value(field, path, prefix, source),
            };
            document::write(&mut doc, &segments, value);
        }
        doc
    }

    fn type_value(
        &self,
        field: &FieldDef,
        path: &str,
        prefix: &str,
        source: &mut dyn ValueSource,
    ) -> Value {
        match &field.field_type {
            Some(FieldType::Kind(kind)) => match kind {
                FieldKind::Date => json!(source.timestamp().to_rfc3339()),
                FieldKind::Number | FieldKind::Integer => match (field.min, field.max) {
                    (Some(min), _) => number_value(min),
                    (None, Some(max)) => number_value(max),
                    (None, None) => json!(source.integer()),
                },
                FieldKind::String => match &field.reg_ex {
                    Some(pattern) => json!(pattern_value(pattern, path, source)),
                    None => json!(format!("{}{}", prefix, pascal_case(path))),
                },
                FieldKind::Boolean => json!(source.boolean()),
                FieldKind::Object => Value::Object(Map::new()),
                FieldKind::Array => Value::Array(Vec::new()),
            },
            Some(FieldType::Nested(nested)) => self.document_for(nested, prefix, source),
            None => Value::Null,
        }
    }
}

/// Ordered explicit-value lookup: mock, then default, then computed, then
/// the first allowed literal. `None` falls through to type-driven
/// synthesis.
fn explicit_value(field: &FieldDef) -> Option<Value> {
    if let Some(value) = &field.mock_value {
        return Some(value.clone());
    }
    if let Some(value) = &field.default_value {
        return Some(value.clone());
    }
    if let Some(auto) = &field.auto_value {
        return Some(auto.call());
    }
    field.allowed_values.first().cloned()
}

fn pattern_value(pattern: &StringPattern, path: &str, source: &mut dyn ValueSource) -> String {
    match pattern {
        StringPattern::Email | StringPattern::EmailWithTld => source.email(),
        StringPattern::Domain | StringPattern::WeakDomain => source.domain(),
        StringPattern::Ip | StringPattern::Ipv4 => source.ipv4(),
        StringPattern::Ipv6 => source.ipv6(),
        StringPattern::Url => source.url(),
        StringPattern::Id => source.token(ID_LENGTH),
        StringPattern::ZipCode => source.zip_code(),
        StringPattern::Phone => {
            if path.to_ascii_lowercase().contains("mobile") {
                source.phone(MOBILE_PHONE_TEMPLATE)
            } else {
                source.phone(PHONE_TEMPLATE)
            }
        }
    }
}

/// PascalCase a dotted field path: segment-initial uppercase, placeholder
/// segments dropped. `"numberFields.min"` becomes `"NumberFieldsMin"`.
fn pascal_case(path: &str) -> String {
    path.split('.')
        .filter(|segment| segment.chars().any(|c| c.is_ascii_alphanumeric()))
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Emit whole numbers as JSON integers so `min: 16` synthesizes `16`, not
/// `16.0`.
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

fn empty_document() -> Value {
    Value::Object(Map::new())
}
