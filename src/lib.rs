//! # Mockdoc - Schema-Driven Mock Documents
//!
//! Mockdoc synthesizes deterministic placeholder documents that conform to
//! a declarative schema, for use as test fixtures. Given a mapping from
//! dotted field paths to field definitions (type, constraints, defaults)
//! it produces a concrete document whose fields satisfy the schema, so
//! tests don't have to hand-author fixture data.
//!
//! ## Features
//!
//! - **Prioritized resolution**: mock value, default, computed value,
//!   allowed literals, then type-driven synthesis
//! - **Nested schemas**: sub-schemas recurse into sub-documents, and child
//!   paths never overwrite what a parent already produced
//! - **Array paths**: `$` segments canonicalize to one representative
//!   element
//! - **Realistic strings**: named pattern constraints (Email, Domain, IP,
//!   Url, Phone, ...) dispatch to a locale-aware fake-value provider
//! - **Deterministic**: the provider is seeded from the document prefix,
//!   so equal prefixes produce equal documents
//! - **Gated**: synthesis is enabled in test mode; in production mode the
//!   same component strips mock annotations from schemas instead
//!
//! ## Quick Start
//!
//! ```rust
//! use mockdoc::{FieldKind, Schema, Synthesizer};
//!
//! let schema = Schema::new()
//!     .field("title", FieldKind::String)
//!     .field("tags", FieldKind::Array);
//!
//! let synth = Synthesizer::new(true);
//! let doc = synth.synthesize(Some(&schema));
//!
//! assert_eq!(doc["title"], "mockTitle");
//! assert_eq!(doc["tags"], serde_json::json!([]));
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: the schema model and the value-source port
//! - **Synthesizer**: path traversal, precedence policy, recursion
//! - **Adapters**: the `fake`-crate provider with a seeded RNG
//! - **Config**: test/production gating

pub mod adapters;
pub mod config;
pub mod domain;
pub mod synthesizer;

pub use adapters::faker::{seed_for, FakerSource};
pub use config::{Mode, Settings};
pub use domain::pattern::StringPattern;
pub use domain::schema::{AutoValue, FieldDef, FieldKind, FieldType, Schema, SchemaError};
pub use domain::source::ValueSource;
pub use synthesizer::{SynthOptions, Synthesizer, DEFAULT_PREFIX};
