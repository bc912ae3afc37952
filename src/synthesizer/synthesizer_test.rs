use super::document::{canonical_segments, read, write, Segment};
use super::*;
use crate::domain::schema::AutoValue;
use serde_json::json;

struct FixedSource;

impl ValueSource for FixedSource {
    fn integer(&mut self) -> i64 {
        42
    }
    fn boolean(&mut self) -> bool {
        true
    }
    fn timestamp(&mut self) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_millis(86_400_000).unwrap()
    }
    fn email(&mut self) -> String {
        "john.doe@domain.com".to_string()
    }
    fn domain(&mut self) -> String {
        "domain.com".to_string()
    }
    fn ipv4(&mut self) -> String {
        "127.0.0.1".to_string()
    }
    fn ipv6(&mut self) -> String {
        "0000:aaaa:1111:bbbb:2222:cccc:3333:dddd".to_string()
    }
    fn url(&mut self) -> String {
        "https://www.domain.com".to_string()
    }
    fn token(&mut self, len: usize) -> String {
        "a".repeat(len)
    }
    fn zip_code(&mut self) -> String {
        "12345".to_string()
    }
    fn phone(&mut self, template: &str) -> String {
        template.replace('#', "9")
    }
}

#[test]
fn test_canonical_segments() {
    assert_eq!(
        canonical_segments("arrayField.$"),
        vec![Segment::Key("arrayField".to_string()), Segment::Index(0)]
    );
    assert_eq!(
        canonical_segments("a.b.c"),
        vec![
            Segment::Key("a".to_string()),
            Segment::Key("b".to_string()),
            Segment::Key("c".to_string())
        ]
    );
    assert_eq!(
        canonical_segments("items.2.name"),
        vec![
            Segment::Key("items".to_string()),
            Segment::Index(2),
            Segment::Key("name".to_string())
        ]
    );
}

#[test]
fn test_write_creates_intermediate_containers() {
    let mut doc = json!({});
    write(&mut doc, &canonical_segments("a.b.c"), json!(1));
    write(&mut doc, &canonical_segments("list.$.name"), json!("x"));

    assert_eq!(
        doc,
        json!({
            "a": { "b": { "c": 1 } },
            "list": [ { "name": "x" } ]
        })
    );
}

#[test]
fn test_write_pads_arrays_with_null() {
    let mut doc = json!({});
    write(&mut doc, &canonical_segments("items.2"), json!("third"));
    assert_eq!(doc, json!({ "items": [null, null, "third"] }));
}

#[test]
fn test_write_through_scalar_skips_path() {
    let mut doc = json!({ "a": "scalar" });
    write(&mut doc, &canonical_segments("a.b"), json!(1));
    // Unchanged, no panic.
    assert_eq!(doc, json!({ "a": "scalar" }));
}

#[test]
fn test_read_finds_nested_values() {
    let doc = json!({ "a": { "b": [ { "c": 5 } ] } });
    assert_eq!(read(&doc, &canonical_segments("a.b.0.c")), Some(&json!(5)));
    assert_eq!(read(&doc, &canonical_segments("a.b.$.c")), Some(&json!(5)));
    assert_eq!(read(&doc, &canonical_segments("a.missing")), None);
}

#[test]
fn test_pascal_case() {
    assert_eq!(pascal_case("stringField"), "StringField");
    assert_eq!(pascal_case("numberFields.min"), "NumberFieldsMin");
    assert_eq!(pascal_case("stringFields.Email"), "StringFieldsEmail");
    assert_eq!(pascal_case("arrayField.$"), "ArrayField");
}

#[test]
fn test_number_value_integral() {
    assert_eq!(number_value(16.0), json!(16));
    assert_eq!(number_value(-3.0), json!(-3));
    assert_eq!(number_value(2.5), json!(2.5));
}

#[test]
fn test_explicit_value_precedence() {
    let field = FieldDef {
        mock_value: Some(json!("mock")),
        default_value: Some(json!("default")),
        auto_value: Some(AutoValue::new(|| json!("auto"))),
        allowed_values: vec![json!("allowed")],
        ..FieldDef::of(FieldKind::String)
    };
    assert_eq!(explicit_value(&field), Some(json!("mock")));

    let field = FieldDef {
        default_value: Some(json!("default")),
        allowed_values: vec![json!("allowed")],
        ..FieldDef::of(FieldKind::String)
    };
    assert_eq!(explicit_value(&field), Some(json!("default")));

    let field = FieldDef {
        auto_value: Some(AutoValue::new(|| json!("auto"))),
        allowed_values: vec![json!("allowed")],
        ..FieldDef::of(FieldKind::String)
    };
    assert_eq!(explicit_value(&field), Some(json!("auto")));

    let field = FieldDef {
        allowed_values: vec![json!("first"), json!("second")],
        ..FieldDef::of(FieldKind::String)
    };
    assert_eq!(explicit_value(&field), Some(json!("first")));

    assert_eq!(explicit_value(&FieldDef::of(FieldKind::String)), None);
}

#[test]
fn test_unresolved_type_yields_null() {
    let schema = Schema::new().field("mystery", FieldDef::default());
    let synth = Synthesizer::new(true);
    let doc = synth.synthesize_from(Some(&schema), &SynthOptions::default(), &mut FixedSource);
    assert_eq!(doc, json!({ "mystery": null }));
}

#[test]
fn test_type_dispatch_with_fixed_source() {
    let schema = Schema::new()
        .field("when", FieldKind::Date)
        .field("count", FieldKind::Number)
        .field("whole", FieldKind::Integer)
        .field("flag", FieldKind::Boolean)
        .field("bag", FieldKind::Object)
        .field("list", FieldKind::Array);

    let synth = Synthesizer::new(true);
    let doc = synth.synthesize_from(Some(&schema), &SynthOptions::default(), &mut FixedSource);

    assert_eq!(doc["when"], "1970-01-02T00:00:00+00:00");
    assert_eq!(doc["count"], 42);
    assert_eq!(doc["whole"], 42);
    assert_eq!(doc["flag"], true);
    assert_eq!(doc["bag"], json!({}));
    assert_eq!(doc["list"], json!([]));
}

#[test]
fn test_min_beats_max_beats_generated() {
    let schema = Schema::new()
        .field(
            "both",
            FieldDef {
                min: Some(16.0),
                max: Some(99.0),
                ..FieldDef::of(FieldKind::Number)
            },
        )
        .field(
            "only_max",
            FieldDef {
                max: Some(8.0),
                ..FieldDef::of(FieldKind::Number)
            },
        );

    let synth = Synthesizer::new(true);
    let doc = synth.synthesize_from(Some(&schema), &SynthOptions::default(), &mut FixedSource);

    assert_eq!(doc["both"], 16);
    assert_eq!(doc["only_max"], 8);
}

#[test]
fn test_pattern_dispatch_with_fixed_source() {
    let schema = Schema::new()
        .field(
            "email",
            FieldDef {
                reg_ex: Some(StringPattern::Email),
                ..FieldDef::of(FieldKind::String)
            },
        )
        .field(
            "landline",
            FieldDef {
                reg_ex: Some(StringPattern::Phone),
                ..FieldDef::of(FieldKind::String)
            },
        )
        .field(
            "mobilePhone",
            FieldDef {
                reg_ex: Some(StringPattern::Phone),
                ..FieldDef::of(FieldKind::String)
            },
        );

    let synth = Synthesizer::new(true);
    let doc = synth.synthesize_from(Some(&schema), &SynthOptions::default(), &mut FixedSource);

    assert_eq!(doc["email"], "john.doe@domain.com");
    assert_eq!(doc["landline"], "01999 999999");
    assert_eq!(doc["mobilePhone"], "07999 999999");
}

#[test]
fn test_disabled_synthesizer_returns_empty_document() {
    let schema = Schema::new().field("title", FieldKind::String);
    let synth = Synthesizer::new(false);
    let doc = synth.synthesize_from(Some(&schema), &SynthOptions::default(), &mut FixedSource);
    assert_eq!(doc, json!({}));
}

#[test]
fn test_no_schema_is_empty_regardless_of_gate() {
    for enabled in [true, false] {
        let synth = Synthesizer::new(enabled);
        assert_eq!(
            synth.synthesize_from(None, &SynthOptions::default(), &mut FixedSource),
            json!({})
        );
    }
}

#[test]
fn test_include_id_attaches_token() {
    let schema = Schema::new().field("title", FieldKind::String);
    let synth = Synthesizer::new(true);
    let opts = SynthOptions {
        include_id: true,
        ..Default::default()
    };
    let doc = synth.synthesize_from(Some(&schema), &opts, &mut FixedSource);
    assert_eq!(doc["_id"], "a".repeat(17));
}
