//! Dotted-path access into the output document tree.

use serde_json::{Map, Value};

/// One canonicalized path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Split a dotted field path into canonical segments, mapping `$` array
/// placeholders to index 0.
pub fn canonical_segments(path: &str) -> Vec<Segment> {
    path.split('.')
        .map(|segment| {
            if segment == "$" {
                Segment::Index(0)
            } else if let Ok(index) = segment.parse::<usize>() {
                Segment::Index(index)
            } else {
                Segment::Key(segment.to_string())
            }
        })
        .collect()
}

/// Read the value at `segments`, if the document already holds one.
pub fn read<'a>(doc: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = doc;
    for segment in segments {
        current = match segment {
            Segment::Key(key) => current.as_object()?.get(key)?,
            Segment::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Write `value` at `segments`, creating intermediate objects and arrays as
/// needed. Writing through an existing scalar cannot succeed; the path is
/// skipped with a warning rather than surfacing an error.
pub fn write(doc: &mut Value, segments: &[Segment], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    match head {
        Segment::Key(key) => {
            let Some(map) = doc.as_object_mut() else {
                tracing::warn!(segment = %key, "cannot write through non-object value, skipping path");
                return;
            };
            if rest.is_empty() {
                map.insert(key.clone(), value);
            } else {
                let slot = map
                    .entry(key.clone())
                    .or_insert_with(|| container_for(&rest[0]));
                write(slot, rest, value);
            }
        }
        Segment::Index(index) => {
            let Some(array) = doc.as_array_mut() else {
                tracing::warn!(segment = *index, "cannot write through non-array value, skipping path");
                return;
            };
            while array.len() <= *index {
                array.push(Value::Null);
            }
            if rest.is_empty() {
                array[*index] = value;
            } else {
                let slot = &mut array[*index];
                if slot.is_null() {
                    *slot = container_for(&rest[0]);
                }
                write(slot, rest, value);
            }
        }
    }
}

fn container_for(next: &Segment) -> Value {
    match next {
        Segment::Key(_) => Value::Object(Map::new()),
        Segment::Index(_) => Value::Array(Vec::new()),
    }
}
