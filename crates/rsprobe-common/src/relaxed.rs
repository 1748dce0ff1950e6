//! Relaxed JSON encoding of BSON reply documents.
//!
//! Server replies are treated as opaque semi-structured data: mappings,
//! sequences and JSON-native scalars map structurally, and every other leaf
//! type (ObjectId, DateTime, Timestamp, Binary, Decimal128, ...) is coerced
//! to its string form. The result can always be emitted as a plain JSON
//! line, no matter which driver-specific types the server put in the reply.

use bson::{Bson, Document};
use serde_json::{Map, Value};

/// Converts a reply document into a JSON value, coercing non-JSON-native
/// leaves to strings.
pub fn document_to_value(doc: &Document) -> Value {
    let map: Map<String, Value> = doc
        .iter()
        .map(|(key, value)| (key.clone(), bson_to_value(value)))
        .collect();
    Value::Object(map)
}

/// Converts a single BSON value, applying the string fallback to anything
/// without a native JSON representation.
pub fn bson_to_value(bson: &Bson) -> Value {
    match bson {
        Bson::Null => Value::Null,
        Bson::Boolean(v) => Value::Bool(*v),
        Bson::Int32(v) => Value::from(*v),
        Bson::Int64(v) => Value::from(*v),
        // NaN and the infinities have no JSON encoding, so they take the
        // string fallback like any other non-native leaf.
        Bson::Double(v) => serde_json::Number::from_f64(*v)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(v.to_string())),
        Bson::String(v) => Value::String(v.clone()),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_value).collect()),
        Bson::Document(doc) => document_to_value(doc),
        other => Value::String(other.to_string()),
    }
}
