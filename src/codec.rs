//! JSON/YAML codec for generated documents.
//!
//! Both encodings carry the same document model (`serde_json::Value`); the
//! conversions live here so numeric handling stays in one place. JSON is
//! decoded with `arbitrary_precision`, so every numeric literal keeps its
//! original digit string through merge and re-encode; a large identifier or
//! an exact decimal never passes through `f64`. YAML has no textual number
//! representation on the serde side: integers are emitted exactly through
//! `i64`/`u64` (wider ones as their literal digit string), everything else as
//! the shortest float form.

use serde_json::Value;

use crate::error::GenerateError;

/// Decode a JSON document, reporting the path of the offending node on
/// failure. `origin` names the document in error messages.
pub fn decode_json(origin: &str, bytes: &[u8]) -> Result<Value, GenerateError> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(de).map_err(|err| GenerateError::decode(origin, err))
}

/// Encode a document as JSON bytes.
///
/// # Errors
///
/// Documents obtained from [`decode_json`]/[`decode_yaml`] always encode; a
/// failure here means the document model invariants were broken upstream.
pub fn encode_json(doc: &Value) -> Result<Vec<u8>, GenerateError> {
    serde_json::to_vec(doc).map_err(GenerateError::encode)
}

/// Decode a YAML document into the document model.
///
/// Mapping keys must be scalars (non-string scalars are stringified, matching
/// what the JSON form can express). `.inf` and `.nan` have no JSON
/// representation and are rejected. YAML tags are stripped to their
/// underlying value.
pub fn decode_yaml(origin: &str, text: &str) -> Result<Value, GenerateError> {
    let node: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|err| GenerateError::decode(origin, err))?;
    yaml_to_doc(node).map_err(|detail| GenerateError::decode(origin, std::io::Error::other(detail)))
}

/// Encode a document as YAML text.
pub fn encode_yaml(doc: &Value) -> Result<String, GenerateError> {
    serde_yaml::to_string(&doc_to_yaml(doc)).map_err(GenerateError::encode)
}

// ----------------------------- Conversions ------------------------------- //

fn doc_to_yaml(doc: &Value) -> serde_yaml::Value {
    match doc {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(n) => number_to_yaml(n),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(items) => {
            serde_yaml::Value::Sequence(items.iter().map(doc_to_yaml).collect())
        }
        Value::Object(fields) => {
            let mut mapping = serde_yaml::Mapping::new();
            for (key, value) in fields {
                mapping.insert(serde_yaml::Value::String(key.clone()), doc_to_yaml(value));
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}

fn number_to_yaml(n: &serde_json::Number) -> serde_yaml::Value {
    if let Some(i) = n.as_i64() {
        return serde_yaml::Value::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return serde_yaml::Value::Number(u.into());
    }
    let digits = n.to_string();
    if digits.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        // integral but wider than any machine integer; keep the digits as text
        return serde_yaml::Value::String(digits);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => serde_yaml::Value::Number(f.into()),
        _ => serde_yaml::Value::String(digits),
    }
}

fn yaml_to_doc(node: serde_yaml::Value) -> Result<Value, String> {
    let doc = match node {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => Value::Number(yaml_number(&n)?),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_doc)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut fields = serde_json::Map::new();
            for (key, value) in mapping {
                fields.insert(scalar_key(key)?, yaml_to_doc(value)?);
            }
            Value::Object(fields)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_doc(tagged.value)?,
    };
    Ok(doc)
}

fn yaml_number(n: &serde_yaml::Number) -> Result<serde_json::Number, String> {
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

fn scalar_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("mapping key {other:?} is not a scalar")),
    }
}

// -------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_integer_and_exact_decimal_survive_json_round_trip() {
        let src = br#"{"id":12345678901234567890,"ratio":0.1,"count":42}"#;
        let doc = decode_json("test", src).unwrap();
        let out = String::from_utf8(encode_json(&doc).unwrap()).unwrap();
        assert!(out.contains("12345678901234567890"));
        assert!(out.contains("0.1"));
        assert!(!out.contains("12345678901234567168")); // the f64 rounding
    }

    #[test]
    fn yaml_round_trip_preserves_document() {
        let src = br#"{"info":{"title":"API","version":"1.0"},"tags":["a","b"],"port":8080,"ratio":0.1}"#;
        let doc = decode_json("test", src).unwrap();
        let yaml = encode_yaml(&doc).unwrap();
        let back = decode_yaml("test", &yaml).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn yaml_integers_emit_exact_digits() {
        let doc = decode_json("test", br#"{"id":12345678901234567890}"#).unwrap();
        let yaml = encode_yaml(&doc).unwrap();
        assert!(yaml.contains("12345678901234567890"));
    }

    #[test]
    fn integers_wider_than_u64_keep_their_digits_in_yaml() {
        let doc =
            decode_json("test", br#"{"id":170141183460469231731687303715884105728}"#).unwrap();
        let yaml = encode_yaml(&doc).unwrap();
        assert!(yaml.contains("170141183460469231731687303715884105728"));
    }

    #[test]
    fn yaml_non_string_keys_are_stringified() {
        let doc = decode_yaml("test", "200:\n  description: ok\n").unwrap();
        assert!(doc.get("200").is_some());
    }

    #[test]
    fn malformed_json_names_the_origin() {
        let err = decode_json("api description", b"{\"info\":").unwrap_err();
        assert!(err.to_string().contains("api description"));
    }

    #[test]
    fn non_finite_yaml_numbers_are_rejected() {
        let err = decode_yaml("test", "bad: .nan\n").unwrap_err();
        assert!(matches!(err, GenerateError::Decode { .. }));
    }

    #[test]
    fn yaml_decode_matches_json_decode() {
        let from_json = decode_json("a", br#"{"info":{"title":"API"},"n":3}"#).unwrap();
        let from_yaml = decode_yaml("b", "info:\n  title: API\nn: 3\n").unwrap();
        assert_eq!(from_json, from_yaml);
    }
}
