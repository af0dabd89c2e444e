// src/raw/lenient.rs
//! Field deserializers that tolerate upstream type drift.
//!
//! LPDB and friends are loose with types: numbers arrive as strings, strings
//! as numbers, absent objects as `[]` or `"False"`. These helpers decode to
//! `Option`s instead of failing the record, and only error when a nested
//! structure is present but malformed.
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        // Absent struct fields upstream; kept literal so the blank check sees it.
        Value::Bool(b) => Some(if b { "True".into() } else { "False".into() }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_to_float(v: &Value) -> Option<f64> {
    let f = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    f.filter(|x| x.is_finite())
}

pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_string(Value::deserialize(d)?))
}

pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(value_to_float(&Value::deserialize(d)?))
}

pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(match &v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Object → `Some(T)`; anything else (`[]`, `"False"`, null) → `None`.
pub fn object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// Array → elements; anything else → empty.
pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Same as [`list`], but also accepts the list JSON-encoded in a string.
pub fn encoded_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = match Value::deserialize(d)? {
        Value::String(s) if s.trim().is_empty() => return Ok(Vec::new()),
        Value::String(s) => serde_json::from_str::<Value>(&s).map_err(D::Error::custom)?,
        other => other,
    };
    match v {
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Object → `(key, T)` pairs sorted by key. PHP encodes an empty map as `[]`.
pub fn keyed<'de, D, T>(d: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(d)? {
        Value::Object(map) => {
            let mut out = map
                .into_iter()
                .map(|(k, v)| serde_json::from_value(v).map(|t| (k, t)).map_err(D::Error::custom))
                .collect::<Result<Vec<_>, _>>()?;
            out.sort_by(|a, b| a.0.cmp(&b.0));
            Ok(out)
        }
        _ => Ok(Vec::new()),
    }
}

pub fn floats<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Option<f64>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().map(value_to_float).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string")]
        s: Option<String>,
        #[serde(default, deserialize_with = "float")]
        f: Option<f64>,
        #[serde(default, deserialize_with = "int")]
        i: Option<i64>,
        #[serde(default, deserialize_with = "floats")]
        fs: Vec<Option<f64>>,
        #[serde(default, deserialize_with = "keyed")]
        k: Vec<(String, i64)>,
        #[serde(default, deserialize_with = "encoded_list")]
        l: Vec<i64>,
    }

    fn probe(v: serde_json::Value) -> Probe {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn coerces_scalars() {
        let p = probe(json!({"s": 7, "f": "-1", "i": "3"}));
        assert_eq!(p.s.as_deref(), Some("7"));
        assert_eq!(p.f, Some(-1.0));
        assert_eq!(p.i, Some(3));

        let p = probe(json!({"s": false, "f": "", "i": 1.0}));
        assert_eq!(p.s.as_deref(), Some("False"));
        assert_eq!(p.f, None);
        assert_eq!(p.i, Some(1));
    }

    #[test]
    fn missing_fields_default() {
        let p = probe(json!({}));
        assert!(p.s.is_none() && p.f.is_none() && p.fs.is_empty() && p.k.is_empty() && p.l.is_empty());
    }

    #[test]
    fn nested_shapes() {
        let p = probe(json!({"fs": ["2", 1, null], "k": {"2_1": 5, "1_1": 4}, "l": "[1, 2]"}));
        assert_eq!(p.fs, vec![Some(2.0), Some(1.0), None]);
        assert_eq!(p.k, vec![("1_1".to_string(), 4), ("2_1".to_string(), 5)]);
        assert_eq!(p.l, vec![1, 2]);

        let p = probe(json!({"k": [], "l": [3]}));
        assert!(p.k.is_empty());
        assert_eq!(p.l, vec![3]);
    }

    #[test]
    fn malformed_encoded_list_is_an_error() {
        assert!(serde_json::from_value::<Probe>(json!({"l": "[1, "})).is_err());
    }
}
