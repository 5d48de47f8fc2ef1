//! Query-string parameters for RMU requests.
//!
//! All request data travels in the URL. Nested values are flattened with
//! bracket notation (`data[name]=...`, `data[tags][0]=...`), booleans become
//! `1`/`0` and `null` values are left out.

use serde::Serialize;
use serde_json::Value;

use crate::models::Mode;
use crate::{Error, Result};

/// Ordered list of query parameters for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    mode: Mode,
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Start a parameter list for the given remote operation.
    pub fn new(mode: Mode) -> Self {
        let mut params = Self {
            mode,
            pairs: Vec::new(),
        };
        params.push("mode", mode.as_str());
        params
    }

    /// Start a parameter list from a serializable struct.
    ///
    /// The struct must serialize to an object; each field becomes a
    /// parameter.
    pub fn from_serialize<T: Serialize>(mode: Mode, fields: &T) -> Result<Self> {
        let mut params = Self::new(mode);
        match serde_json::to_value(fields)? {
            Value::Object(map) => {
                for (key, value) in &map {
                    params.push_value(key, value);
                }
                Ok(params)
            }
            other => Err(Error::InvalidInput(format!(
                "query fields must serialize to an object, got {}",
                other
            ))),
        }
    }

    /// Append a single string parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Append a JSON value, flattening objects and arrays.
    pub fn push_value(&mut self, key: &str, value: &Value) -> &mut Self {
        match value {
            Value::Null => {}
            Value::Bool(b) => {
                self.push(key, if *b { "1" } else { "0" });
            }
            Value::Number(n) => {
                self.push(key, n.to_string());
            }
            Value::String(s) => {
                self.push(key, s.as_str());
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.push_value(&format!("{}[{}]", key, i), item);
                }
            }
            Value::Object(map) => {
                for (name, item) in map {
                    self.push_value(&format!("{}[{}]", key, name), item);
                }
            }
        }
        self
    }

    /// Look up the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The remote operation these parameters select.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The parameters as key/value pairs, in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no parameters. Never the case once
    /// `mode` is set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_comes_first() {
        let params = QueryParams::new(Mode::Statistics);
        assert_eq!(params.pairs()[0], ("mode".to_string(), "statistics".to_string()));
        assert_eq!(params.mode(), Mode::Statistics);
    }

    #[test]
    fn test_nested_values_use_brackets() {
        let mut params = QueryParams::new(Mode::SetApiInfo);
        params.push_value(
            "data",
            &json!({
                "site": "shop.example",
                "notify": true,
                "price": 4.5,
                "tags": ["a", "b"],
                "skip": null,
                "meta": {"level": 2}
            }),
        );

        assert_eq!(params.get("data[site]"), Some("shop.example"));
        assert_eq!(params.get("data[notify]"), Some("1"));
        assert_eq!(params.get("data[price]"), Some("4.5"));
        assert_eq!(params.get("data[tags][0]"), Some("a"));
        assert_eq!(params.get("data[tags][1]"), Some("b"));
        assert_eq!(params.get("data[meta][level]"), Some("2"));
        assert!(!params.contains("data[skip]"));
    }

    #[test]
    fn test_from_serialize_skips_absent_fields() {
        #[derive(Serialize)]
        struct Fields {
            #[serde(skip_serializing_if = "Option::is_none")]
            udid: Option<String>,
            start: u32,
        }

        let params = QueryParams::from_serialize(
            Mode::Status,
            &Fields {
                udid: None,
                start: 0,
            },
        )
        .unwrap();
        assert!(!params.contains("udid"));
        assert_eq!(params.get("start"), Some("0"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_serialize_rejects_scalars() {
        let err = QueryParams::from_serialize(Mode::Status, &5).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
