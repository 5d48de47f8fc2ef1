//! Response envelope shared by every RMU endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level JSON object returned by every remote call.
///
/// `error` is falsy on success and carries a message on failure. `data`
/// holds the operation payload; the auth probe sets `auth` instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    /// Error indicator or message
    #[serde(default)]
    pub error: Value,
    /// Operation payload
    #[serde(default)]
    pub data: Option<Value>,
    /// Result of the auth probe
    #[serde(default)]
    pub auth: Value,
    /// The decoded object as received
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl Envelope {
    /// Build an envelope from a decoded JSON object.
    pub fn from_map(raw: Map<String, Value>) -> Self {
        let field = |name: &str| raw.get(name).cloned().unwrap_or(Value::Null);
        Self {
            error: field("error"),
            data: raw.get("data").cloned(),
            auth: field("auth"),
            raw,
        }
    }

    /// The remote error message, if the envelope reports a failure.
    pub fn error_message(&self) -> Option<String> {
        if !is_truthy(&self.error) {
            return None;
        }
        Some(match &self.error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Whether the remote reported a failure.
    pub fn is_error(&self) -> bool {
        is_truthy(&self.error)
    }

    /// Whether the auth probe succeeded.
    pub fn is_authenticated(&self) -> bool {
        is_truthy(&self.auth)
    }

    /// Take the payload, or `null` when the envelope has none.
    pub fn into_data(self) -> Value {
        self.data.unwrap_or(Value::Null)
    }

    /// Take the payload, falling back to the whole envelope object when the
    /// remote sent no `data` field.
    pub fn into_data_or_envelope(self) -> Value {
        match self.data {
            Some(data) => data,
            None => Value::Object(self.raw),
        }
    }
}

/// Loose truthiness used by the remote API.
///
/// `null`, `false`, `0`, `""`, `"0"` and empty arrays or objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        match value {
            Value::Object(map) => Envelope::from_map(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_truthiness() {
        let falsy_values = [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ];
        for falsy in falsy_values {
            assert!(!is_truthy(&falsy), "{falsy}");
        }
        let truthy_values = [
            json!(true),
            json!(1),
            json!(-1),
            json!("no"),
            json!("false"),
            json!([0]),
            json!({"a": 1}),
        ];
        for truthy in truthy_values {
            assert!(is_truthy(&truthy), "{truthy}");
        }
    }

    #[test]
    fn test_success_envelope() {
        let env = envelope(json!({"error": false, "data": {"credits": 3}}));
        assert!(!env.is_error());
        assert_eq!(env.error_message(), None);
        assert_eq!(env.into_data(), json!({"credits": 3}));
    }

    #[test]
    fn test_error_envelope() {
        let env = envelope(json!({"error": "Not enough credits"}));
        assert!(env.is_error());
        assert_eq!(env.error_message().as_deref(), Some("Not enough credits"));

        let env = envelope(json!({"error": 42}));
        assert_eq!(env.error_message().as_deref(), Some("42"));
    }

    #[test]
    fn test_auth_probe() {
        assert!(envelope(json!({"auth": true})).is_authenticated());
        assert!(!envelope(json!({"auth": false})).is_authenticated());
        assert!(!envelope(json!({"error": "bad password"})).is_authenticated());
    }

    #[test]
    fn test_missing_data_falls_back_to_envelope() {
        let env = envelope(json!({"error": false, "success": true}));
        assert_eq!(
            env.clone().into_data_or_envelope(),
            json!({"error": false, "success": true})
        );
        assert_eq!(env.into_data(), Value::Null);
    }

    #[test]
    fn test_deserialize_defaults() {
        let env: Envelope = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert_eq!(env.error, Value::Null);
        assert_eq!(env.data, Some(json!([1, 2])));
    }
}
