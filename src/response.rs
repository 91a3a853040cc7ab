use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// Decode a response body read as text. Empty bodies decode to `{}` so that
/// endpoints returning `204`-style empty payloads do not trip the parser;
/// non-empty bodies that are not JSON surface the raw text in the error.
pub fn safe_parse_json(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(text).map_err(|_| ApiError::InvalidJson {
        body: text.to_string(),
    })
}

/// Pull a human-readable message out of a server error body. The backend is
/// inconsistent about the field it uses, so try them in order:
/// `message`, `error`, `detail`, `non_field_errors[0]`.
pub fn error_message(body: &Value, fallback: &str) -> String {
    let fields = ["message", "error", "detail"];
    for field in fields {
        if let Some(msg) = body.get(field).and_then(Value::as_str) {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    if let Some(msg) = body
        .get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|errs| errs.first())
        .and_then(Value::as_str)
    {
        return msg.to_string();
    }
    fallback.to_string()
}

/// DRF-style paginated envelope. Several list endpoints return a bare array
/// instead, so [`Paginated::from_value`] accepts both.
#[derive(Debug, serde::Deserialize)]
pub struct Paginated<T> {
    pub results: Vec<T>,
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl<T: DeserializeOwned> Paginated<T> {
    pub fn from_value(value: Value) -> ApiResult<Self> {
        if value.is_array() {
            let results: Vec<T> = serde_json::from_value(value)?;
            let count = results.len() as i64;
            return Ok(Self {
                results,
                count,
                next: None,
                previous: None,
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_parses_to_empty_object() {
        let value = safe_parse_json("").unwrap();
        assert_eq!(value, json!({}));
        let value = safe_parse_json("  \n").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn non_json_body_errors_with_raw_text() {
        let err = safe_parse_json("<html>gateway timeout</html>").unwrap_err();
        match err {
            ApiError::InvalidJson { body } => assert!(body.contains("gateway timeout")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_message_prefers_server_fields() {
        assert_eq!(
            error_message(&json!({"message": "Insufficient balance"}), "fallback"),
            "Insufficient balance"
        );
        assert_eq!(
            error_message(&json!({"error": "Invalid coupon code"}), "fallback"),
            "Invalid coupon code"
        );
        assert_eq!(
            error_message(&json!({"detail": "Not found."}), "fallback"),
            "Not found."
        );
        assert_eq!(
            error_message(&json!({"non_field_errors": ["Amount too low"]}), "fallback"),
            "Amount too low"
        );
        assert_eq!(error_message(&json!({"other": 1}), "fallback"), "fallback");
    }

    #[test]
    fn paginated_accepts_bare_arrays() {
        let page: Paginated<i64> = Paginated::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.count, 3);
        assert!(page.next.is_none());

        let page: Paginated<i64> =
            Paginated::from_value(json!({"results": [7], "count": 40, "next": "p2", "previous": null}))
                .unwrap();
        assert_eq!(page.results, vec![7]);
        assert_eq!(page.count, 40);
        assert_eq!(page.next.as_deref(), Some("p2"));
    }
}
