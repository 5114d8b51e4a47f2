use serde_json::Value;

use crate::domain::error::ApiError;

/// Checks a create payload against the post schema: an object carrying
/// string-typed `title` and `body`, both mandatory. Returns the two fields
/// on success; beyond these checks the payload is trusted as-is.
pub fn validate_post_payload(payload: &Value) -> Result<(String, String), ApiError> {
    let map = payload
        .as_object()
        .ok_or_else(|| ApiError::Validation(format!("{} is not of type 'object'", payload)))?;

    let title = require_string(map, "title")?;
    let body = require_string(map, "body")?;
    Ok((title, body))
}

fn require_string(
    map: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<String, ApiError> {
    match map.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(ApiError::Validation(format!(
            "{} is not of type 'string'",
            other
        ))),
        None => Err(ApiError::Validation(format!(
            "'{}' is a required property",
            key
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Validation(message) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_a_complete_payload() {
        let payload = json!({"title": "Example Post A", "body": "Just a test"});
        let (title, body) = validate_post_payload(&payload).unwrap();
        assert_eq!(title, "Example Post A");
        assert_eq!(body, "Just a test");
    }

    #[test]
    fn extra_keys_are_tolerated() {
        let payload = json!({"title": "t", "body": "b", "author": "nobody"});
        assert!(validate_post_payload(&payload).is_ok());
    }

    #[test]
    fn rejects_a_non_object_payload() {
        let err = validate_post_payload(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(message(err), r#"["not","an","object"] is not of type 'object'"#);
    }

    #[test]
    fn rejects_a_missing_title() {
        let err = validate_post_payload(&json!({"body": "b"})).unwrap_err();
        assert_eq!(message(err), "'title' is a required property");
    }

    #[test]
    fn rejects_a_missing_body() {
        let err = validate_post_payload(&json!({"title": "t"})).unwrap_err();
        assert_eq!(message(err), "'body' is a required property");
    }

    #[test]
    fn rejects_a_non_string_field() {
        let err = validate_post_payload(&json!({"title": 32, "body": "b"})).unwrap_err();
        assert_eq!(message(err), "32 is not of type 'string'");
    }
}
