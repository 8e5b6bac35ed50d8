//! Untyped vendor response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded JSON body returned by the vendor.
///
/// Nothing about its shape is validated. Readers pick the fields they need
/// and tolerate their absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Value);

impl ApiResponse {
    #[must_use]
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Vendor-reported status code, when the body carries an integer `code`.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.0.get("code").and_then(Value::as_i64)
    }

    /// Elements of the `data` array, or nothing if `data` is absent or not
    /// an array.
    #[must_use]
    pub fn data(&self) -> &[Value] {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_read_integer_code() {
        let response = ApiResponse::new(json!({ "code": 400, "message": "invalid device" }));
        assert_eq!(response.code(), Some(400));
    }

    #[test]
    fn should_ignore_missing_code() {
        let response = ApiResponse::new(json!({ "data": [] }));
        assert_eq!(response.code(), None);
    }

    #[test]
    fn should_ignore_non_integer_code() {
        let response = ApiResponse::new(json!({ "code": "200" }));
        assert_eq!(response.code(), None);
    }

    #[test]
    fn should_return_empty_data_when_not_an_array() {
        assert!(ApiResponse::new(json!({})).data().is_empty());
        assert!(ApiResponse::new(json!({ "data": { "sku": "S1" } })).data().is_empty());
        assert!(ApiResponse::new(json!([1, 2])).data().is_empty());
    }

    #[test]
    fn should_serialize_body_unchanged() {
        let body = json!({ "code": 200, "data": { "online": true }, "msg": "success" });
        let response = ApiResponse::new(body.clone());
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }
}
