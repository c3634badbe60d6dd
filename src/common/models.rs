use serde::{Deserialize, Serialize};

/// Uniform response shape for every webview bridge call:
/// `{success: bool, data?: any, error?: string}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BridgeResponse {
    pub fn ok(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                success: true,
                data: Some(value),
                error: None,
            },
            Err(e) => Self::err(format!("Failed to encode response: {}", e)),
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl<T: Serialize, E: std::error::Error> From<Result<T, E>> for BridgeResponse {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(BridgeResponse::ok("Data saved")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "Data saved");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(BridgeResponse::err("Script not found: x")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Script not found: x");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: Result<Vec<String>, std::io::Error> = Ok(vec!["a".into()]);
        let envelope = BridgeResponse::from(ok);
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap()[0], "a");

        let err: Result<Vec<String>, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let envelope = BridgeResponse::from(err);
        assert!(!envelope.success);
        assert!(envelope.error.unwrap().contains("missing"));
    }
}
