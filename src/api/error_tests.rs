//! Unit tests for API error types

#[cfg(test)]
mod tests {
    use crate::api::error::ApiError;
    use std::error::Error;

    #[test]
    fn test_http_error_without_message() {
        let error = ApiError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(error.to_string(), "Request failed with status 503");
    }

    #[test]
    fn test_http_error_with_server_message() {
        let error = ApiError::Http {
            status: 404,
            message: Some("model not found".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Request failed with status 404: model not found"
        );
    }

    #[test]
    fn test_http_error_ignores_empty_message() {
        let error = ApiError::Http {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(error.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_status_accessor() {
        let error = ApiError::Http {
            status: 418,
            message: None,
        };
        assert_eq!(error.status(), Some(418));
        assert_eq!(ApiError::Decode("bad".into()).status(), None);
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: ApiError = serde_err.into();

        assert!(matches!(error, ApiError::Decode(_)));
        assert!(error.to_string().starts_with("Failed to decode response"));
    }

    #[test]
    fn test_invalid_url_display() {
        let error = ApiError::InvalidUrl("::nope".to_string());
        assert_eq!(error.to_string(), "Invalid URL: ::nope");
    }

    #[test]
    fn test_error_source_none_for_http() {
        let error = ApiError::Http {
            status: 400,
            message: None,
        };
        assert!(error.source().is_none());
    }
}
