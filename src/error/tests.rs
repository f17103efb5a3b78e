//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ffl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real transport error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let ffl_error = FflError::from(reqwest_error);

        match ffl_error {
            FflError::Upstream(_) => (),
            _ => panic!("Expected Upstream error variant"),
        }
        assert_eq!(ffl_error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ffl_error = FflError::from(json_error);

        match ffl_error {
            FflError::Decode(_) => (),
            _ => panic!("Expected Decode error variant"),
        }
        assert_eq!(ffl_error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::AddrInUse, "port taken");
        let ffl_error = FflError::from(io_error);

        match ffl_error {
            FflError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
        assert_eq!(ffl_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_join_error_conversion() {
        let join_error = tokio::task::spawn_blocking(|| panic!("query pass panicked"))
            .await
            .unwrap_err();
        let ffl_error = FflError::from(join_error);

        match ffl_error {
            FflError::Task(_) => (),
            _ => panic!("Expected Task error variant"),
        }
        assert_eq!(ffl_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_api_key_error() {
        let error = FflError::MissingApiKey {
            env_var: "API_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API key not configured"));
        assert!(error_string.contains("API_KEY"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_query_error() {
        let error = FflError::InvalidQuery {
            message: "limit must be at least 1".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid query: limit must be at least 1");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_player_not_found_error() {
        let error = FflError::PlayerNotFound { id: 19801 };

        assert_eq!(error.to_string(), "Player not found: 19801");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_debug_format() {
        let error = FflError::MissingApiKey {
            env_var: "API_KEY".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("MissingApiKey"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<i32> {
            Err(FflError::PlayerNotFound { id: 1 })
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            FflError::PlayerNotFound { id } => assert_eq!(id, 1),
            _ => panic!("Expected PlayerNotFound error"),
        }
    }
}
