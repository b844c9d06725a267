//! Tests for error construction and display

#[cfg(test)]
mod tests {
    use rookstack::io::error::{SearchError, invalid_parameter, reporter_error};
    use std::error::Error;

    // Tests the invalid parameter message names the parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("order", &40, &"must be between 1 and 31");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'order' = '40': must be between 1 and 31"
        );
        assert!(error.source().is_none());
    }

    // Tests reporter failures carry their reason
    // Verified by discarding the reason
    #[test]
    fn test_reporter_error() {
        let error = reporter_error(&"thread died");
        assert!(matches!(error, SearchError::Reporter { ref reason } if reason == "thread died"));
        assert_eq!(error.to_string(), "Progress reporter failure: thread died");
    }

    // Tests serialization errors convert and keep their source
    // Verified by returning None from source for serialization errors
    #[test]
    fn test_serialization_source() {
        let json_error = serde_json::from_str::<u32>("not json").expect_err("invalid json");
        let error = SearchError::from(json_error);

        assert!(error.to_string().starts_with("Failed to encode search report"));
        assert!(error.source().is_some());
    }
}
