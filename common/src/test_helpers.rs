//! Shared Test Helpers for Cross-Crate Use
//!
//! This module provides centralized test utilities that can be used across
//! both the `scoring` and `ecom` crates to avoid code duplication.

// =============================================================================
// UNIFIED TEST ERROR HANDLING
// =============================================================================

/// Unified error type for all test failures
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("Assertion failed: {message}")]
    AssertionFailure { message: String },

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: http::Error,
    },

    #[error("Generic test error: {message}")]
    Generic { message: String },
}

impl TestError {
    pub fn assertion_failure(message: impl Into<String>) -> Self {
        Self::AssertionFailure {
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }
}

/// Alias for the standard test result type
pub type TestResult<T = ()> = Result<T, TestError>;

/// Helper macro for test assertions that return TestError instead of panicking
#[macro_export]
macro_rules! test_assert {
    ($condition:expr) => {
        if !($condition) {
            return Err($crate::test_helpers::TestError::assertion_failure(
                format!("assertion failed: {}", stringify!($condition))
            ));
        }
    };
    ($condition:expr, $message:expr $(, $arg:expr)*) => {
        if !($condition) {
            return Err($crate::test_helpers::TestError::assertion_failure(
                format!($message $(, $arg)*)
            ));
        }
    };
}

/// Helper macro for test assertions with equality
#[macro_export]
macro_rules! test_assert_eq {
    ($left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    return Err($crate::test_helpers::TestError::assertion_failure(
                        format!("assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                                left_val, right_val)
                    ));
                }
            }
        }
    };
}

/// Listing references and review texts reused across test suites
pub mod fixtures {
    /// Sums to 656: genuine product, 28% fake reviews, 106 reviews.
    pub const GENUINE_LISTING_ID: &str = "B0BDHWDR12";
    /// Sums to 198: fake product with 2 reasons, 49% fake reviews with 4 patterns.
    pub const FAKE_LISTING_ID: &str = "ABC";
    /// Sums to 167: fake product with every reason, 33.5% fake reviews with every pattern.
    pub const FULLY_FLAGGED_LISTING_ID: &str = "MZ";

    pub fn product_url(listing_id: &str) -> String {
        format!("https://www.amazon.com/Some-Product-Name/dp/{listing_id}/ref=sr_1_1?keywords=test")
    }

    pub const GENUINE_REVIEW: &str =
        "Works as described. The battery lasts about two days and the strap is comfortable.";
    pub const SHOUTING_REVIEW: &str = "GREAT!!";
    pub const SUPERLATIVE_REVIEW: &str = "amazing";
    pub const EVERYTHING_REVIEW: &str = "AMAZING!!";
}

/// Utility functions for common test operations
pub mod test_utils {
    use super::*;

    /// Safe HTTP request builder that returns TestError
    pub fn build_request(
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> TestResult<http::Request<String>> {
        let mut builder = http::Request::builder().uri(uri).method(method);

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let request = builder
            .body(body.unwrap_or_default())
            .map_err(TestError::from)?;

        Ok(request)
    }

    /// Safe JSON serialization that returns TestError
    pub fn serialize_json<T: serde::Serialize>(value: &T) -> TestResult<String> {
        serde_json::to_string(value).map_err(TestError::from)
    }

    /// Safe response status check
    pub fn check_status_code(
        actual: http::StatusCode,
        expected: http::StatusCode,
    ) -> TestResult<()> {
        if actual != expected {
            return Err(TestError::assertion_failure(format!(
                "Status code mismatch: expected {}, got {}",
                expected, actual
            )));
        }
        Ok(())
    }

    /// Asserts `value` lies in the half-open range `[low, high)`
    pub fn check_in_range(value: f64, low: f64, high: f64) -> TestResult<()> {
        if !(value >= low && value < high) {
            return Err(TestError::assertion_failure(format!(
                "{} is outside [{}, {})",
                value, low, high
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::*;

    #[test]
    fn range_check_is_half_open() {
        assert!(check_in_range(0.7, 0.7, 0.9).is_ok());
        assert!(check_in_range(0.9, 0.7, 0.9).is_err());
    }

    #[test]
    fn status_mismatch_is_reported() {
        let err = check_status_code(http::StatusCode::OK, http::StatusCode::BAD_REQUEST)
            .unwrap_err();
        assert!(err.to_string().contains("expected 400"));
    }
}
