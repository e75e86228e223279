//! # Store Error Types
//!
//! Errors raised while dispatching intents, loading config, or driving the
//! store from a JSON stream, and the serializable form the UI receives.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront Cart                    │
//! │                                                                         │
//! │  CoreError::ItemNotInCart ──► StoreError::Core ──► ApiError CART_ERROR │
//! │                                   (recoverable, state untouched)       │
//! │                                                                         │
//! │  bad payload ───────────────► StoreError::MalformedIntent              │
//! │                                   ──► ApiError VALIDATION_ERROR        │
//! │                                   (recoverable)                        │
//! │                                                                         │
//! │  unknown "type" tag ────────► StoreError::UnrecognizedMutation         │
//! │                                   (FATAL: programming defect,          │
//! │                                    the driver stops)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::CoreError;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything that can go wrong above the pure core.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart rule rejected the intent.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An intent carried a `type` tag that names no known mutation.
    ///
    /// The UI and the store disagree about the set of intents. That is a
    /// build/deploy defect, not something a user can fix by retrying.
    #[error("Unrecognized cart mutation: {0}")]
    UnrecognizedMutation(String),

    /// The tag was known but the payload did not match its shape.
    #[error("Malformed intent: {0}")]
    MalformedIntent(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the caller must stop instead of reporting and carrying on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::UnrecognizedMutation(_))
    }
}

// =============================================================================
// API Error
// =============================================================================

/// Error as the UI receives it.
///
/// ```json
/// { "code": "CART_ERROR", "message": "Product 7 is not in the cart" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Cart operation rejected
    CartError,

    /// Intent payload failed to parse
    ValidationError,

    /// Unknown intent tag
    UnrecognizedMutation,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::new(ErrorCode::CartError, err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => ApiError::from(e),
            StoreError::MalformedIntent(msg) => ApiError::new(ErrorCode::ValidationError, msg),
            StoreError::UnrecognizedMutation(tag) => ApiError::new(
                ErrorCode::UnrecognizedMutation,
                format!("Unrecognized cart mutation: {}", tag),
            ),
            other => {
                tracing::error!("Internal store error: {}", other);
                ApiError::new(ErrorCode::Internal, "Internal error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    #[test]
    fn test_only_unrecognized_mutation_is_fatal() {
        assert!(StoreError::UnrecognizedMutation("emptyCart".into()).is_fatal());
        assert!(!StoreError::MalformedIntent("missing price".into()).is_fatal());
        assert!(!StoreError::Core(CoreError::ItemNotInCart(ProductId::new(1))).is_fatal());
    }

    #[test]
    fn test_api_error_serialization() {
        let err = ApiError::from(StoreError::Core(CoreError::ItemNotInCart(ProductId::new(7))));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "CART_ERROR");
        assert_eq!(json["message"], "Product 7 is not in the cart");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(StoreError::Config("currency_symbol is empty".into()));
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(err.message, "Internal error");
    }
}
