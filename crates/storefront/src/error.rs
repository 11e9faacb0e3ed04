//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for route handlers that can fail.
//! Catalog load failures never reach this type: the page handles them itself
//! by showing a toast.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cart::CartError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The cart refused an operation.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// HTTP status for this error. Every variant is a client error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Cart(CartError::LimitReached(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Info level: the Sentry layer keeps it as a breadcrumb, not an event.
        tracing::info!(error = %self, status = %status, "Request rejected");

        let message = match &self {
            Self::Cart(err) => err.to_string(),
            Self::NotFound(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product to cart", Some(&[("product_id", "7")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("/shoes".to_string());
        assert_eq!(err.to_string(), "Not found: /shoes");

        let err = AppError::from(CartError::LimitReached(100));
        assert_eq!(err.to_string(), "Cart error: Cart is full (100 items)");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Cart(CartError::LimitReached(1))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_app_errors_are_client_errors() {
        let errors = [
            AppError::NotFound("/missing".to_string()),
            AppError::Cart(CartError::LimitReached(100)),
        ];

        for err in errors {
            assert!(err.status().is_client_error(), "{err}");
            assert!(!err.status().is_server_error(), "{err}");
        }
    }

    #[test]
    fn test_breadcrumb_without_client_is_a_no_op() {
        add_breadcrumb("cart", "Added product to cart", Some(&[("product_id", "7")]));
        add_breadcrumb("navigation", "Viewed catalog", None);
    }
}
