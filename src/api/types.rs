// Wire-level types for the employee API
// Media types and the HAL JSON response wrapper

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

pub use crate::models::EmployeePayload;

/// Media type of every successful body this API returns
pub const HAL_JSON: &str = "application/hal+json";

/// `Content-Type` value sent with HAL bodies
pub const HAL_JSON_UTF8: &str = "application/hal+json;charset=UTF-8";

/// Like `axum::Json`, but labelled `application/hal+json`
///
/// ## Rust Learning Notes:
///
/// ### Tuple Structs as Wrappers
/// `HalJson(value)` adds behavior (a response conversion) to any
/// serializable type without touching the type itself.
#[derive(Debug, Clone)]
pub struct HalJson<T>(pub T);

impl<T> IntoResponse for HalJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON_UTF8))],
                body,
            )
                .into_response(),
            Err(err) => {
                error!("❌ Failed to serialize HAL response: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Links, REL_SELF};

    #[test]
    fn test_hal_json_sets_content_type() {
        let response = HalJson(Links::new().with(REL_SELF, "http://localhost/employees"))
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            HAL_JSON_UTF8
        );
        assert!(HAL_JSON_UTF8.starts_with(HAL_JSON));
    }
}
