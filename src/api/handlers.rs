// Employee REST API handlers
// This module implements the HTTP handlers behind /employees

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

use super::types::{EmployeePayload, HalJson};
use crate::engine::{CollectionBase, EmployeeResourceAssembler, EmployeeStorage};
use crate::models::{EmployeeCollection, EmployeeResource};
use crate::EmployeeApiError;

/// Shared application state for the employee API
#[derive(Clone)]
pub struct EmployeeApiState {
    pub storage: Arc<dyn EmployeeStorage>,
    /// Public root used for links; `None` means "use the request's Host header"
    pub external_url: Option<Arc<str>>,
}

impl EmployeeApiState {
    pub fn new(storage: Arc<dyn EmployeeStorage>) -> Self {
        Self {
            storage,
            external_url: None,
        }
    }

    pub fn with_external_url(mut self, external_url: Option<String>) -> Self {
        self.external_url = external_url.map(Arc::from);
        self
    }

    /// Assembler for the current request
    fn assembler(&self, headers: &HeaderMap) -> EmployeeResourceAssembler {
        let host = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok());

        EmployeeResourceAssembler::new(CollectionBase::resolve(self.external_url.as_deref(), host))
    }
}

/// Validate a computed link and turn it into a `Location` header value
fn location_header(
    href: Option<&str>,
    failure: impl FnOnce() -> String,
) -> Result<HeaderValue, EmployeeApiError> {
    let location = href
        .filter(|href| Url::parse(href).is_ok())
        .and_then(|href| HeaderValue::from_str(href).ok());

    location.ok_or_else(|| {
        let message = failure();
        warn!("⚠️  Malformed link {:?}: {}", href, message);
        EmployeeApiError::MalformedLink { message }
    })
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "employee-hal",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp()
    }))
}

/// List all employees - GET /employees
pub async fn list_employees(
    State(state): State<EmployeeApiState>,
    headers: HeaderMap,
) -> Result<HalJson<EmployeeCollection>, EmployeeApiError> {
    let employees = state.storage.find_all().await?;
    debug!("Listing {} employees", employees.len());

    let collection = state.assembler(&headers).to_collection_resource(employees)?;
    Ok(HalJson(collection))
}

/// Create an employee - POST /employees
pub async fn new_employee(
    State(state): State<EmployeeApiState>,
    headers: HeaderMap,
    Json(payload): Json<EmployeePayload>,
) -> Result<Response, EmployeeApiError> {
    let saved = state.storage.save(payload.into_employee(None)).await?;
    info!("✅ Created {}", saved);

    let resource = state.assembler(&headers).to_resource(&saved)?;
    let location = location_header(resource.self_href(), || {
        format!("Unable to create {}", saved)
    })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        HalJson(resource),
    )
        .into_response())
}

/// Fetch one employee - GET /employees/:id
pub async fn find_one(
    State(state): State<EmployeeApiState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<HalJson<EmployeeResource>, EmployeeApiError> {
    debug!("Looking up employee {}", id);

    let employee = state
        .storage
        .find_by_id(id)
        .await?
        .ok_or(EmployeeApiError::NotFound { id })?;

    Ok(HalJson(state.assembler(&headers).to_resource(&employee)?))
}

/// Replace (or create) an employee at a known id - PUT /employees/:id
///
/// This is a full replace keyed by the path id. Creating a new record this
/// way still answers 204, same as an update.
pub async fn update_employee(
    State(state): State<EmployeeApiState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Response, EmployeeApiError> {
    let saved = state.storage.save(payload.into_employee(Some(id))).await?;
    info!("✏️  Updated {}", saved);

    let href = state.assembler(&headers).item_link(id);
    let location = location_header(Some(&href), || format!("Unable to update {}", saved))?;

    Ok((StatusCode::NO_CONTENT, [(header::LOCATION, location)]).into_response())
}

/// Error handler for invalid routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}

/// Error response implementation
///
/// Missing employees answer with an empty 404, broken links with a plain-text
/// 400, and everything else with a 500.
impl IntoResponse for EmployeeApiError {
    fn into_response(self) -> Response {
        match self {
            EmployeeApiError::NotFound { id } => {
                debug!("Employee {} not found", id);
                StatusCode::NOT_FOUND.into_response()
            }
            EmployeeApiError::MalformedLink { message } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            other => {
                error!("❌ Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_location_header_accepts_absolute_links() {
        let value = location_header(Some("http://localhost/employees/1"), || unreachable!())
            .unwrap();
        assert_eq!(value, "http://localhost/employees/1");
    }

    #[test]
    fn test_location_header_rejects_broken_links() {
        let err = location_header(Some("http://bad host/employees/1"), || {
            "Unable to create thing".to_string()
        })
        .unwrap_err();

        match err {
            EmployeeApiError::MalformedLink { message } => {
                assert_eq!(message, "Unable to create thing")
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(location_header(None, || "missing".to_string()).is_err());
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            EmployeeApiError::NotFound { id: 3 }.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EmployeeApiError::MalformedLink {
                message: "nope".to_string()
            }
            .into_response()
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EmployeeApiError::Storage(anyhow::anyhow!("disk on fire"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
