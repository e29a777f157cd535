use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use campgrounds::StoreError;

use crate::views::{View, render_with_status};

/// Message shown when a fault carries none
pub const DEFAULT_FAULT_MESSAGE: &str = "Something Went Wrong";

/// Message of the unmatched-route fault
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Page Not Found";

/// Classification of a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The request payload failed schema validation
    ValidationFailed,
    /// No route matches the method and path
    RouteNotFound,
    /// The id in the path is not a well-formed store id
    InvalidId,
    /// The id is well formed but nothing is stored under it
    ValidIdAbsent,
    /// Anything else
    Unclassified,
}

impl FaultKind {
    /// Stable upper-case name used in logs and the error view
    pub fn as_str(self) -> &'static str {
        match self {
            FaultKind::ValidationFailed => "VALIDATION_FAILED",
            FaultKind::RouteNotFound => "ROUTE_NOT_FOUND",
            FaultKind::InvalidId => "INVALID_ID",
            FaultKind::ValidIdAbsent => "VALID_ID_ABSENT",
            FaultKind::Unclassified => "UNCLASSIFIED",
        }
    }

    /// Status used when a fault of this kind is raised without one
    pub fn default_status(self) -> StatusCode {
        match self {
            FaultKind::ValidationFailed => StatusCode::BAD_REQUEST,
            FaultKind::RouteNotFound | FaultKind::InvalidId | FaultKind::ValidIdAbsent => {
                StatusCode::NOT_FOUND
            }
            FaultKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A request-scoped failure on its way to the fault normalizer
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind:?} ({http_status}): {message}")]
pub struct Fault {
    /// What went wrong
    pub kind: FaultKind,
    /// Status of the rendered error page
    pub http_status: StatusCode,
    /// Human readable message shown on the error page
    pub message: String,
}

impl Fault {
    /// Creates a fault with an explicit status and message
    pub fn new(kind: FaultKind, http_status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            http_status,
            message: message.into(),
        }
    }

    /// Creates a fault with the default status of its kind
    pub fn of_kind(kind: FaultKind, message: impl Into<String>) -> Self {
        Self::new(kind, kind.default_status(), message)
    }

    /// Validation failure; the field messages are joined with a comma
    pub fn validation_failed<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let message = messages
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::of_kind(FaultKind::ValidationFailed, message)
    }

    /// No route matched the request
    pub fn route_not_found() -> Self {
        Self::of_kind(FaultKind::RouteNotFound, ROUTE_NOT_FOUND_MESSAGE)
    }

    /// Unclassified failure with the default status and message
    pub fn unclassified() -> Self {
        Self::of_kind(FaultKind::Unclassified, DEFAULT_FAULT_MESSAGE)
    }

    /// Message to show, falling back to the default when empty
    pub fn display_message(&self) -> &str {
        if self.message.trim().is_empty() {
            DEFAULT_FAULT_MESSAGE
        } else {
            &self.message
        }
    }
}

impl From<StoreError> for Fault {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(raw) => {
                Fault::of_kind(FaultKind::InvalidId, format!("Invalid campground id: {}", raw))
            }
            StoreError::NotFound => Fault::of_kind(FaultKind::ValidIdAbsent, "Campground not found"),
            StoreError::Database(e) => {
                log::error!("❌ Store operation failed: {}", e);
                Fault::unclassified()
            }
        }
    }
}

/// The fault normalizer: every fault leaves the pipeline through here
impl ResponseError for Fault {
    fn status_code(&self) -> StatusCode {
        self.http_status
    }

    fn error_response(&self) -> HttpResponse {
        if self.http_status.is_server_error() {
            log::error!("{} {}: {}", self.http_status, self.kind.as_str(), self.display_message());
        } else {
            log::warn!("{} {}: {}", self.http_status, self.kind.as_str(), self.display_message());
        }

        render_with_status(self.http_status, &View::Error { fault: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[test]
    fn test_validation_failed_joins_messages() {
        let fault = Fault::validation_failed(["first problem", "second problem"]);

        assert_eq!(fault.kind, FaultKind::ValidationFailed);
        assert_eq!(fault.http_status, StatusCode::BAD_REQUEST);
        assert_eq!(fault.message, "first problem,second problem");
    }

    #[test]
    fn test_store_errors_map_to_not_found_kinds() {
        let invalid = Fault::from(StoreError::InvalidId("abc".to_string()));
        assert_eq!(invalid.kind, FaultKind::InvalidId);
        assert_eq!(invalid.http_status, StatusCode::NOT_FOUND);

        let absent = Fault::from(StoreError::NotFound);
        assert_eq!(absent.kind, FaultKind::ValidIdAbsent);
        assert_eq!(absent.http_status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_errors_are_unclassified() {
        let fault = Fault::from(StoreError::Database(sqlx::Error::PoolClosed));

        assert_eq!(fault.kind, FaultKind::Unclassified);
        assert_eq!(fault.http_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(fault.message, DEFAULT_FAULT_MESSAGE);
    }

    #[test]
    fn test_empty_message_falls_back_to_default() {
        let fault = Fault::new(FaultKind::Unclassified, StatusCode::BAD_GATEWAY, "  ");
        assert_eq!(fault.display_message(), DEFAULT_FAULT_MESSAGE);
    }

    #[test]
    fn test_error_response_renders_status_and_message() {
        let fault = Fault::route_not_found();
        let response = fault.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().try_into_bytes().ok().unwrap();
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(ROUTE_NOT_FOUND_MESSAGE));
        assert!(html.contains("404"));
    }
}
