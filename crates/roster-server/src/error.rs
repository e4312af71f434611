use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_employee::{ApiErrorBody, EmployeeError};
use thiserror::Error;

/// Error code reported when a request body is not valid JSON for its route.
pub const MALFORMED_BODY_CODE: u32 = 100_000;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Employee(#[from] EmployeeError),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Employee(e) => {
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ApiErrorBody {
        match self {
            Self::Employee(e) => e.to_body(),
            Self::MalformedBody(msg) => ApiErrorBody {
                code: MALFORMED_BODY_CODE,
                error_msg: msg.clone(),
            },
            other => ApiErrorBody {
                code: u32::from(other.status().as_u16()),
                error_msg: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_errors_keep_status_and_code() {
        let err = ServerError::from(EmployeeError::AlreadyExists);
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.body().code, EmployeeError::AlreadyExists.code());
        assert_eq!(err.to_string(), "Employee already exists");
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let err = ServerError::MalformedBody("expected value".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().code, MALFORMED_BODY_CODE);
    }

    #[test]
    fn internal_errors_are_500() {
        let err = ServerError::Internal("boom".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().code, 500);
    }
}
