use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use crate::services::report_store::ReportKind;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Word must be a non-empty run of letters")]
    InvalidWord,

    #[error("The {kind} list is full ({max} words)")]
    CapacityExceeded { kind: ReportKind, max: usize },

    #[error("Report storage error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    CapacityExceeded(String),

    #[error("Failed to generate a puzzle")]
    GenerationFailed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::CapacityExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::GenerationFailed | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            invalid @ ReportError::InvalidWord => ApiError::Validation(invalid.to_string()),
            full @ ReportError::CapacityExceeded { .. } => {
                ApiError::CapacityExceeded(full.to_string())
            }
            ReportError::Io(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::CapacityExceeded("x".into()).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(ApiError::GenerationFailed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_report_error_mapping() {
        let full = ReportError::CapacityExceeded { kind: ReportKind::Add, max: 1000 };
        match ApiError::from(full) {
            ApiError::CapacityExceeded(msg) => assert_eq!(msg, "The add list is full (1000 words)"),
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert!(matches!(ApiError::from(ReportError::InvalidWord), ApiError::Validation(_)));
    }
}
