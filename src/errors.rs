use http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_per_kind() {
        assert_eq!(AppError::InvalidArgument("days".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MalformedRecord("id".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound("portfolio 9".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_message_includes_detail() {
        let err = AppError::InvalidArgument("days must be >= 0, got -1".into());
        assert_eq!(err.to_string(), "Invalid argument: days must be >= 0, got -1");
    }
}
