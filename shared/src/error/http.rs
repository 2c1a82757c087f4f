//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            Self::EmployeeDeleteBlocked => StatusCode::CONFLICT,

            Self::Unknown
            | Self::DatabaseError
            | Self::EmployeeFetchFailed
            | Self::EmployeeCreateFailed
            | Self::EmployeeUpdateFailed
            | Self::EmployeeDeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation)
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ErrorCode::EmployeeNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::EmployeeDeleteBlocked.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::EmployeeCreateFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
