//! Unified error codes for the employee service
//!
//! This module defines all error codes used across employee-server and its clients.
//! Error codes are organized by range:
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so callers can branch on the
/// kind of failure without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Active employees cannot be deleted
    EmployeeDeleteBlocked = 8006,
    /// Reading employees from the store failed
    EmployeeFetchFailed = 8010,
    /// Inserting an employee failed
    EmployeeCreateFailed = 8011,
    /// Updating an employee failed
    EmployeeUpdateFailed = 8012,
    /// Deleting an employee failed
    EmployeeDeleteFailed = 8013,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeDeleteBlocked => "CAN'T DELETE EMPLOYEE - STATUS ACTIVE",
            ErrorCode::EmployeeFetchFailed => "Failed to fetch employees",
            ErrorCode::EmployeeCreateFailed => "Failed to create employee",
            ErrorCode::EmployeeUpdateFailed => "Failed to update employee",
            ErrorCode::EmployeeDeleteFailed => "Failed to delete employee",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

/// Error returned when a u16 does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8006 => Ok(ErrorCode::EmployeeDeleteBlocked),
            8010 => Ok(ErrorCode::EmployeeFetchFailed),
            8011 => Ok(ErrorCode::EmployeeCreateFailed),
            8012 => Ok(ErrorCode::EmployeeUpdateFailed),
            8013 => Ok(ErrorCode::EmployeeDeleteFailed),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);

        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::EmployeeDeleteBlocked.code(), 8006);
        assert_eq!(ErrorCode::EmployeeFetchFailed.code(), 8010);
        assert_eq!(ErrorCode::EmployeeCreateFailed.code(), 8011);
        assert_eq!(ErrorCode::EmployeeUpdateFailed.code(), 8012);
        assert_eq!(ErrorCode::EmployeeDeleteFailed.code(), 8013);

        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(8006), Ok(ErrorCode::EmployeeDeleteBlocked));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3), Err(InvalidErrorCode(3)));
        assert_eq!(ErrorCode::try_from(9001), Err(InvalidErrorCode(9001)));
        assert_eq!(ErrorCode::try_from(8999), Err(InvalidErrorCode(8999)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmployeeDeleteBlocked).unwrap();
        assert_eq!(json, "8006");

        let code: ErrorCode = serde_json::from_str("8001").unwrap();
        assert_eq!(code, ErrorCode::EmployeeNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
        assert_eq!(
            ErrorCode::EmployeeDeleteBlocked.message(),
            "CAN'T DELETE EMPLOYEE - STATUS ACTIVE"
        );
        assert_eq!(ErrorCode::DatabaseError.message(), "Database error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        assert_eq!(format!("{}", InvalidErrorCode(999)), "invalid error code: 999");
    }
}
