//! Unified error system for the employee service
//!
//! - [`ErrorCode`]: Standardized error codes for all error kinds
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", "employee:abc");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(8001));
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
