//! View models for the employee screens
//!
//! These hold screen state and talk to [`EmployeeApi`](crate::EmployeeApi);
//! rendering is left to the embedding UI.

pub mod create_form;
pub mod details;
pub mod directory;
pub mod retirements;
pub mod update_form;

pub use create_form::CreateEmployeeForm;
pub use details::EmployeeDetails;
pub use directory::{DirectoryFilter, EmployeeDirectory, PendingDelete};
pub use retirements::UpcomingRetirementsView;
pub use update_form::UpdateEmployeeForm;

use std::fmt;

use chrono::NaiveDate;
use shared::error::ErrorCode;

use crate::ClientError;

/// Banner shown when the server refuses to delete an active employee
pub const DELETE_BLOCKED_BANNER: &str = "Active employees cannot be deleted";

/// Error banner for a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    /// Server error code, if the failure came from the API
    pub code: Option<ErrorCode>,
    /// Text to show to the user
    pub banner: String,
}

impl ViewError {
    /// Map a client failure to a banner; only DeleteBlocked gets its own text
    pub fn from_client(err: &ClientError, fallback: &str) -> Self {
        let banner = if err.is_delete_blocked() {
            DELETE_BLOCKED_BANNER
        } else {
            fallback
        };
        tracing::warn!(error = %err, "{}", banner);
        Self {
            code: err.error_code(),
            banner: banner.to_string(),
        }
    }

    /// Banner carrying the server's own message ("Error: ...")
    pub fn with_server_message(err: &ClientError) -> Self {
        let message = match err {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        };
        tracing::warn!(error = %err, "request failed");
        Self {
            code: err.error_code(),
            banner: format!("Error: {}", message),
        }
    }

    pub fn is_delete_blocked(&self) -> bool {
        self.code == Some(ErrorCode::EmployeeDeleteBlocked)
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.banner)
    }
}

impl std::error::Error for ViewError {}

/// Long US-style date, e.g. "January 1, 2010"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Dropdown entries: the suggested options, plus `current` when it is a
/// stored value outside them
pub fn choices<'a>(options: &[&'a str], current: &'a str) -> Vec<&'a str> {
    let mut choices = options.to_vec();
    if !current.trim().is_empty() && !options.contains(&current) {
        choices.push(current);
    }
    choices
}

/// Table label for the employment status flag
pub fn status_label(current_status: bool) -> &'static str {
    if current_status { "Working" } else { "Retired" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_keep_unlisted_current_value() {
        let options = ["Employee", "Manager"];
        assert_eq!(choices(&options, "Manager"), vec!["Employee", "Manager"]);
        assert_eq!(choices(&options, "CTO"), vec!["Employee", "Manager", "CTO"]);
        assert_eq!(choices(&options, " "), vec!["Employee", "Manager"]);
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert_eq!(format_display_date(date), "January 1, 2010");
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_display_date(date), "December 31, 1999");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(true), "Working");
        assert_eq!(status_label(false), "Retired");
    }

    #[test]
    fn test_banner_mapping() {
        let blocked = ClientError::Api {
            code: ErrorCode::EmployeeDeleteBlocked.code(),
            message: "CAN'T DELETE EMPLOYEE - STATUS ACTIVE".to_string(),
            details: None,
        };
        let view = ViewError::from_client(&blocked, "Something went wrong");
        assert!(view.is_delete_blocked());
        assert_eq!(view.banner, DELETE_BLOCKED_BANNER);

        let failed = ClientError::Api {
            code: ErrorCode::EmployeeDeleteFailed.code(),
            message: "Failed to delete employee".to_string(),
            details: None,
        };
        let view = ViewError::from_client(&failed, "Something went wrong");
        assert_eq!(view.banner, "Something went wrong");
        assert_eq!(view.code, Some(ErrorCode::EmployeeDeleteFailed));

        let view = ViewError::with_server_message(&failed);
        assert_eq!(view.to_string(), "Error: Failed to delete employee");
    }
}
