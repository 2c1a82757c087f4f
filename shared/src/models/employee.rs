//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::retirement::RetirementInfo;

/// Suggested role labels offered by the client forms (the set stays open)
pub const TITLE_OPTIONS: &[&str] = &["Employee", "Manager", "Director"];

/// Suggested department labels offered by the client forms (the set stays open)
pub const DEPARTMENT_OPTIONS: &[&str] = &[
    "IT",
    "HR",
    "Engineering",
    "Sales",
    "Marketing",
    "Finance",
];

/// Default title for a new employee form
pub const DEFAULT_TITLE: &str = "Employee";

/// Default department for a new employee form
pub const DEFAULT_DEPARTMENT: &str = "IT";

/// Employment type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Seasonal,
}

impl EmployeeType {
    pub const ALL: [EmployeeType; 4] = [
        EmployeeType::FullTime,
        EmployeeType::PartTime,
        EmployeeType::Contract,
        EmployeeType::Seasonal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "FullTime",
            EmployeeType::PartTime => "PartTime",
            EmployeeType::Contract => "Contract",
            EmployeeType::Seasonal => "Seasonal",
        }
    }

    /// Human label, e.g. "Full Time"
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::FullTime => "Full Time",
            EmployeeType::PartTime => "Part Time",
            EmployeeType::Contract => "Contract",
            EmployeeType::Seasonal => "Seasonal",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown employee type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee type: {0}")]
pub struct UnknownEmployeeType(pub String);

impl FromStr for EmployeeType {
    type Err = UnknownEmployeeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmployeeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownEmployeeType(s.to_string()))
    }
}

/// Employee response
///
/// `retirement_info` is only attached on single-record reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier ("employee:xxx")
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: NaiveDate,
    pub title: String,
    pub department: String,
    pub employee_type: String,
    pub current_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_info: Option<RetirementInfo>,
}

impl Employee {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create employee payload
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation failure instead of a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<String>,
}

/// Update employee payload (only these three fields are mutable)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<bool>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.department.is_none() && self.current_status.is_none()
    }
}

/// List query parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<String>,
}
