//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::Employee;
use surrealdb::RecordId;

/// Table holding employee documents
pub const EMPLOYEE_TABLE: &str = "employee";

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee model matching SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: NaiveDate,
    pub title: String,
    pub department: String,
    pub employee_type: String,
    #[serde(default = "default_true")]
    pub current_status: bool,
}

fn default_true() -> bool {
    true
}

/// Validated fields for a new employee (status is always active on insert)
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub date_of_joining: NaiveDate,
    pub title: String,
    pub department: String,
    pub employee_type: String,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id.to_string(),
            first_name: record.first_name,
            last_name: record.last_name,
            age: record.age,
            date_of_joining: record.date_of_joining,
            title: record.title,
            department: record.department,
            employee_type: record.employee_type,
            current_status: record.current_status,
            retirement_info: None,
        }
    }
}
