//! Employee Service
//!
//! The six employee operations over the record store. Store failures are
//! wrapped per operation so callers get an explicit kind while the cause
//! stays reachable through `source()`.

use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::retirement::{calculate_retirement_info, is_upcoming_retirement};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::NewEmployee;
use crate::db::repository::{EmployeeRepository, RepoError};
use crate::utils::validation::{provided_text, require_present, require_text};

/// Employee operation failures
#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee not found")]
    NotFound { id: String },

    #[error("All fields are required")]
    ValidationFailed { missing: Vec<&'static str> },

    #[error("CAN'T DELETE EMPLOYEE - STATUS ACTIVE")]
    DeleteBlocked { id: String },

    #[error("Failed to fetch employees")]
    ListFailed(#[source] RepoError),

    #[error("Failed to fetch employee")]
    FetchFailed(#[source] RepoError),

    #[error("Failed to fetch upcoming retirements")]
    UpcomingRetirementsFailed(#[source] RepoError),

    #[error("Failed to create employee")]
    CreateFailed(#[source] RepoError),

    #[error("Failed to update employee")]
    UpdateFailed(#[source] RepoError),

    #[error("Failed to delete employee")]
    DeleteFailed(#[source] RepoError),
}

impl EmployeeError {
    /// Wire error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            EmployeeError::NotFound { .. } => ErrorCode::EmployeeNotFound,
            EmployeeError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            EmployeeError::DeleteBlocked { .. } => ErrorCode::EmployeeDeleteBlocked,
            EmployeeError::ListFailed(_)
            | EmployeeError::FetchFailed(_)
            | EmployeeError::UpcomingRetirementsFailed(_) => ErrorCode::EmployeeFetchFailed,
            EmployeeError::CreateFailed(_) => ErrorCode::EmployeeCreateFailed,
            EmployeeError::UpdateFailed(_) => ErrorCode::EmployeeUpdateFailed,
            EmployeeError::DeleteFailed(_) => ErrorCode::EmployeeDeleteFailed,
        }
    }

    /// NotFound from the store stays NotFound; everything else becomes `failed`
    fn from_repo(id: &str, err: RepoError, failed: fn(RepoError) -> EmployeeError) -> Self {
        match err {
            RepoError::NotFound(_) => EmployeeError::NotFound { id: id.to_string() },
            other => failed(other),
        }
    }

    fn is_store_failure(&self) -> bool {
        !matches!(
            self,
            EmployeeError::NotFound { .. }
                | EmployeeError::ValidationFailed { .. }
                | EmployeeError::DeleteBlocked { .. }
        )
    }
}

impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        let error = AppError::with_message(err.code(), err.to_string());
        match err {
            EmployeeError::NotFound { id } | EmployeeError::DeleteBlocked { id } => {
                error.with_detail("id", id)
            }
            EmployeeError::ValidationFailed { missing } => error.with_detail("missing", missing),
            _ => error,
        }
    }
}

fn report(operation: &'static str, err: EmployeeError) -> EmployeeError {
    if err.is_store_failure() {
        let cause = std::error::Error::source(&err)
            .map(|e| e.to_string())
            .unwrap_or_default();
        tracing::error!(operation, cause = %cause, "{}", err);
    } else {
        tracing::warn!(operation, "{}", err);
    }
    err
}

/// Validate a create payload into insertable fields.
///
/// Text fields must be non-blank; `age` and `dateOfJoining` only need to be
/// present (range checks belong to the store).
fn validate_create(payload: &EmployeeCreate) -> Result<NewEmployee, EmployeeError> {
    let (
        Some(first_name),
        Some(last_name),
        Some(age),
        Some(date_of_joining),
        Some(title),
        Some(department),
        Some(employee_type),
    ) = (
        provided_text(&payload.first_name),
        provided_text(&payload.last_name),
        payload.age,
        payload.date_of_joining,
        provided_text(&payload.title),
        provided_text(&payload.department),
        provided_text(&payload.employee_type),
    )
    else {
        let mut missing = Vec::new();
        require_text(&payload.first_name, "firstName", &mut missing);
        require_text(&payload.last_name, "lastName", &mut missing);
        require_present(&payload.age, "age", &mut missing);
        require_present(&payload.date_of_joining, "dateOfJoining", &mut missing);
        require_text(&payload.title, "title", &mut missing);
        require_text(&payload.department, "department", &mut missing);
        require_text(&payload.employee_type, "employeeType", &mut missing);
        return Err(EmployeeError::ValidationFailed { missing });
    };

    Ok(NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
        date_of_joining,
        title: title.to_string(),
        department: department.to_string(),
        employee_type: employee_type.to_string(),
    })
}

#[derive(Clone, Debug)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: EmployeeRepository::new(db),
        }
    }

    /// All employees, optionally of one type (an empty type means no filter)
    pub async fn list(&self, employee_type: Option<&str>) -> Result<Vec<Employee>, EmployeeError> {
        let filter = employee_type.filter(|t| !t.is_empty());
        let records = self
            .repo
            .find_all(filter)
            .await
            .map_err(|e| report("list", EmployeeError::ListFailed(e)))?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    /// One employee with its retirement projection attached
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, EmployeeError> {
        let record = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| report("get_by_id", EmployeeError::FetchFailed(e)))?
            .ok_or_else(|| report("get_by_id", EmployeeError::NotFound { id: id.to_string() }))?;

        let retirement_info = calculate_retirement_info(record.date_of_joining, record.age);
        let mut employee = Employee::from(record);
        employee.retirement_info = Some(retirement_info);
        Ok(employee)
    }

    /// Employees one year short of retirement age
    pub async fn list_upcoming_retirements(&self) -> Result<Vec<Employee>, EmployeeError> {
        let records = self.repo.find_all(None).await.map_err(|e| {
            report(
                "list_upcoming_retirements",
                EmployeeError::UpcomingRetirementsFailed(e),
            )
        })?;
        Ok(records
            .into_iter()
            .filter(|r| is_upcoming_retirement(r.age))
            .map(Employee::from)
            .collect())
    }

    /// Create an employee; new employees are always active
    pub async fn create(&self, payload: EmployeeCreate) -> Result<Employee, EmployeeError> {
        let data = validate_create(&payload).map_err(|e| report("create", e))?;
        let record = self
            .repo
            .insert(data)
            .await
            .map_err(|e| report("create", EmployeeError::CreateFailed(e)))?;

        tracing::info!(id = %record.id, "Employee created");
        Ok(Employee::from(record))
    }

    /// Apply title/department (when non-blank) and status (when present)
    pub async fn update(&self, id: &str, payload: EmployeeUpdate) -> Result<Employee, EmployeeError> {
        let title = provided_text(&payload.title).map(str::to_string);
        let department = provided_text(&payload.department).map(str::to_string);
        let current_status = payload.current_status;

        let result = if title.is_none() && department.is_none() && current_status.is_none() {
            self.repo.get(id).await
        } else {
            self.repo
                .update_fields(id, title, department, current_status)
                .await
        };

        let record = result.map_err(|e| {
            report(
                "update",
                EmployeeError::from_repo(id, e, EmployeeError::UpdateFailed),
            )
        })?;
        Ok(Employee::from(record))
    }

    /// Delete an inactive employee, returning the removed record
    pub async fn delete(&self, id: &str) -> Result<Employee, EmployeeError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| report("delete", EmployeeError::DeleteFailed(e)))?
            .ok_or_else(|| report("delete", EmployeeError::NotFound { id: id.to_string() }))?;

        if existing.current_status {
            return Err(report(
                "delete",
                EmployeeError::DeleteBlocked { id: id.to_string() },
            ));
        }

        let removed = self
            .repo
            .delete_inactive(id)
            .await
            .map_err(|e| report("delete", EmployeeError::DeleteFailed(e)))?;

        let Some(removed) = removed else {
            // Reactivated or removed after the check above
            let still_there = self
                .repo
                .find_by_id(id)
                .await
                .map_err(|e| report("delete", EmployeeError::DeleteFailed(e)))?
                .is_some();
            let err = if still_there {
                EmployeeError::DeleteBlocked { id: id.to_string() }
            } else {
                EmployeeError::NotFound { id: id.to_string() }
            };
            return Err(report("delete", err));
        };

        tracing::info!(id = %removed.id, "Employee deleted");
        Ok(Employee::from(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::error::Error as _;

    fn full_payload() -> EmployeeCreate {
        EmployeeCreate {
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            age: Some(40),
            date_of_joining: NaiveDate::from_ymd_opt(2010, 1, 1),
            title: Some("Employee".to_string()),
            department: Some("IT".to_string()),
            employee_type: Some("FullTime".to_string()),
        }
    }

    #[test]
    fn test_validate_create_accepts_full_payload() {
        let data = validate_create(&full_payload()).unwrap();
        assert_eq!(data.first_name, "Ann");
        assert_eq!(data.age, 40);
        assert_eq!(data.employee_type, "FullTime");
    }

    #[test]
    fn test_validate_create_accepts_zero_and_out_of_range_age() {
        for age in [0, 19, 71] {
            let payload = EmployeeCreate {
                age: Some(age),
                ..full_payload()
            };
            assert_eq!(validate_create(&payload).unwrap().age, age);
        }
    }

    #[test]
    fn test_validate_create_lists_missing_fields() {
        let payload = EmployeeCreate {
            last_name: Some("  ".to_string()),
            date_of_joining: None,
            employee_type: None,
            ..full_payload()
        };
        match validate_create(&payload) {
            Err(EmployeeError::ValidationFailed { missing }) => {
                assert_eq!(missing, vec!["lastName", "dateOfJoining", "employeeType"]);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_error_codes_and_messages() {
        let blocked = EmployeeError::DeleteBlocked {
            id: "employee:a".to_string(),
        };
        assert_eq!(blocked.code(), ErrorCode::EmployeeDeleteBlocked);
        assert_eq!(blocked.to_string(), "CAN'T DELETE EMPLOYEE - STATUS ACTIVE");

        let failed = EmployeeError::ListFailed(RepoError::Unexpected("boom".to_string()));
        assert_eq!(failed.code(), ErrorCode::EmployeeFetchFailed);
        assert_eq!(failed.to_string(), "Failed to fetch employees");
        assert_eq!(
            failed.source().map(|e| e.to_string()),
            Some("Unexpected result: boom".to_string())
        );
    }

    #[test]
    fn test_from_repo_keeps_not_found() {
        let err = EmployeeError::from_repo(
            "employee:x",
            RepoError::NotFound("gone".to_string()),
            EmployeeError::UpdateFailed,
        );
        assert!(matches!(err, EmployeeError::NotFound { ref id } if id == "employee:x"));

        let err = EmployeeError::from_repo(
            "employee:x",
            RepoError::Unexpected("boom".to_string()),
            EmployeeError::UpdateFailed,
        );
        assert_eq!(err.code(), ErrorCode::EmployeeUpdateFailed);
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = EmployeeError::ValidationFailed {
            missing: vec!["age"],
        }
        .into();
        assert_eq!(app.code, ErrorCode::ValidationFailed);
        assert_eq!(app.message, "All fields are required");
        let details = app.details.unwrap();
        assert_eq!(details["missing"], serde_json::json!(["age"]));

        let app: AppError = EmployeeError::NotFound {
            id: "employee:x".to_string(),
        }
        .into();
        assert_eq!(app.code, ErrorCode::EmployeeNotFound);
        assert_eq!(app.http_status(), http::StatusCode::NOT_FOUND);
    }
}
