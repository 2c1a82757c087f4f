//! Update-employee form, pre-filled from the stored record

use shared::models::{DEPARTMENT_OPTIONS, Employee, EmployeeUpdate, TITLE_OPTIONS};

use super::{ViewError, choices};
use crate::api::EmployeeApi;
use crate::client::HttpClient;

const LOAD_FAILED_BANNER: &str = "Error loading employee.";
const UPDATE_FAILED_BANNER: &str = "Error updating employee.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmployeeForm {
    id: String,
    pub title: String,
    pub department: String,
    pub current_status: bool,
}

impl UpdateEmployeeForm {
    /// Pre-fill from an employee record
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            title: employee.title.clone(),
            department: employee.department.clone(),
            current_status: employee.current_status,
        }
    }

    /// Fetch the record and pre-fill the form from it
    pub async fn load<C: HttpClient>(api: &EmployeeApi<C>, id: &str) -> Result<Self, ViewError> {
        api.get(id)
            .await
            .map(|employee| Self::from_employee(&employee))
            .map_err(|e| ViewError::from_client(&e, LOAD_FAILED_BANNER))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title_choices(&self) -> Vec<&str> {
        choices(TITLE_OPTIONS, &self.title)
    }

    pub fn department_choices(&self) -> Vec<&str> {
        choices(DEPARTMENT_OPTIONS, &self.department)
    }

    pub fn to_payload(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            title: Some(self.title.clone()),
            department: Some(self.department.clone()),
            current_status: Some(self.current_status),
        }
    }

    pub async fn submit<C: HttpClient>(&self, api: &EmployeeApi<C>) -> Result<Employee, ViewError> {
        api.update(&self.id, &self.to_payload())
            .await
            .map_err(|e| ViewError::from_client(&e, UPDATE_FAILED_BANNER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHttpClient, employee};
    use shared::error::ErrorCode;

    #[tokio::test]
    async fn test_load_prefills_from_server() {
        let api = EmployeeApi::new(FakeHttpClient::new());
        let mut stored = employee("employee:a", "Ann", "Lee", 40, true);
        stored.title = "Manager".to_string();
        stored.department = "Finance".to_string();
        api.client().push_ok(stored);

        let form = UpdateEmployeeForm::load(&api, "employee:a").await.unwrap();
        assert_eq!(form.id(), "employee:a");
        assert_eq!(form.title, "Manager");
        assert_eq!(form.department, "Finance");
        assert!(form.current_status);
        assert_eq!(form.title_choices(), vec!["Employee", "Manager", "Director"]);
        assert!(form.department_choices().contains(&"Finance"));
    }

    #[tokio::test]
    async fn test_submit_sends_all_three_fields() {
        let api = EmployeeApi::new(FakeHttpClient::new());
        let mut form = UpdateEmployeeForm::from_employee(&employee("employee:a", "Ann", "Lee", 40, true));
        form.current_status = false;

        let payload = form.to_payload();
        assert_eq!(payload.current_status, Some(false));
        assert_eq!(payload.title.as_deref(), Some("Employee"));

        api.client()
            .push_ok(employee("employee:a", "Ann", "Lee", 40, false));
        let updated = form.submit(&api).await.unwrap();
        assert!(!updated.current_status);
        assert_eq!(api.client().requests(), vec!["PUT /api/employees/employee:a"]);
    }

    #[tokio::test]
    async fn test_failures_map_to_banners() {
        let api = EmployeeApi::new(FakeHttpClient::new());
        api.client().push_err(ErrorCode::EmployeeNotFound);
        let err = UpdateEmployeeForm::load(&api, "employee:x").await.unwrap_err();
        assert_eq!(err.banner, LOAD_FAILED_BANNER);

        let form = UpdateEmployeeForm::from_employee(&employee("employee:a", "Ann", "Lee", 40, true));
        api.client().push_err(ErrorCode::EmployeeUpdateFailed);
        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.banner, UPDATE_FAILED_BANNER);
        assert_eq!(err.code, Some(ErrorCode::EmployeeUpdateFailed));
    }
}
