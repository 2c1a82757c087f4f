//! Create-employee form

use chrono::NaiveDate;
use shared::models::{
    DEFAULT_DEPARTMENT, DEFAULT_TITLE, DEPARTMENT_OPTIONS, Employee, EmployeeCreate, EmployeeType,
    TITLE_OPTIONS,
};

use super::{ViewError, choices};
use crate::api::EmployeeApi;
use crate::client::HttpClient;

const CREATE_FAILED_BANNER: &str = "Error creating employee.";

/// Form input as typed by the user
///
/// `age` and `date_of_joining` stay as text until submit; values that do not
/// parse are sent as missing and the server reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    /// `YYYY-MM-DD`
    pub date_of_joining: String,
    pub title: String,
    pub department: String,
    pub employee_type: EmployeeType,
}

impl Default for CreateEmployeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
            date_of_joining: String::new(),
            title: DEFAULT_TITLE.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            employee_type: EmployeeType::default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl CreateEmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_choices(&self) -> Vec<&str> {
        choices(TITLE_OPTIONS, &self.title)
    }

    pub fn department_choices(&self) -> Vec<&str> {
        choices(DEPARTMENT_OPTIONS, &self.department)
    }

    pub fn employee_type_choices(&self) -> &'static [EmployeeType] {
        &EmployeeType::ALL
    }

    /// Request body for the current input
    pub fn to_payload(&self) -> EmployeeCreate {
        EmployeeCreate {
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            age: self.age.trim().parse().ok(),
            date_of_joining: NaiveDate::parse_from_str(self.date_of_joining.trim(), "%Y-%m-%d")
                .ok(),
            title: non_empty(&self.title),
            department: non_empty(&self.department),
            employee_type: Some(self.employee_type.to_string()),
        }
    }

    /// Submit; the form resets to its defaults on success
    pub async fn submit<C: HttpClient>(
        &mut self,
        api: &EmployeeApi<C>,
    ) -> Result<Employee, ViewError> {
        match api.create(&self.to_payload()).await {
            Ok(created) => {
                *self = Self::default();
                Ok(created)
            }
            Err(e) => Err(ViewError::from_client(&e, CREATE_FAILED_BANNER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHttpClient, employee};
    use shared::error::ErrorCode;

    fn filled() -> CreateEmployeeForm {
        CreateEmployeeForm {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            age: "40".to_string(),
            date_of_joining: "2010-01-01".to_string(),
            ..CreateEmployeeForm::default()
        }
    }

    #[test]
    fn test_defaults() {
        let form = CreateEmployeeForm::new();
        assert_eq!(form.title, "Employee");
        assert_eq!(form.department, "IT");
        assert_eq!(form.employee_type, EmployeeType::FullTime);
    }

    #[test]
    fn test_dropdown_choices() {
        let mut form = CreateEmployeeForm::new();
        assert_eq!(form.title_choices(), vec!["Employee", "Manager", "Director"]);
        assert_eq!(form.department_choices()[0], "IT");
        assert_eq!(form.employee_type_choices().len(), 4);

        form.department = "Legal".to_string();
        assert_eq!(form.department_choices().last(), Some(&"Legal"));
    }

    #[test]
    fn test_payload_parses_inputs() {
        let payload = filled().to_payload();
        assert_eq!(payload.age, Some(40));
        assert_eq!(payload.date_of_joining, NaiveDate::from_ymd_opt(2010, 1, 1));
        assert_eq!(payload.employee_type.as_deref(), Some("FullTime"));

        let bad = CreateEmployeeForm {
            age: "forty".to_string(),
            date_of_joining: "01/01/2010".to_string(),
            first_name: "  ".to_string(),
            ..filled()
        }
        .to_payload();
        assert!(bad.age.is_none());
        assert!(bad.date_of_joining.is_none());
        assert!(bad.first_name.is_none());
    }

    #[tokio::test]
    async fn test_submit_resets_on_success() {
        let api = EmployeeApi::new(FakeHttpClient::new());
        api.client()
            .push_ok(employee("employee:a", "Ann", "Lee", 40, true));

        let mut form = filled();
        let created = form.submit(&api).await.unwrap();
        assert_eq!(created.id, "employee:a");
        assert_eq!(form, CreateEmployeeForm::default());
        assert_eq!(api.client().requests(), vec!["POST /api/employees"]);
    }

    #[tokio::test]
    async fn test_submit_keeps_input_on_failure() {
        let api = EmployeeApi::new(FakeHttpClient::new());
        api.client().push_err(ErrorCode::ValidationFailed);

        let mut form = filled();
        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err.banner, CREATE_FAILED_BANNER);
        assert_eq!(form, filled());
    }
}
