//! Employee details with retirement countdown

use chrono::Datelike;
use shared::models::Employee;

use super::ViewError;
use crate::api::EmployeeApi;
use crate::client::HttpClient;

#[derive(Debug)]
pub struct EmployeeDetails<C> {
    api: EmployeeApi<C>,
    employee: Option<Employee>,
    error: Option<ViewError>,
}

impl<C: HttpClient> EmployeeDetails<C> {
    pub fn new(api: EmployeeApi<C>) -> Self {
        Self {
            api,
            employee: None,
            error: None,
        }
    }

    pub fn api(&self) -> &EmployeeApi<C> {
        &self.api
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    /// Fetch one employee (the server attaches retirement info)
    pub async fn load(&mut self, id: &str) -> Result<&Employee, ViewError> {
        match self.api.get(id).await {
            Ok(employee) => {
                self.error = None;
                Ok(self.employee.insert(employee))
            }
            Err(e) => {
                let err = ViewError::with_server_message(&e);
                self.employee = None;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// "40 (2010)": age at joining and the year joined
    pub fn age_line(&self) -> Option<String> {
        self.employee
            .as_ref()
            .map(|e| format!("{} ({})", e.age, e.date_of_joining.year()))
    }

    /// "9 years, 11 months, 29 days"
    pub fn retirement_summary(&self) -> Option<String> {
        let info = self.employee.as_ref()?.retirement_info?;
        Some(format!(
            "{} years, {} months, {} days",
            info.years_left, info.months_left, info.days_left
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHttpClient, employee};
    use shared::error::ErrorCode;
    use shared::retirement::RetirementInfo;

    #[tokio::test]
    async fn test_load_with_retirement_info() {
        let mut details = EmployeeDetails::new(EmployeeApi::new(FakeHttpClient::new()));
        let mut ann = employee("employee:a", "Ann", "Lee", 40, true);
        ann.retirement_info = Some(RetirementInfo {
            years_left: 9,
            months_left: 11,
            days_left: 29,
        });
        details.api().client().push_ok(ann);

        let loaded = details.load("employee:a").await.unwrap();
        assert_eq!(loaded.full_name(), "Ann Lee");
        assert_eq!(details.age_line().as_deref(), Some("40 (2010)"));
        assert_eq!(
            details.retirement_summary().as_deref(),
            Some("9 years, 11 months, 29 days")
        );
        assert_eq!(
            details.api().client().requests(),
            vec!["GET /api/employees/employee:a"]
        );
    }

    #[tokio::test]
    async fn test_not_found_banner_uses_server_message() {
        let mut details = EmployeeDetails::new(EmployeeApi::new(FakeHttpClient::new()));
        details.api().client().push_err(ErrorCode::EmployeeNotFound);

        let err = details.load("employee:zzz").await.unwrap_err();
        assert_eq!(err.banner, "Error: Employee not found");
        assert!(details.employee().is_none());
        assert!(details.retirement_summary().is_none());
    }
}
