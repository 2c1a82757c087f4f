//! Upcoming retirements list

use shared::models::Employee;

use super::ViewError;
use crate::api::EmployeeApi;
use crate::client::HttpClient;

const FETCH_FAILED_BANNER: &str = "Error fetching retirements. Please try again later.";

/// Text shown when nobody is retiring soon
pub const EMPTY_MESSAGE: &str = "No upcoming retirements.";

#[derive(Debug)]
pub struct UpcomingRetirementsView<C> {
    api: EmployeeApi<C>,
    employees: Vec<Employee>,
    error: Option<ViewError>,
}

impl<C: HttpClient> UpcomingRetirementsView<C> {
    pub fn new(api: EmployeeApi<C>) -> Self {
        Self {
            api,
            employees: Vec::new(),
            error: None,
        }
    }

    pub fn api(&self) -> &EmployeeApi<C> {
        &self.api
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    /// Message for an empty list, if the list is empty
    pub fn empty_message(&self) -> Option<&'static str> {
        self.employees.is_empty().then_some(EMPTY_MESSAGE)
    }

    /// Fetch the server's upcoming-retirement list
    pub async fn load(&mut self) -> Result<(), ViewError> {
        match self.api.upcoming_retirements().await {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                let err = ViewError::from_client(&e, FETCH_FAILED_BANNER);
                self.employees.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHttpClient, employee};
    use shared::error::ErrorCode;

    #[tokio::test]
    async fn test_load_uses_server_list() {
        let mut view = UpcomingRetirementsView::new(EmployeeApi::new(FakeHttpClient::new()));
        view.api()
            .client()
            .push_ok(vec![employee("employee:b", "Bob", "Stone", 64, true)]);

        view.load().await.unwrap();
        assert_eq!(view.employees().len(), 1);
        assert!(view.empty_message().is_none());
        assert_eq!(
            view.api().client().requests(),
            vec!["GET /api/employees/upcoming-retirements"]
        );
    }

    #[tokio::test]
    async fn test_empty_and_failure() {
        let mut view = UpcomingRetirementsView::new(EmployeeApi::new(FakeHttpClient::new()));
        view.api().client().push_ok(Vec::<Employee>::new());
        view.load().await.unwrap();
        assert_eq!(view.empty_message(), Some(EMPTY_MESSAGE));

        view.api().client().push_err(ErrorCode::EmployeeFetchFailed);
        let err = view.load().await.unwrap_err();
        assert_eq!(err.banner, FETCH_FAILED_BANNER);
        assert_eq!(view.error(), Some(&err));
    }
}
