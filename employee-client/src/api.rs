//! Typed employee API

use shared::error::ApiResponse;
use shared::models::{Employee, EmployeeCreate, EmployeeType, EmployeeUpdate};

use crate::client::HttpClient;
use crate::{ClientError, ClientResult};

const EMPLOYEES_PATH: &str = "/api/employees";

fn employee_path(id: &str) -> String {
    format!("{}/{}", EMPLOYEES_PATH, id)
}

fn into_data<T>(response: ApiResponse<T>) -> ClientResult<T> {
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse("response carried no data".to_string()))
}

/// Employee operations over any [`HttpClient`] transport
#[derive(Debug, Clone)]
pub struct EmployeeApi<C> {
    client: C,
}

impl<C: HttpClient> EmployeeApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// All employees, or only those of `employee_type`
    pub async fn list(&self, employee_type: Option<EmployeeType>) -> ClientResult<Vec<Employee>> {
        let path = match employee_type {
            Some(t) => format!("{}?employeeType={}", EMPLOYEES_PATH, t),
            None => EMPLOYEES_PATH.to_string(),
        };
        into_data(self.client.get(&path).await?)
    }

    /// One employee, including retirement info
    pub async fn get(&self, id: &str) -> ClientResult<Employee> {
        into_data(self.client.get(&employee_path(id)).await?)
    }

    pub async fn upcoming_retirements(&self) -> ClientResult<Vec<Employee>> {
        let path = format!("{}/upcoming-retirements", EMPLOYEES_PATH);
        into_data(self.client.get(&path).await?)
    }

    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        into_data(self.client.post(EMPLOYEES_PATH, payload).await?)
    }

    pub async fn update(&self, id: &str, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        into_data(self.client.put(&employee_path(id), payload).await?)
    }

    /// Delete an employee; the server refuses active ones
    pub async fn delete(&self, id: &str) -> ClientResult<Employee> {
        into_data(self.client.delete(&employee_path(id)).await?)
    }
}
