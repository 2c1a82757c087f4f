//! Scripted transport for view-model tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{ApiResponse, AppError, ErrorCode};

use crate::client::{HttpClient, decode_response};
use crate::{ClientError, ClientResult};

type Scripted = Result<serde_json::Value, ErrorCode>;

/// Answers requests from a queue and records "METHOD path" for each call
#[derive(Debug, Default)]
pub struct FakeHttpClient {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<String>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success envelope carrying `data`
    pub fn push_ok<T: Serialize>(&self, data: T) {
        let body = serde_json::to_value(ApiResponse::success(data)).unwrap();
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    /// Queue a structured failure
    pub fn push_err(&self, code: ErrorCode) {
        self.responses.lock().unwrap().push_back(Err(code));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn respond<T: DeserializeOwned>(&self, method: &str, path: &str) -> ClientResult<T> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {}", method, path));
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(serde_json::from_value(body)?),
            Some(Err(code)) => {
                let body = serde_json::to_vec(&ApiResponse::<()>::error(&AppError::new(code)))?;
                decode_response(code.http_status(), &body)
            }
            None => Err(ClientError::Internal(format!(
                "no scripted response for {} {}",
                method, path
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("GET", path)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        _body: &B,
    ) -> ClientResult<T> {
        self.respond("POST", path)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        _body: &B,
    ) -> ClientResult<T> {
        self.respond("PUT", path)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("DELETE", path)
    }
}

/// Sample employee for view tests
pub fn employee(id: &str, first: &str, last: &str, age: i32, active: bool) -> shared::models::Employee {
    shared::models::Employee {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        age,
        date_of_joining: chrono::NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
        title: "Employee".to_string(),
        department: "IT".to_string(),
        employee_type: "FullTime".to_string(),
        current_status: active,
        retirement_info: None,
    }
}
