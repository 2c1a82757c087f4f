// employee-client/src/client/http.rs
// HTTP 客户端 - 网络通信

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::error::ErrorCode;

use crate::config::ClientConfig;
use crate::{ClientError, ClientResult};

/// 服务端返回的错误响应格式
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// 解析响应: 成功时反序列化 body, 失败时优先解析结构化错误
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ClientResult<T> {
    if !status.is_success() {
        if let Ok(api_err) = serde_json::from_slice::<ApiErrorResponse>(body) {
            return Err(ClientError::Api {
                code: api_err.code,
                message: api_err.message,
                details: api_err.details,
            });
        }
        // 非结构化错误 (例如 axum 的 JSON 提取失败)
        let text = String::from_utf8_lossy(body).to_string();
        return Err(ClientError::Api {
            code: if status.is_client_error() {
                ErrorCode::InvalidRequest.code()
            } else {
                ErrorCode::Unknown.code()
            },
            message: if text.is_empty() {
                status.to_string()
            } else {
                text
            },
            details: None,
        });
    }

    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// HTTP 客户端 trait
///
/// `path` 以 `/` 开头, 例如 `/api/employees`
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:4000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(
            client.url("/api/employees"),
            "http://localhost:4000/api/employees"
        );
    }

    #[test]
    fn test_decode_structured_error() {
        let body = br#"{"code":8006,"message":"CAN'T DELETE EMPLOYEE - STATUS ACTIVE","details":{"id":"employee:a"}}"#;
        let err = decode_response::<serde_json::Value>(StatusCode::CONFLICT, body).unwrap_err();
        assert!(err.is_delete_blocked());
        assert_eq!(err.error_code(), Some(ErrorCode::EmployeeDeleteBlocked));
    }

    #[test]
    fn test_decode_plain_text_error() {
        let err = decode_response::<serde_json::Value>(
            StatusCode::UNPROCESSABLE_ENTITY,
            b"Failed to deserialize the JSON body",
        )
        .unwrap_err();
        assert_eq!(err.error_code(), Some(ErrorCode::InvalidRequest));
    }

    #[test]
    fn test_decode_success_body() {
        let value: serde_json::Value =
            decode_response(StatusCode::OK, br#"{"code":0,"message":"OK","data":[]}"#).unwrap();
        assert_eq!(value["data"], serde_json::json!([]));
    }
}
