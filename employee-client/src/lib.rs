//! Employee Client - typed client for the employee API
//!
//! - [`HttpClient`] transports: [`NetworkHttpClient`] (reqwest) and, with the
//!   `in-process` feature, [`OneshotHttpClient`] (tower oneshot)
//! - [`EmployeeApi`] - the six employee operations
//! - [`views`] - view models for the directory, details, forms and
//!   upcoming-retirements screens

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::EmployeeApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::error::{ApiResponse, ErrorCode};
pub use shared::models::{Employee, EmployeeCreate, EmployeeType, EmployeeUpdate};
pub use shared::retirement::RetirementInfo;
