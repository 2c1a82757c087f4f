//! 服务模块 - 业务逻辑与 HTTP 应用组装

pub mod employee;
pub mod http;

pub use employee::{EmployeeError, EmployeeService};
pub use http::{build_app, build_router};
