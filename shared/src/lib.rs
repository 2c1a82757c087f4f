//! Shared types for the employee service
//!
//! Error codes and response envelope, the employee data models, and the
//! retirement projection used by both server and client.

pub mod error;
pub mod models;
pub mod retirement;
