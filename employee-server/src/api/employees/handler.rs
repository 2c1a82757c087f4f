//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{Employee, EmployeeCreate, EmployeeListQuery, EmployeeUpdate};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok};

/// List employees, optionally filtered by type
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let employees = state
        .employees
        .list(query.employee_type.as_deref())
        .await?;
    Ok(ok(employees))
}

/// Employees one year from retirement
pub async fn list_upcoming_retirements(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let employees = state.employees.list_upcoming_retirements().await?;
    Ok(ok(employees))
}

/// Get employee by id, with retirement info
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee = state.employees.get_by_id(&id).await?;
    Ok(ok(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee = state.employees.create(payload).await?;
    Ok(ok(employee))
}

/// Update title, department or status
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee = state.employees.update(&id, payload).await?;
    Ok(ok(employee))
}

/// Delete an inactive employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let employee = state.employees.delete(&id).await?;
    Ok(ok(employee))
}
