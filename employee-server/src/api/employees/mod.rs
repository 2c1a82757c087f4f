//! Employee API Module
//!
//! | Route | Method | Operation |
//! |-------|--------|-----------|
//! | /api/employees?employeeType= | GET | list |
//! | /api/employees/upcoming-retirements | GET | upcoming retirements |
//! | /api/employees/{id} | GET | get by id (with retirement info) |
//! | /api/employees | POST | create |
//! | /api/employees/{id} | PUT | update |
//! | /api/employees/{id} | DELETE | delete (inactive only) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/upcoming-retirements", get(handler::list_upcoming_retirements))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
