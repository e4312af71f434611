use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

pub mod endpoints {
    pub const EMPLOYEE: &str = "/employee";
    pub const HEALTH: &str = "/health";
}

/// Build the axum router with all Roster endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(
            endpoints::EMPLOYEE,
            get(handler::get_employee)
                .post(handler::create_employee)
                .put(handler::update_employee)
                .delete(handler::delete_employee),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
