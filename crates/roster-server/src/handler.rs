use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use roster_employee::{ApiResponse, Employee, EmployeeList, EmployeeUpdateRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Query parameters accepted on `/employee`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    pub id: Option<String>,
    pub last_eval_id: Option<String>,
    pub num_records: Option<String>,
}

impl EmployeeQuery {
    /// The `id` parameter, treating an empty value as absent.
    fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Health check response, including the page sizes list requests obey.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub default_page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<usize>,
}

impl HealthResponse {
    pub fn for_config(config: &ServerConfig) -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::for_config(&state.config))
}

/// `POST /employee`
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ServerResult<Json<ApiResponse>> {
    info!(method = "CreateEmployee", "request received");
    let Json(employee) = body.map_err(rejected)?;

    state.service.create(employee).map_err(|e| {
        error!(method = "CreateEmployee", error = %e, "failed to create employee");
        ServerError::from(e)
    })?;

    info!(method = "CreateEmployee", "request processed successfully");
    Ok(Json(ApiResponse::ok()))
}

/// `GET /employee?id=..` for one record, otherwise
/// `GET /employee?last_eval_id=..&num_records=..` for a page.
pub async fn get_employee(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> ServerResult<Json<EmployeeList>> {
    info!(method = "GetEmployee", "request received");

    let result = match query.id() {
        Some(id) => state.service.get(Some(id)).map(|employee| EmployeeList {
            employees: vec![employee],
            last_eval_id: 0,
        }),
        None => state
            .service
            .list(query.last_eval_id.as_deref(), query.num_records.as_deref()),
    };
    let list = result.map_err(|e| {
        error!(method = "GetEmployee", error = %e, "failed to get employee");
        ServerError::from(e)
    })?;

    info!(method = "GetEmployee", count = list.employees.len(), "request processed successfully");
    Ok(Json(list))
}

/// `PUT /employee?id=..`
pub async fn update_employee(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
    body: Result<Json<EmployeeUpdateRequest>, JsonRejection>,
) -> ServerResult<Json<ApiResponse>> {
    info!(method = "UpdateEmployee", "request received");
    let Json(update) = body.map_err(rejected)?;

    state.service.update(query.id(), update).map_err(|e| {
        error!(method = "UpdateEmployee", error = %e, "failed to update employee");
        ServerError::from(e)
    })?;

    info!(method = "UpdateEmployee", "request processed successfully");
    Ok(Json(ApiResponse::ok()))
}

/// `DELETE /employee?id=..`
pub async fn delete_employee(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> ServerResult<Json<ApiResponse>> {
    info!(method = "DeleteEmployee", "request received");

    state.service.delete(query.id()).map_err(|e| {
        error!(method = "DeleteEmployee", error = %e, "failed to delete employee");
        ServerError::from(e)
    })?;

    info!(method = "DeleteEmployee", "request processed successfully");
    Ok(Json(ApiResponse::ok()))
}

fn rejected(rejection: JsonRejection) -> ServerError {
    error!(error = %rejection.body_text(), "failed to parse the request body");
    ServerError::MalformedBody(rejection.body_text())
}
