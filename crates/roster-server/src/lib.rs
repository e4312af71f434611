//! HTTP server for Roster.
//!
//! Exposes employee CRUD on `/employee` (identifiers travel as query
//! parameters) plus a `/health` probe. Handlers are thin: they extract the
//! request, call [`roster_employee::EmployeeService`], and turn its errors
//! into `{"code":..,"error_msg":..}` JSON with the matching status.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult, MALFORMED_BODY_CODE};
pub use handler::{EmployeeQuery, HealthResponse};
pub use router::{build_router, endpoints};
pub use server::RosterServer;
pub use state::AppState;
