//! Employee records for Roster.
//!
//! This crate sits between the HTTP surface and the ordered store. It owns
//! the record shapes exchanged as JSON, the field rules a record must pass
//! before it is stored, and the numeric error catalogue reported to clients.
//!
//! [`EmployeeService`] is the only type that talks to the store. Handlers
//! pass it raw query strings; it parses them, validates, performs the store
//! call and maps store errors one-to-one onto [`EmployeeError`].

pub mod error;
pub mod model;
pub mod service;
pub mod validation;

pub use error::{ApiErrorBody, EmployeeError, EmployeeResult};
pub use model::{ApiResponse, Employee, EmployeeId, EmployeeList, EmployeeUpdateRequest};
pub use service::{EmployeeService, PageSizing, DEFAULT_PAGE_SIZE};
pub use validation::MAX_FIELD_LEN;
