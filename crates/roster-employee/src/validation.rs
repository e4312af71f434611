//! Field rules for employee records and raw query parameters.

use crate::error::{EmployeeError, EmployeeResult};
use crate::model::{Employee, EmployeeId, EmployeeUpdateRequest};

/// Longest allowed name or position, in characters.
pub const MAX_FIELD_LEN: usize = 100;

/// Check a record submitted for creation.
pub fn validate_new(employee: &Employee) -> EmployeeResult<()> {
    if employee.id == 0 {
        return Err(EmployeeError::InvalidId);
    }
    if !text_ok(&employee.name) {
        return Err(EmployeeError::InvalidName);
    }
    if !text_ok(&employee.position) {
        return Err(EmployeeError::InvalidPosition);
    }
    // also rejects NaN
    if !(employee.salary > 0.0) {
        return Err(EmployeeError::InvalidSalary);
    }
    Ok(())
}

/// Check a partial update. At least one field must be set.
pub fn validate_update(update: &EmployeeUpdateRequest) -> EmployeeResult<()> {
    if update.position.is_empty() && update.salary == 0.0 {
        return Err(EmployeeError::InvalidUpdate);
    }
    if update.salary < 0.0 || update.salary.is_nan() {
        return Err(EmployeeError::InvalidSalary);
    }
    if update.position.chars().count() > MAX_FIELD_LEN {
        return Err(EmployeeError::InvalidPosition);
    }
    Ok(())
}

/// Parse a required employee id from a query string value.
pub fn parse_id(raw: Option<&str>) -> EmployeeResult<EmployeeId> {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<EmployeeId>() {
            Ok(0) | Err(_) => Err(EmployeeError::InvalidId),
            Ok(id) => Ok(id),
        },
        _ => Err(EmployeeError::InvalidId),
    }
}

/// Parse an optional pagination cursor. Missing, empty and `0` all mean
/// "start from the oldest record".
pub fn parse_cursor(raw: Option<&str>) -> EmployeeResult<Option<EmployeeId>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match s.parse::<EmployeeId>() {
            Ok(0) => Ok(None),
            Ok(id) => Ok(Some(id)),
            Err(_) => Err(EmployeeError::InvalidLastEvalId),
        },
    }
}

fn text_ok(s: &str) -> bool {
    !s.is_empty() && s.chars().count() <= MAX_FIELD_LEN
}
