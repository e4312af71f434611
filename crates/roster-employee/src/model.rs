use serde::{Deserialize, Serialize};

/// Store key for employees. `0` is reserved as the "no cursor" value on the
/// wire and is never a valid id.
pub type EmployeeId = i64;

/// A stored employee record.
///
/// Empty strings and a zero salary are left out of the JSON output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: EmployeeId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
        }
    }

    /// Apply the non-empty fields of an update request.
    pub fn apply(&mut self, update: &EmployeeUpdateRequest) {
        if !update.position.is_empty() {
            self.position = update.position.clone();
        }
        if update.salary != 0.0 {
            self.salary = update.salary;
        }
    }
}

/// Partial update for an existing employee. Unset fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdateRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub salary: f64,
}

/// Body returned by reads: one employee by id, or one page of a scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
    /// Cursor for the next page; `0` once the scan is exhausted.
    #[serde(default)]
    pub last_eval_id: EmployeeId,
}

/// Body returned by successful mutations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            message: "OK".into(),
        }
    }
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}
