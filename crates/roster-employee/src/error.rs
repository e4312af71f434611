use serde::{Deserialize, Serialize};

/// Client-facing errors for employee operations.
///
/// Each variant carries a stable numeric code (see [`EmployeeError::code`])
/// and an HTTP status (see [`EmployeeError::status`]). The `Display` text is
/// the message sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EmployeeError {
    #[error("Provide a valid ID")]
    InvalidId,

    #[error("Name cannot be empty or longer than 100 characters")]
    InvalidName,

    #[error("Position cannot be empty or longer than 100 characters")]
    InvalidPosition,

    #[error("Salary cannot be less than equal to 0")]
    InvalidSalary,

    #[error("Employee already exists")]
    AlreadyExists,

    #[error("Error adding employee")]
    AddFailed,

    #[error("Invalid last evaluated ID")]
    InvalidLastEvalId,

    #[error("Error getting employees")]
    ListFailed,

    #[error("Error deleting employee")]
    DeleteFailed,

    #[error("Invalid employee update request")]
    InvalidUpdate,

    #[error("Error updating employee")]
    UpdateFailed,

    #[error("Employee not found")]
    NotFound,

    #[error("Number of records exceeds the maximum page size")]
    InvalidPageSize,
}

const CODE_BASE: u32 = 100_010;

impl EmployeeError {
    /// Stable numeric error code, starting at 100010.
    pub fn code(&self) -> u32 {
        let offset = match self {
            Self::InvalidId => 0,
            Self::InvalidName => 1,
            Self::InvalidPosition => 2,
            Self::InvalidSalary => 3,
            Self::AlreadyExists => 4,
            Self::AddFailed => 5,
            Self::InvalidLastEvalId => 6,
            Self::ListFailed => 7,
            Self::DeleteFailed => 8,
            Self::InvalidUpdate => 9,
            Self::UpdateFailed => 10,
            Self::NotFound => 11,
            Self::InvalidPageSize => 12,
        };
        CODE_BASE + offset
    }

    /// HTTP status code reported for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidId
            | Self::InvalidName
            | Self::InvalidPosition
            | Self::InvalidSalary
            | Self::InvalidLastEvalId
            | Self::InvalidUpdate
            | Self::InvalidPageSize => 400,
            Self::NotFound => 404,
            Self::AlreadyExists => 409,
            Self::AddFailed | Self::ListFailed | Self::DeleteFailed | Self::UpdateFailed => 500,
        }
    }

    /// Returns `true` for errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }

    pub fn to_body(&self) -> ApiErrorBody {
        ApiErrorBody {
            code: self.code(),
            error_msg: self.to_string(),
        }
    }
}

/// JSON error body: `{"code":100010,"error_msg":"Provide a valid ID"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: u32,
    pub error_msg: String,
}

impl From<EmployeeError> for ApiErrorBody {
    fn from(err: EmployeeError) -> Self {
        err.to_body()
    }
}

/// Result alias for employee operations.
pub type EmployeeResult<T> = Result<T, EmployeeError>;
