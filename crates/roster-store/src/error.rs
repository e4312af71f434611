/// Errors from ordered store operations.
///
/// None of these are transient: each one reflects caller misuse or a
/// legitimately missing key, so retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// `set` was called for a key that is already stored.
    #[error("key already present")]
    KeyAlreadyPresent,

    /// `update` or `delete` was called for a key that is not stored.
    #[error("key absent")]
    KeyAbsent,

    /// `page` was given a cursor that does not name a live entry.
    #[error("invalid last evaluated key")]
    InvalidCursor,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
