//! Insertion-ordered key-value storage for Roster.
//!
//! The store maps a hashable key to an opaque value and remembers the order
//! in which keys were first inserted. Lookups are O(1); forward scans resume
//! from any live key (keyset pagination), so a caller can walk the whole
//! store one page at a time without holding anything between calls.
//!
//! # Storage Backends
//!
//! All backends implement the [`OrderedStore`] trait:
//!
//! - [`InMemoryOrderedStore`] -- `HashMap` + sequence index behind one `RwLock`
//!
//! # Design Rules
//!
//! 1. `set` never overwrites; `update` never inserts.
//! 2. Updates keep the key's position; deletes drop it for good.
//! 3. A key re-inserted after deletion lands at the tail.
//! 4. Every operation is atomic on its own; sequences of calls are not.
//! 5. The store never logs and never retries.

pub mod error;
pub mod memory;
pub mod page;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryOrderedStore;
pub use page::Page;
pub use traits::OrderedStore;
