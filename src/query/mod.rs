//! Query Module
//!
//! Sort and search over an in-memory copy of the record set.
//!
//! ## Responsibilities
//! - Partition-based sort keyed by a caller-chosen selector
//! - Binary search over a sequence already sorted by the same selector
//! - Typed field selection for keys chosen at runtime
//!
//! Neither operation mutates its input. Records are read, never changed.
//!
//! ## Flow
//! ```text
//!   RecordStore::list_all()
//!            │
//!            ▼
//!   sort_by(records, key) ──► Vec<T> (ascending by key)
//!            │
//!            ▼
//!   search(sorted, target, key) ──► Option<(position, &T)>
//! ```

mod field;
mod search;
mod sort;

pub use field::{Field, FieldValue};
pub use search::search;
pub use sort::sort_by;
