//! Member record types for the roster admin dashboard.
//!
//! This crate provides the data model shared by every other roster crate:
//! - [`RecordId`]: stable integer identifier of a member
//! - [`Record`]: one member row (id, name, email, role)
//! - [`RecordField`]: the columns a record exposes to search and editing
//! - [`ensure_unique_ids`]: the collection-level uniqueness check
//!
//! # Example
//!
//! ```
//! use roster_model::{Record, RecordField, RecordId};
//!
//! let mut record = Record::new(RecordId::new(7), "Aaron Miles", "aaron@mailinator.com", "member");
//! assert_eq!(record.field_text(RecordField::Id), "7");
//!
//! assert!(record.set_field(RecordField::Role, "admin"));
//! assert_eq!(record.role, "admin");
//! ```

pub mod error;
pub mod field;
pub mod ids;
pub mod record;

pub use error::{ModelError, Result};
pub use field::RecordField;
pub use ids::RecordId;
pub use record::{Record, ensure_unique_ids};
