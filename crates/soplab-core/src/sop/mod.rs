//! SOP document model and view assembly
//!
//! [`model`] holds the typed document structure edited by the user;
//! [`view`] flattens it into the [`DataRecord`](crate::record::DataRecord)
//! consumed by the template engine, converting sequence fields to markup
//! fragments on the way.

pub mod model;
pub mod view;

pub use model::{ChangeHistoryEntry, FieldToggles, SectionToggles, SignOff, SopDocument};
pub use view::build_record;
