//! Core data models
//!
//! The saved `Budget` record, the three allocation categories, and the
//! clamping rule that keeps their sum under the cap.

pub mod allocation;
pub mod budget;
pub mod field;

pub use allocation::clamp_allocation;
pub use budget::{parse_collection, serialize_collection, Budget};
pub use field::Field;
