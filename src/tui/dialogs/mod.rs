//! Dialog overlays

pub mod confirm;
pub mod help;
