//! Modules d'export (JSON)

pub mod json;

pub use json::export_to_json;
