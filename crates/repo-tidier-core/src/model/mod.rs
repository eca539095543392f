//! Data model for scan results.
//!
//! A scan is a flat `Vec<FileRecord>`; nothing links records together.
pub mod file_record;
pub mod size;

pub use file_record::{extension_of, normalise_extension, FileRecord, NO_EXTENSION};
