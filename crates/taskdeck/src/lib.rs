/*
[INPUT]:  Public API exports for the taskdeck crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point shared by the binary and tests
[UPDATE]: When adding new modules or public exports
*/

pub mod config;

// Re-export main types for convenience
pub use crate::config::{Labels, TaskdeckConfig, UiConfig};
