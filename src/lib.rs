pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod sanitize;
pub mod state;

// Re-export core types for convenience
pub use specter_core::{ScanReport, VulnLabel};
