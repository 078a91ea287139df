// ABOUTME: Library root for dockman - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod daemon;
pub mod error;
pub mod manager;
pub mod output;
pub mod transport;
pub mod types;
