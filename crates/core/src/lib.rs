//! Shared types and configuration for the ventas load jobs.

pub mod config;
pub mod error;
pub mod load_mode;
pub mod types;
