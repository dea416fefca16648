//! Row types for the sales tables.

pub mod sale;
