//! crs-relate core - Domain models, process metadata, ports, and configuration
//!
//! This crate contains the domain types and port definitions shared by the
//! geometry engine and the command-line adapter.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{RelateError, Result};
