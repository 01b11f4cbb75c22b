//! Error handling for media access operations
//!
//! This module defines the error types used throughout the crate.

pub mod types;

pub use types::{Error, Result};
