//! Rhombus API access
//!
//! This module defines the capability interface over the remote service
//! ([`RhombusProvider`]) and its reqwest-backed implementation
//! ([`RhombusClient`]). Everything else in the crate talks to the service
//! through the trait, so tests substitute a double without any transport.

pub mod client;

pub use client::{RhombusClient, RhombusProvider};
