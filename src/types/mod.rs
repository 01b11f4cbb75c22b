//! Type definitions for media access
//!
//! This module contains the data structures exchanged with the Rhombus API
//! and the connection-type selector shared by the fetcher functions.

pub mod connection;
pub mod request;
pub mod response;

pub use connection::ConnectionType;
pub use request::{GenerateFederatedSessionTokenRequest, GetMediaUrisRequest};
pub use response::{FederatedSessionTokenResponse, MediaUrisResponse};
