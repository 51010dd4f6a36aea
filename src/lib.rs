//! createsend: a minimal Campaign Monitor API client
//!
//! Builds JSON requests against the Campaign Monitor v3 REST API and
//! classifies responses by status code, over a pluggable HTTP transport.

pub mod api;
pub mod config;
pub mod transport;

pub use api::{Client, Error, NO_BODY};
