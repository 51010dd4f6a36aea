//! Campaign Monitor API client.
//!
//! [`Client`] resolves API paths against a base URL, encodes request bodies
//! as JSON, stamps every request with a `User-Agent` and classifies
//! responses by status code. The HTTP I/O itself is delegated to a shared
//! [`HttpClient`](crate::transport::HttpClient) transport.

mod client;
mod error;


pub use client::{
    Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, LIBRARY_VERSION, NO_BODY, USER_AGENT,
};
pub use error::{Error, PathError};
