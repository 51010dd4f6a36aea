//! Application execution logic.
//!
//! Builds the requested API call, sends it, and hands back the decoded
//! response body when it was asked for.

use thiserror::Error;

use createsend::api::{Client, Error as ApiError, NO_BODY};
use createsend::config::ApiCall;
use createsend::transport::{HttpClient, HttpRequest};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call could not be built or did not succeed.
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),
}

/// Sends `call` through `client`.
///
/// Returns the decoded JSON response body when `call.print_body` is set,
/// `None` otherwise.
///
/// # Errors
///
/// Returns [`RunError::Api`] if the request cannot be built, the transport
/// fails, the status is not 2xx, or a requested body is not JSON.
pub async fn execute<H: HttpClient>(
    client: &Client<H>,
    call: &ApiCall,
) -> Result<Option<serde_json::Value>, RunError> {
    let request = build_request(client, call)?;

    if call.print_body {
        let body = client.execute_json(request).await?;
        return Ok(Some(body));
    }

    client.execute(request).await?;
    Ok(None)
}

fn build_request<H>(client: &Client<H>, call: &ApiCall) -> Result<HttpRequest, ApiError> {
    match &call.body {
        Some(body) => client.new_request(&call.method, &call.path, Some(body)),
        None => client.new_request(&call.method, &call.path, NO_BODY),
    }
}
