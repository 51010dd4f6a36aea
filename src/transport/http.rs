//! Wire-level request and response values, and the transport seam.

use bytes::Bytes;

use super::HttpError;

/// A fully resolved request, ready to hand to a transport.
///
/// Built by [`Client::new_request`](crate::api::Client::new_request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: url::Url,
    pub headers: http::HeaderMap,
    /// JSON payload; `None` sends an empty body
    pub body: Option<Vec<u8>>,
}

/// What came back from the server.
///
/// The body is buffered in full. Dropping the response releases it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: http::StatusCode,
    pub body: Bytes,
}

/// Anything that can carry an [`HttpRequest`] to a server and bring back
/// an [`HttpResponse`].
///
/// Connection pooling, TLS, redirects, proxies, timeouts and authentication
/// all belong to the implementation. Concurrent use is safe exactly when the
/// implementation says so; the `Send + Sync` bound only lets a
/// [`Client`](crate::api::Client) be shared across tasks.
pub trait HttpClient: Send + Sync {
    /// Sends `req` and waits for the complete response.
    ///
    /// A non-2xx status is still `Ok`; only failures to obtain a response
    /// are errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response could be obtained.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
