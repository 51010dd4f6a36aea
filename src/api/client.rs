//! The API client: request construction and response classification.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use http::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{Error, PathError};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

/// Version of this library, as reported in the `User-Agent` header.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent with every request unless overridden.
pub const USER_AGENT: &str = concat!("createsend-go/", env!("CARGO_PKG_VERSION"));

/// Root of the public Campaign Monitor v3 API.
///
/// The trailing slash matters: relative paths replace the segment after the
/// last `/`, so `clients.json` resolves to `.../api/v3/clients.json`.
pub const DEFAULT_BASE_URL: &str = "https://api.createsend.com/api/v3/";

/// Request timeout used by [`ClientConfig::default`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A typed "no body" argument for [`Client::new_request`].
pub const NO_BODY: Option<&()> = None;

const JSON_CONTENT_TYPE: &str = "application/json";

static DEFAULT_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
});

fn default_base_url() -> Url {
    DEFAULT_BASE.clone()
}

/// Settings for a client backed by the production transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all request paths are resolved against
    pub base_url: Url,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Per-request timeout enforced by the transport
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the Campaign Monitor API.
///
/// Holds only fixed configuration: a shared transport, the base URL and the
/// user agent. Every call is independent, so a `Client` can be used from
/// many tasks at once whenever its transport can.
///
/// # Type Parameters
///
/// - `H`: The HTTP transport (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use createsend::api::{Client, NO_BODY};
///
/// # async fn example() -> Result<(), createsend::api::Error> {
/// let client = Client::new();
/// let request = client.new_request("GET", "systemdate.json", NO_BODY)?;
/// client.execute(request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<H = ReqwestClient> {
    transport: Arc<H>,

    /// Base URL for API requests. Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: Url,

    /// `User-Agent` sent with every request. Defaults to [`USER_AGENT`].
    pub user_agent: String,
}

impl<H> Clone for Client<H> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Client<ReqwestClient> {
    /// Creates a client over a default [`ReqwestClient`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestClient::new()))
    }

    /// Creates a client over a [`ReqwestClient`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying reqwest client
    /// cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestClient::with_timeout(config.timeout)?;

        Ok(Self {
            transport: Arc::new(transport),
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

impl Default for Client<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Client<H> {
    /// Creates a client over a caller-supplied transport.
    ///
    /// The transport is shared, not owned: the same `Arc` can back any
    /// number of clients. To call endpoints that need authentication,
    /// supply a transport that authenticates requests for you.
    #[must_use]
    pub fn with_transport(transport: Arc<H>) -> Self {
        Self {
            transport,
            base_url: default_base_url(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Creates an API request.
    ///
    /// An empty `method` means `GET`.
    ///
    /// `path` is resolved against [`base_url`](Self::base_url) using
    /// standard URL reference resolution. Relative paths should be given
    /// without a leading slash; `/clients.json` resolves against the host
    /// root instead. An absolute URL replaces the base entirely.
    ///
    /// If `body` is `Some`, its JSON encoding becomes the request payload
    /// and `Content-Type: application/json` is set. Pass [`NO_BODY`] for an
    /// empty payload.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] if `path` contains a control character or a
    ///   malformed `%` escape, or is otherwise not a valid URL reference
    /// - [`Error::Serialization`] if `body` cannot be encoded as JSON
    /// - [`Error::RequestConstruction`] if `method` is not a valid HTTP
    ///   method, the resolved URL is not `http`/`https`, or the user agent
    ///   is not a valid header value
    pub fn new_request<B>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, Error>
    where
        B: Serialize + ?Sized,
    {
        check_path(path)?;
        let url = self.base_url.join(path).map_err(PathError::from)?;

        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(Error::Serialization)?;

        let method = if method.is_empty() {
            http::Method::GET
        } else {
            http::Method::from_bytes(method.as_bytes()).map_err(|e| {
                Error::RequestConstruction(format!("invalid method '{method}': {e}"))
            })?
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::RequestConstruction(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        let user_agent = HeaderValue::from_str(&self.user_agent).map_err(|e| {
            Error::RequestConstruction(format!("invalid user agent '{}': {e}", self.user_agent))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, user_agent);
        if payload.is_some() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            );
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body: payload,
        })
    }
}

impl<H: HttpClient> Client<H> {
    /// Sends an API request and reports whether it succeeded.
    ///
    /// The response body is discarded and its buffer released before this
    /// returns, on every path. Use [`execute_json`](Self::execute_json) when
    /// the response data is needed.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if no response was received
    /// - [`Error::HttpStatus`] if the status is outside 200..300
    pub async fn execute(&self, request: HttpRequest) -> Result<(), Error> {
        let response = self.send(request).await?;
        check_status(&response)
    }

    /// Sends an API request and decodes the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), plus [`Error::Decode`] if a
    /// successful response body is not valid JSON for `T`.
    pub async fn execute_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, Error> {
        let response = self.send(request).await?;
        check_status(&response)?;
        serde_json::from_slice(&response.body).map_err(Error::Decode)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending API request");

        let response = self.transport.request(request).await?;

        tracing::trace!(status = response.status.as_u16(), "Received API response");
        Ok(response)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), Error> {
    if response.status.is_success() {
        return Ok(());
    }

    Err(Error::HttpStatus {
        status: response.status.as_u16(),
    })
}

/// Rejects what `Url::join` would silently repair: raw control characters
/// (it strips tabs and newlines) and `%` not followed by two hex digits.
fn check_path(path: &str) -> Result<(), PathError> {
    if path.bytes().any(|b| b.is_ascii_control()) {
        return Err(PathError::ControlCharacter);
    }

    let bytes = path.as_bytes();
    for (i, _) in path.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            let end = (i + 3).min(path.len());
            let shown = path.get(i..end).unwrap_or(&path[i..]);
            return Err(PathError::InvalidEscape(shown.to_string()));
        }
    }

    Ok(())
}
