//! Tests for the transport value types and trait.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn request(method: http::Method, body: Option<&[u8]>) -> HttpRequest {
    HttpRequest {
        method,
        url: url::Url::parse("https://api.createsend.com/api/v3/lists.json").unwrap(),
        headers: http::HeaderMap::new(),
        body: body.map(<[u8]>::to_vec),
    }
}

mod values {
    use super::*;

    #[test]
    fn requests_compare_by_every_field() {
        let a = request(http::Method::POST, Some(b"{}"));

        assert_eq!(a, a.clone());
        assert_ne!(a, request(http::Method::PUT, Some(b"{}")));
        assert_ne!(a, request(http::Method::POST, None));
    }

    #[test]
    fn response_clone_shares_body_buffer() {
        let resp = HttpResponse {
            status: http::StatusCode::OK,
            body: bytes::Bytes::from_static(b"[]"),
        };
        let copy = resp.clone();

        assert_eq!(copy.status, http::StatusCode::OK);
        assert_eq!(copy.body.as_ptr(), resp.body.as_ptr());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("connection refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("connection refused")
        );
    }

    #[test]
    fn timeout_has_no_source() {
        let error = HttpError::Timeout;

        assert_eq!(error.to_string(), "Request timed out");
        assert!(error.source().is_none());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Mutex;

    /// Echoes the request body back with a fixed status.
    struct EchoClient {
        status: http::StatusCode,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl HttpClient for EchoClient {
        async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            let body = req.body.clone().unwrap_or_default();
            self.seen.lock().unwrap().push(req);
            Ok(HttpResponse {
                status: self.status,
                body: body.into(),
            })
        }
    }

    #[tokio::test]
    async fn implementations_receive_the_request_unchanged() {
        let client = EchoClient {
            status: http::StatusCode::ACCEPTED,
            seen: Mutex::new(Vec::new()),
        };
        let req = request(http::Method::POST, Some(br#"{"Title":"x"}"#));

        let resp = client.request(req.clone()).await.unwrap();

        assert_eq!(resp.status, http::StatusCode::ACCEPTED);
        assert_eq!(&resp.body[..], br#"{"Title":"x"}"#);
        assert_eq!(client.seen.lock().unwrap().as_slice(), &[req]);
    }
}
