//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers never build hyper types. They return a [`Json`] value, an
//! [`ApiError`](crate::ApiError) or a `Result` of those, and
//! the dispatcher turns it into a [`Response`] through [`IntoResponse`].

use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::status::Status;

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response: a status, a few headers and an optional body.
///
/// ```rust
/// use posts::{Response, Status};
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::status(Status::BadRequest);
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Bytes,
    pub(crate) headers: Vec<(&'static str, &'static str)>,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` with `content-type: application/json`.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            headers: vec![("content-type", "application/json")],
            status: Status::Ok,
        }
    }

    /// Response with no body and no content type.
    pub fn status(code: Status) -> Self {
        Self { body: Bytes::new(), headers: Vec::new(), status: code }
    }

    pub fn status_code(&self) -> Status { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// Converts into the hyper-facing response. `content-length` is derived
    /// from the `Full` body by hyper itself.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status.into();
        for (name, value) in self.headers {
            res.headers_mut().insert(name, http::HeaderValue::from_static(value));
        }
        res
    }
}

// ── Json ─────────────────────────────────────────────────────────────────────

/// A serde-serializable value sent as a `200 OK` JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                error!("failed to serialize response body: {e}");
                Response::status(Status::InternalServerError)
            }
        }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// `Ok` and `Err` are converted independently, so a handler can return
/// `Result<Json<Post>, ApiError>` and use `?` on validation.
impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}
