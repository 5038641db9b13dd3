//! HTTP response conversion module
//!
//! Turns a gateway envelope into a hyper response, for callers that hand
//! envelopes to a hyper-based transport instead of a gateway integration.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::Response;
use serde_json::Value;

use crate::envelope::{Headers, ResponseEnvelope};
use crate::logger;

impl<B: Into<Bytes>> ResponseEnvelope<B> {
    /// Build a hyper response carrying the same status, headers and body
    ///
    /// Status codes outside 100-999 and illegal header names or values are
    /// rejected here; the envelope builder itself never checks them.
    pub fn into_response(self) -> Result<Response<Full<Bytes>>, hyper::http::Error> {
        let status = self.status_code;
        self.build_response().inspect_err(|e| {
            log_build_error(status, e);
        })
    }

    fn build_response(self) -> Result<Response<Full<Bytes>>, hyper::http::Error> {
        let headers = header_map(&self.headers)?;
        let body = self.body.map(Into::into).unwrap_or_default();

        let mut response = Response::builder()
            .status(self.status_code)
            .body(Full::new(body))?;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Convert envelope headers into a hyper header map
///
/// Names are case-insensitive here: when two envelope keys differ only in
/// case, the one inserted last replaces the other.
fn header_map(headers: &Headers) -> Result<HeaderMap, hyper::http::Error> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())?;
        let header_value = HeaderValue::from_str(&header_value_text(name, value))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Render an opaque header value as header text
///
/// Strings are used verbatim, anything else as its JSON text.
fn header_value_text(name: &str, value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            logger::log_warning(&format!(
                "Header {name} has a non-scalar value, sending it as JSON text"
            ));
            value.to_string()
        }
    }
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
