//! Response handler module
//!
//! `ResHandler` captures a set of default headers once and builds JSON and
//! HTML response envelopes from them.

use serde::Serialize;
use serde_json::Value;

use crate::config::HandlerConfig;
use crate::envelope::{merge_headers, Headers, ResponseEnvelope, DEFAULT_STATUS_CODE};

/// Name of the header forced onto every HTML envelope
pub const CONTENT_TYPE: &str = "Content-Type";

/// Value forced into `Content-Type` on every HTML envelope
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// Builder for gateway response envelopes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResHandler {
    default_headers: Headers,
}

impl ResHandler {
    /// Create a handler that sends `default_headers` with every response
    pub const fn new(default_headers: Headers) -> Self {
        Self { default_headers }
    }

    /// Create a handler from the `default_headers` of a loaded config
    pub fn from_config(config: &HandlerConfig) -> Self {
        Self::new(config.default_headers.clone())
    }

    pub const fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    /// Build a JSON envelope
    ///
    /// `body` is encoded with `serde_json`; an encoding failure is returned
    /// untouched. A missing body leaves the envelope body empty.
    pub fn json<T>(
        &self,
        status_code: Option<u16>,
        body: Option<&T>,
        headers: Option<&Headers>,
    ) -> Result<ResponseEnvelope, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_string).transpose()?;

        Ok(ResponseEnvelope {
            headers: merge_headers(&self.default_headers, headers),
            status_code: status_code.unwrap_or(DEFAULT_STATUS_CODE),
            body,
        })
    }

    /// Build an HTML envelope
    ///
    /// The body is passed through as-is. `Content-Type: text/html` is set
    /// after merging, so neither defaults nor `headers` can replace it; any
    /// other spelling of the name (`content-type`, ...) is dropped first.
    pub fn html<B>(
        &self,
        status_code: Option<u16>,
        body: Option<B>,
        headers: Option<&Headers>,
    ) -> ResponseEnvelope<B> {
        let mut merged = merge_headers(&self.default_headers, headers);
        merged.retain(|name, _| !name.eq_ignore_ascii_case(CONTENT_TYPE));
        merged.insert(
            CONTENT_TYPE.to_string(),
            Value::String(HTML_CONTENT_TYPE.to_string()),
        );

        ResponseEnvelope {
            headers: merged,
            status_code: status_code.unwrap_or(DEFAULT_STATUS_CODE),
            body,
        }
    }
}
