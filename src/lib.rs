//! Response helpers for serverless HTTP handlers
//!
//! A [`ResHandler`] is created once with default headers and then builds
//! `{headers, statusCode, body}` envelopes for an HTTP gateway integration:
//! JSON envelopes with [`ResHandler::json`], HTML envelopes with
//! [`ResHandler::html`].
//!
//! ```
//! use res_handler::{Headers, ResHandler};
//! use serde_json::json;
//!
//! let mut defaults = Headers::new();
//! defaults.insert("Access-Control-Allow-Origin".into(), json!("*"));
//! let send_res = ResHandler::new(defaults);
//!
//! let res = send_res
//!     .json(None, Some(&json!({"hello": "world"})), None)
//!     .unwrap();
//! assert_eq!(res.status_code, 200);
//! assert_eq!(res.body.as_deref(), Some(r#"{"hello":"world"}"#));
//!
//! let page = send_res.html(None, Some("<div>Hello world!</div>"), None);
//! assert_eq!(page.headers["Content-Type"], "text/html");
//! ```

pub mod config;
pub mod envelope;
pub mod handler;
pub mod http;
pub mod logger;

pub use crate::config::{HandlerConfig, LoggingConfig};
pub use crate::envelope::{merge_headers, Headers, ResponseEnvelope, DEFAULT_STATUS_CODE};
pub use crate::handler::ResHandler;
