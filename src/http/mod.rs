//! HTTP protocol layer module
//!
//! Bridges gateway envelopes to hyper types.

pub mod response;
