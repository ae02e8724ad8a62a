//! HTTP communication layer for banco Inter's REST API.
//!
//! Everything that touches the wire lives here: mutual-TLS client setup,
//! OAuth2 token caching and the per-operation request methods.

mod client;

pub use client::InterClient;
