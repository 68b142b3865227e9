//! HTTP client module
//!
//! Provides the HTTP client shared by the remote API client and the
//! thumbnail probe.
//!
//! # Features
//!
//! - **Bearer Authentication**: Token attached to every request
//! - **Status Mapping**: Non-success responses become `Error::HttpStatus`
//! - **HEAD Probes**: Metadata-only requests that surface the raw status

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
