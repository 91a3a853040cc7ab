//! Typed client for the GrandView platform REST API.
//!
//! One async function per backend operation, grouped by endpoint area under
//! [`api`], all going through a single request helper on [`ApiClient`] that
//! injects the session token, decodes bodies defensively, and normalizes
//! server error messages into [`ApiError`].

pub mod api;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod math;
pub mod models;
pub mod response;
pub mod session;
pub mod tracking;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};
