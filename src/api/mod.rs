//! REST API client module for the case-tutoring backend.
//!
//! This module provides the `ApiClient` for the auth and chat endpoints,
//! the middleware hooks applied around each request, and the error
//! taxonomy surfaced to callers.
//!
//! The API uses JWT bearer token authentication; the credential is read
//! from the injected store on every outgoing request.

pub mod client;
pub mod error;
pub mod middleware;

pub use client::ApiClient;
pub use error::ApiError;
pub use middleware::{BearerAuth, ExpiryGuard, RequestHook, ResponseHook};
