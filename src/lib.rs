//! caselink - client library for the case-tutoring chat backend.
//!
//! Wraps a configured HTTP transport with three behaviors: bearer
//! credential injection from an injectable store, forced redirect to the
//! login view when the server rejects the credential, and typed methods
//! for the fixed set of auth and chat endpoints.
//!
//! ```no_run
//! use std::sync::Arc;
//! use caselink::{ApiClient, Config, MemoryStore, NullSink};
//!
//! # async fn run() -> Result<(), caselink::ApiError> {
//! let client = ApiClient::new(
//!     &Config::from_env(),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(NullSink),
//! )?;
//! let login = client.login("s123", "secret").await?;
//! let reply = client.send_message("What does the biopsy show?", "caseA").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod nav;

pub use api::{ApiClient, ApiError};
pub use auth::{MemoryStore, Session, SessionData, TokenStore};
pub use config::Config;
pub use nav::{NavigationSink, NullSink, LOGIN_PATH};
