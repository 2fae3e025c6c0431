//! Authentication state management.
//!
//! This module provides:
//! - `TokenStore`: injectable key-value storage for the bearer credential
//! - `MemoryStore`: in-process store backed by a mutex-guarded map
//! - `Session`: reads and writes the credential and identity keys together
//!
//! The three session keys are always written and cleared as a unit.

pub mod session;
pub mod store;

pub use session::{Session, SessionData};
pub use store::{MemoryStore, TokenStore};
