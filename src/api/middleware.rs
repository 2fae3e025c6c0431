//! Middleware chain applied around each transport call.
//!
//! Request hooks run in order against the outgoing header set before the
//! request is sent; response hooks observe the response status (in order)
//! before any error is raised to the caller. Hooks carry the cross-cutting
//! behaviors: credential injection and the session-expiry redirect.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::ApiError;
use crate::auth::Session;
use crate::nav::{NavigationSink, LOGIN_PATH};

/// Transform applied to the outgoing headers before the request is sent.
/// An error here rejects the request; nothing is sent.
pub trait RequestHook: Send + Sync {
    fn apply(&self, headers: &mut HeaderMap) -> Result<(), ApiError>;
}

/// Observer run against the response status before errors propagate.
/// Hooks must not block and cannot alter the response.
pub trait ResponseHook: Send + Sync {
    fn observe(&self, status: StatusCode);
}

/// Injects `Authorization: Bearer <token>` when a credential is stored.
/// Requests without a stored credential are sent unmodified.
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RequestHook for BearerAuth {
    fn apply(&self, headers: &mut HeaderMap) -> Result<(), ApiError> {
        if let Some(token) = self.session.token() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(())
    }
}

/// Clears the stored session on a 401 and redirects to the login view,
/// unless the host is already there. Other statuses pass through untouched.
pub struct ExpiryGuard {
    session: Session,
    nav: Arc<dyn NavigationSink>,
}

impl ExpiryGuard {
    pub fn new(session: Session, nav: Arc<dyn NavigationSink>) -> Self {
        Self { session, nav }
    }
}

impl ResponseHook for ExpiryGuard {
    fn observe(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }

        warn!("authorization rejected by server, clearing stored session");
        self.session.clear();

        let current = self.nav.current_path();
        if current.contains(LOGIN_PATH) {
            debug!(%current, "already on login view, skipping redirect");
        } else {
            self.nav.navigate(LOGIN_PATH);
        }
    }
}
