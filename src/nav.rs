//! Navigation capability for the forced-login redirect.
//!
//! When the server rejects the stored credential the client redirects the
//! host UI to the login view. The sink is injected so headless callers and
//! tests can observe or ignore the redirect.

use tracing::debug;

/// Path of the login view
pub const LOGIN_PATH: &str = "/login";

/// Accepts navigation targets on behalf of the host environment.
pub trait NavigationSink: Send + Sync {
    /// Current navigation path, used to suppress redirect loops
    fn current_path(&self) -> String;

    /// Direct the host to the given path
    fn navigate(&self, path: &str);
}

/// Sink for headless use: reports the root path and drops navigation.
#[derive(Debug, Default)]
pub struct NullSink;

impl NavigationSink for NullSink {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn navigate(&self, path: &str) {
        debug!(path, "navigation ignored (headless)");
    }
}
