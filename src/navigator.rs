//! Navigation seam for the unauthorized-session handler. The HTTP client only
//! needs two things from its host: where the user currently is, and a way to
//! send them to a login page. Browser hosts wire this to the location API;
//! the CLI uses [`StaticNavigator`], which records nothing and goes nowhere.

use tracing::debug;

/// Host navigation surface consulted when a session is discarded.
pub trait Navigator: Send + Sync {
    /// Current location path, e.g. `/students` or `/student/dashboard`.
    fn current_path(&self) -> String;
    /// Requests navigation to `path`. Implementations may ignore this.
    fn redirect(&self, path: &str);
}

/// Picks the login route for the area the user was in when the session
/// expired: any path containing `/student` goes to the student login,
/// everything else to the admin login.
#[must_use]
pub fn login_route_for_path(path: &str) -> &'static str {
    if path.contains("/student") {
        "/student/login"
    } else {
        "/login"
    }
}

/// Navigator with a fixed path and no-op redirects, for non-browser hosts.
#[derive(Clone, Debug)]
pub struct StaticNavigator {
    path: String,
}

impl StaticNavigator {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StaticNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for StaticNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn redirect(&self, path: &str) {
        debug!("redirect requested: {path}");
    }
}
