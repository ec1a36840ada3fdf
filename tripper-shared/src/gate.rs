//! Navigation-time auth gate.
//!
//! The same policy is evaluated by the server middleware (against the `token`
//! cookie) and by the SPA router (against the session store), so both sides
//! agree on which paths require a session and where visitors without one end
//! up.

use serde::{Deserialize, Serialize};

/// Default protected path prefixes.
pub const DEFAULT_PROTECTED_PATHS: [&str; 3] = ["/dashboard", "/admin", "/member"];
/// Default path unauthenticated requests are rewritten to.
pub const DEFAULT_GATE_LOGIN_PATH: &str = "/auth/login";
/// Default cookie carrying the session token.
pub const DEFAULT_TOKEN_COOKIE: &str = "token";

/// Serializable gate settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Path prefixes that require a session.
    pub protected_paths: Vec<String>,
    /// Where unauthenticated requests are rewritten to.
    pub login_path: String,
    /// Cookie inspected by the server-side gate.
    pub cookie_name: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_paths: DEFAULT_PROTECTED_PATHS
                .iter()
                .map(ToString::to_string)
                .collect(),
            login_path: DEFAULT_GATE_LOGIN_PATH.to_string(),
            cookie_name: DEFAULT_TOKEN_COOKIE.to_string(),
        }
    }
}

/// Outcome of running the gate for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the navigation through unchanged.
    Allow,
    /// Serve the given path instead of the requested one.
    Rewrite {
        /// Replacement path.
        to: String,
    },
}

/// Compiled gate policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePolicy {
    protected: Vec<String>,
    login_path: String,
}

impl GatePolicy {
    /// Build a policy from explicit prefixes and a login path.
    ///
    /// Trailing slashes are dropped from prefixes so `/admin/` and `/admin`
    /// behave the same; empty prefixes are ignored.
    #[must_use]
    pub fn new<I, S>(protected: I, login_path: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let protected = protected
            .into_iter()
            .map(|prefix| normalize(prefix.as_ref()))
            .filter(|prefix| prefix != "/")
            .collect();
        Self {
            protected,
            login_path: login_path.into(),
        }
    }

    /// Build a policy from its serialized settings.
    #[must_use]
    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(&config.protected_paths, config.login_path.clone())
    }

    /// Protected prefixes, normalized.
    #[must_use]
    pub fn protected_paths(&self) -> &[String] {
        &self.protected
    }

    /// Whether `path` falls under one of the protected prefixes.
    ///
    /// Matching is segment-aware: `/admin` covers `/admin` and `/admin/users`
    /// but not `/administrator`. The login path is never protected.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        let path = normalize(path);
        if path == normalize(&self.login_path) {
            return false;
        }
        self.protected.iter().any(|prefix| {
            path == *prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Decide what happens to a navigation to `path` given the token visible
    /// to the caller. An empty token counts as absent.
    #[must_use]
    pub fn decide(&self, path: &str, token: Option<&str>) -> GateDecision {
        let has_token = token.is_some_and(|token| !token.trim().is_empty());
        if has_token || !self.is_protected(path) {
            GateDecision::Allow
        } else {
            GateDecision::Rewrite {
                to: self.login_path.clone(),
            }
        }
    }
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self::from_config(&GateConfig::default())
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
