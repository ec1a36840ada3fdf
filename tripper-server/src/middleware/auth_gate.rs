//! Navigation-time auth gate.
//!
//! Requests for a protected path without the session cookie are served the
//! login page instead. This is a rewrite, not a redirect: the browser keeps
//! the requested URL and the SPA decides where to go from there.

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, Uri, header},
    middleware::{self, Next},
    response::Response,
};
use cookie::Cookie;
use shared::{
    config::server::Config,
    gate::{GateDecision, GatePolicy},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::tracer;

#[derive(Clone, Debug)]
pub struct AuthGateState {
    policy: Arc<GatePolicy>,
    cookie_name: Arc<str>,
}

impl AuthGateState {
    pub fn new(policy: GatePolicy, cookie_name: &str) -> Self {
        Self {
            policy: Arc::new(policy),
            cookie_name: Arc::from(cookie_name),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(GatePolicy::from_config(&config.gate), &config.gate.cookie_name)
    }
}

pub async fn enforce_auth_gate(
    State(state): State<AuthGateState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = extract_cookie(request.headers(), &state.cookie_name);
    let path = request.uri().path().to_string();

    let decision = state.policy.decide(&path, token.as_deref());
    tracer::record_gate_decision(&decision);
    match decision {
        GateDecision::Allow => debug!(path = %path, "gate allowed request"),
        GateDecision::Rewrite { to } => match to.parse::<Uri>() {
            Ok(uri) => {
                info!(from = %path, to = %uri, "rewriting unauthenticated request");
                *request.uri_mut() = uri;
            }
            Err(err) => warn!(to = %to, error = %err, "gate login path is not a valid URI"),
        },
    }

    next.run(request).await
}

/// Wrap `router` so the gate runs before routing and a rewrite picks the
/// login route.
pub fn apply_auth_gate(router: Router, state: AuthGateState) -> Router {
    Router::new()
        .fallback_service(router)
        .layer(middleware::from_fn_with_state(state, enforce_auth_gate))
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .flatten()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}
