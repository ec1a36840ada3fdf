//! Request spans for the SPA host.
//!
//! Every request gets one `http_request` span carrying its request id. The
//! auth gate records its decision on that span, so a rewritten request logs
//! both the path the browser asked for and the one actually served.

use axum::{
    body::Body,
    http::{Request, Response},
};
use shared::gate::GateDecision;
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, MakeSpan, TraceLayer};
use tracing::{Span, debug, error, field, info};

use crate::middleware::request_context::RequestContext;

type TraceLayerType = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RequestSpan,
    fn(&Request<Body>, &Span),
    fn(&Response<Body>, Duration, &Span),
    DefaultOnBodyChunk,
    DefaultOnEos,
    fn(ServerErrorsFailureClass, Duration, &Span),
>;

/// Builds the per-request span. `gate` and `served_path` stay empty until the
/// auth gate runs.
#[derive(Clone, Default)]
pub(crate) struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .extensions()
            .get::<RequestContext>()
            .map_or("n/a", |ctx| ctx.request_id.as_str());

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
            gate = field::Empty,
            served_path = field::Empty,
        )
    }
}

/// Label recorded in the span's `gate` field.
pub(crate) fn gate_outcome(decision: &GateDecision) -> &'static str {
    match decision {
        GateDecision::Allow => "allow",
        GateDecision::Rewrite { .. } => "rewrite",
    }
}

/// Record `decision` on the current request span.
pub(crate) fn record_gate_decision(decision: &GateDecision) {
    let span = Span::current();
    span.record("gate", gate_outcome(decision));
    if let GateDecision::Rewrite { to } = decision {
        span.record("served_path", to.as_str());
    }
}

pub(crate) fn on_request_handler(request: &Request<Body>, _span: &Span) {
    debug!(
        has_cookie = request.headers().contains_key(axum::http::header::COOKIE),
        "request received"
    );
}

pub(crate) fn on_response_handler(response: &Response<Body>, latency: Duration, _span: &Span) {
    info!(
        status = response.status().as_u16(),
        latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
        "request served"
    );
}

pub(crate) fn on_failure_handler(error: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    error!(error = %error, latency = ?latency, "request failed");
}

/// Trace layer for the whole router.
pub fn create_trace_layer() -> TraceLayerType {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(on_request_handler as fn(&Request<Body>, &Span))
        .on_response(on_response_handler as fn(&Response<Body>, Duration, &Span))
        .on_failure(on_failure_handler as fn(ServerErrorsFailureClass, Duration, &Span))
}
