// ABOUTME: Request tracing layer: one span per HTTP request carrying a request id
// ABOUTME: Reuses an incoming x-request-id header or generates a fresh one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header used to correlate requests across services
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory for HTTP requests
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map_or_else(
                || format!("req_{}", Uuid::new_v4().simple()),
                ToOwned::to_owned,
            );

        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Trace layer emitting a [`RequestSpan`] per request
#[must_use]
pub fn request_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http().make_span_with(RequestSpan)
}
