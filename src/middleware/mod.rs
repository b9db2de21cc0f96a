// ABOUTME: HTTP middleware for request tracing and CORS
// ABOUTME: Layers applied once around the merged router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Per-request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{request_trace_layer, RequestSpan, REQUEST_ID_HEADER};
