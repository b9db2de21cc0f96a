// ABOUTME: Unified error handling for the companion service
// ABOUTME: Re-exports the core error system so routes and domain code share one AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types shared by every layer of the service
//!
//! The error system lives in `companion-core`; this module re-exports it so
//! callers can write `crate::errors::AppError` regardless of where a type is
//! defined. `AppError` implements `IntoResponse` (via the `http-response`
//! feature) and renders as an [`ErrorResponse`] JSON body.

pub use companion_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
