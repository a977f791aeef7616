//! # IO Module
//!
//! Adapter layer between the web app and the domain logic. Translates HTTP
//! requests into provider/store operations and domain results into JSON.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: access code resolution, config lookup and publish,
//!   session load/clear, app shell and variation styles
//! - **Error Translation**: `NoCachedConfig` becomes 404, storage failures 500
//! - **Client Logging**: renderer-side log lines are forwarded into `tracing`
//!
//! Handlers are plain async functions taking [`crate::AppState`] through the
//! Axum `State` extractor; routing lives in [`crate::create_router`].

pub mod rest;

pub use rest::*;
