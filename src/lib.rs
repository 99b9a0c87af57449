//! # Launch Records Dashboard Backend
//!
//! Backend for a single-page dashboard over historical launch-vehicle data.
//! The process loads a fixed CSV of launch records once at startup, derives
//! payload bounds, and exposes two interactive controls (launch-site
//! selector, payload-mass range) wired to two chart aggregations (success
//! pie, payload/outcome scatter) through an Axum REST API consumed by the
//! browser frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Typed domain structs for launch records
//! - [`parsing`]: CSV ingestion via Polars with load-time validation
//! - [`store`]: Immutable in-memory dataset store and load errors
//! - [`controls`]: Interactive control definitions and their value domains
//! - [`services`]: Pure aggregation functions producing chart data
//! - [`routes`]: Chart DTO types for API responses
//! - [`binding`]: Control-to-chart dependency wiring and recomputation
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Data flow
//!
//! The dataset store is read-only input to the aggregation functions. A
//! control change enters through the HTTP layer, updates the control state,
//! and synchronously re-invokes only the aggregations bound to that control,
//! producing fresh chart descriptions for the frontend to render.

pub mod api;

pub mod binding;
pub mod config;
pub mod controls;
pub mod models;
pub mod parsing;

pub mod routes;

pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
