//! Perceive console service library crate.
//!
//! # Purpose
//! Exposes the console HTTP surface, session handling, configuration and
//! user directory for use by the binary and tests.
//!
//! # Notes
//! Access decisions are delegated to `perceive_authz`; this crate only
//! resolves principals and renders decisions as HTTP.
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod directory;
pub mod observability;
