//! Console session handling.
//!
//! # Purpose
//! Groups the cookie session provider, the route guard middleware, and the
//! login/logout handlers that create and destroy sessions.
pub mod guard;
pub mod login;
pub mod session;
