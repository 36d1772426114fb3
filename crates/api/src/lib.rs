//! Request validation layer for the registration API.
//!
//! Provides the pieces an Axum router mounts in front of its handlers:
//! shared state, the [`extract::ValidatedJson`] extractor that runs the
//! `ucn_core` rules before a handler sees the payload, and the JSON error
//! responses produced when it refuses one.

pub mod error;
pub mod extract;
pub mod response;
pub mod state;
