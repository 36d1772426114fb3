//! Chilean RUT validation and the registration rules built on it.
//!
//! - [`rut`] -- the Module-11 check-digit predicate and the [`rut::Rut`] value type.
//! - [`validation`] -- server-side rules and request DTOs (`validator` integration).
//! - [`form`] -- client-side registration form state, re-validated on every edit.
//! - [`config`] -- environment-driven validation settings.

pub mod config;
pub mod error;
pub mod form;
pub mod rut;
pub mod validation;
