//! Repository contract layer.
//!
//! # Responsibility
//! - Define the optional data-access method catalog conforming backends
//!   implement.
//! - Define the shared error vocabulary (`NotFound`, `Conflict`, ...) those
//!   backends report through.
//!
//! # Invariants
//! - This layer carries no storage behavior; every method body here only
//!   reports `Unsupported`.
//! - Absence on write paths is reported as `NotFound`, not masked.

pub mod record_repo;
