//! Service contract layer.
//!
//! # Responsibility
//! - Declare the view-facing and service-to-service method catalogs.
//! - Keep conversion conventions (record to pair, record to view) in one
//!   place.

pub mod record_service;
