//! # Domain Models
//!
//! This crate contains pure value types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, no formatting, no lookup tables. Everything here is derived
//! per call by the feature crates and never cached or persisted by them.

pub mod config;
pub mod constants;
pub mod currency;
pub mod language;
pub mod severity;
pub mod upload;
