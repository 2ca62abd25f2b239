//! # Status Badges
//!
//! Maps the open backend status vocabulary (`"fully_signed"`, `"OVERDUE"`, ...) onto the
//! closed [`StatusSeverity`] set and a human label.

mod classify;
mod label;

pub use crate::classify::{classify_status, known_statuses};
pub use crate::label::{StatusBadge, humanize, label_for, label_key};
pub use nestly_domain::severity::StatusSeverity;
