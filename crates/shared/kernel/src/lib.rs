//! Kernel utilities shared across feature slices.
//! Keep this crate lightweight: configuration loading plus a re-export of the domain types.
//!
//! ## Config loading
//! ```rust,no_run
//! use nestly_kernel::config::load_app_config;
//!
//! let cfg = load_app_config(None::<&str>).unwrap();
//! println!("display locale: {}", cfg.currency.locale);
//! ```
pub mod config;

pub use nestly_domain as domain;
