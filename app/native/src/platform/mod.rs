//! Platform helpers for Quotewall.
//!
//! - [`path`] - Shell-like path expansion

pub mod path;

pub use path::expand;
