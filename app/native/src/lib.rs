//! Quotewall - renders a deterministic quote of the day as a phone wallpaper.
//!
//! The library is split along the generation pipeline:
//!
//! - [`quotes`] loads a quote collection and picks one entry per calendar day
//! - [`render`] lays the quote out on a solid canvas and encodes it as PNG
//! - [`wallpaper`] runs selection, rendering and writing as one step
//!
//! The [`cli`] module wires these to the `quotewall` binary.

// Core modules
pub mod config;
pub mod constants;
pub mod error;
pub mod platform;
pub mod schema;

// Pipeline
pub mod quotes;
pub mod render;
pub mod wallpaper;

pub mod cli;
