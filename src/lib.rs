//! Content ingestion for a static portfolio site.
//!
//! JSON content files are fetched per record kind, checked against a fixed
//! shape, stripped of markup and dangerous keys, and collected into one
//! [`ContentBundle`](content::ContentBundle). Anything that fails along the
//! way is left out rather than reported as an error.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod loader;
pub mod sanitize;
pub mod validate;
