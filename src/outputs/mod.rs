//! Rendering of extracted headlines.
//!
//! # Submodules
//!
//! - [`terminal`]: numbered, human-readable list with optional clickable links
//! - [`json`]: a [`HeadlineReport`](crate::models::HeadlineReport) as pretty JSON
//!
//! Both write to any [`std::io::Write`] so the binary can target stdout and
//! tests can target a buffer.

pub mod json;
pub mod terminal;
