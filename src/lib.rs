//! # pptx-fixture
//!
//! Deterministic generator for a small PowerPoint test deck.
//!
//! The crate builds a four-slide `.pptx` package from scratch, with no
//! Office installation involved, and writes byte-identical output across
//! runs so downstream import tests can pin against it.
//!
//! ## Example
//!
//! ```no_run
//! use pptx_fixture::fixture;
//!
//! fn main() -> pptx_fixture::Result<()> {
//!     fixture::build_and_save(fixture::OUTPUT_FILENAME)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `pptx` (default): presentation authoring. Without it, the crate
//!   compiles but [`fixture::build_and_save`] reports that authoring
//!   support is unavailable.

pub mod common;
pub mod error;
pub mod fixture;

#[cfg(feature = "pptx")]
pub mod opc;
#[cfg(feature = "pptx")]
pub mod pptx;

pub use error::{BuildError, Result};

#[cfg(feature = "pptx")]
pub use pptx::{Paragraph, Presentation, Slide, SlideLayout, TextFrame};
