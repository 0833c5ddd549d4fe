//! PresentationML (.pptx) authoring.
//!
//! A minimal writing-side document model: a [`Presentation`] owns ordered
//! [`Slide`]s, each slide owns placeholder or text box shapes, and text
//! lives in [`TextFrame`]s of ordered [`Paragraph`]s. [`Presentation::save`]
//! serializes the whole model as an OPC package.

pub mod package;
pub mod pres;
pub mod shape;
pub mod slide;
pub mod template;
pub mod text;
pub mod units;

pub use pres::Presentation;
pub use shape::Shape;
pub use slide::{Slide, SlideLayout};
pub use text::{Paragraph, TextFrame};
