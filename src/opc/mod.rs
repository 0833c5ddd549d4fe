//! Open Packaging Conventions (OPC) serialization.
//!
//! An OPC package is a ZIP archive holding XML parts, a `[Content_Types].xml`
//! index, and `.rels` relationship files. This module provides the writing
//! side only: parts are assembled in memory and serialized in one pass.

pub mod error;
pub mod pkgwriter;
pub mod rel;

pub use error::OpcError;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
