//! Package writer for OPC packages.
//!
//! Assembles parts, their relationships, and the `[Content_Types].xml` index
//! in memory, then serializes everything to a ZIP archive in one pass.
//!
//! Output is deterministic: parts are written in insertion order, content
//! type entries are sorted, and every archive entry carries a fixed
//! modification timestamp.

use crate::opc::error::{OpcError, Result};
use crate::opc::rel::Relationships;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A part held by the writer: name, content type, blob, and relationships.
#[derive(Debug)]
pub struct Part {
    /// Part name with a leading slash (e.g., "/ppt/presentation.xml")
    name: String,
    /// Content type for the `[Content_Types].xml` index
    content_type: String,
    /// Serialized part content
    blob: Vec<u8>,
    /// Relationships sourced at this part
    rels: Relationships,
}

impl Part {
    /// Get the relationships of this part, for wiring targets.
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

/// Package writer that serializes an OPC package to a ZIP archive.
///
/// # Example
///
/// ```
/// use pptx_fixture::opc::PackageWriter;
/// use pptx_fixture::opc::rel::reltype;
///
/// let mut writer = PackageWriter::new();
/// writer.pkg_rels_mut().add(reltype::OFFICE_DOCUMENT, "ppt/presentation.xml");
/// writer.add_part(
///     "/ppt/presentation.xml",
///     "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
///     b"<p:presentation/>".to_vec(),
/// )?;
/// let bytes = writer.to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), pptx_fixture::opc::OpcError>(())
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    /// Parts in insertion order
    parts: Vec<Part>,
    /// Package-level relationships (_rels/.rels)
    pkg_rels: Relationships,
}

impl PackageWriter {
    /// Create a new empty package writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the package-level relationships.
    pub fn pkg_rels_mut(&mut self) -> &mut Relationships {
        &mut self.pkg_rels
    }

    /// Add a part to the package.
    ///
    /// # Arguments
    /// * `name` - Part name starting with "/" (e.g., "/ppt/slides/slide1.xml")
    /// * `content_type` - Content type recorded in `[Content_Types].xml`
    /// * `blob` - Serialized part content
    ///
    /// Returns a mutable reference to the stored part so relationships can
    /// be attached.
    pub fn add_part(
        &mut self,
        name: &str,
        content_type: &str,
        blob: Vec<u8>,
    ) -> Result<&mut Part> {
        if !name.starts_with('/') || name.ends_with('/') {
            return Err(OpcError::InvalidPartName(name.to_string()));
        }

        self.parts.push(Part {
            name: name.to_string(),
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        });
        Ok(self.parts.last_mut().unwrap())
    }

    /// Write the package to a file, overwriting any existing file.
    pub fn write<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut phys = PhysPkgWriter::new();

        // [Content_Types].xml
        let cti = ContentTypesItem::from_parts(&self.parts);
        phys.write("[Content_Types].xml", cti.to_xml().as_bytes())?;

        // Package-level relationships
        phys.write("_rels/.rels", self.pkg_rels.to_xml().as_bytes())?;

        // All parts and their relationships
        for part in &self.parts {
            phys.write(membername(&part.name), &part.blob)?;

            if !part.rels.is_empty() {
                phys.write(&rels_membername(&part.name), part.rels.to_xml().as_bytes())?;
            }
        }

        phys.finish()
    }
}

/// Strip the leading slash to get the ZIP member name.
fn membername(partname: &str) -> &str {
    partname.strip_prefix('/').unwrap_or(partname)
}

/// Build the `.rels` member name for a part.
///
/// "/ppt/presentation.xml" becomes "ppt/_rels/presentation.xml.rels".
fn rels_membername(partname: &str) -> String {
    let member = membername(partname);
    match member.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", member),
    }
}

/// Physical package writer targeting an in-memory ZIP archive.
///
/// Entries use Deflate compression and a fixed modification timestamp so
/// that identical input produces identical archive bytes.
struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn write(&mut self, member: &str, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        self.archive.start_file(member, options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Helper for building `[Content_Types].xml` content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: HashMap<String, String>,

    /// Override content types by partname
    overrides: HashMap<String, String>,
}

impl ContentTypesItem {
    const OPC_RELATIONSHIPS: &'static str =
        "application/vnd.openxmlformats-package.relationships+xml";
    const XML: &'static str = "application/xml";

    fn new() -> Self {
        let mut defaults = HashMap::new();

        // Standard defaults present in every package
        defaults.insert("rels".to_string(), Self::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), Self::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Build the index from a part list.
    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.overrides
                .insert(part.name.clone(), part.content_type.clone());
        }
        cti
    }

    /// Generate the XML for `[Content_Types].xml`.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        // Default elements, sorted by extension for deterministic output
        let mut exts: Vec<_> = self.defaults.keys().collect();
        exts.sort();
        for ext in exts {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, self.defaults[ext]
            );
        }

        // Override elements, sorted by partname
        let mut partnames: Vec<_> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, self.overrides[partname]
            );
        }

        xml.push_str("</Types>");
        xml
    }
}
