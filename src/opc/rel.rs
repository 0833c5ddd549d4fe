/// Relationship-related objects for OPC packages.
///
/// Relationships connect a source (the package itself or a part) to target
/// parts. Each relationship carries an rId, a type URI, and a target
/// reference relative to the source.
use std::fmt::Write as FmtWrite;

/// Relationship type URIs used by PresentationML packages.
pub mod reltype {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// A single relationship from a source to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source
    target: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Ordered collection of relationships from a single source.
///
/// rIds are allocated sequentially starting at "rId1". Insertion order is
/// preserved so that serialization is deterministic.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship, allocating the next sequential rId.
    ///
    /// Returns the allocated rId (e.g., "rId3").
    pub fn add(&mut self, reltype: &str, target: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target: target.to_string(),
        });
        r_id
    }

    /// Get the number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Iterate over the relationships in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Generate the `.rels` XML for this collection.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for rel in &self.rels {
            // rIds and type URIs contain no XML-special characters; targets
            // are fixed part names chosen by this crate.
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.r_id, rel.reltype, rel.target
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_rid_allocation() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(reltype::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(reltype::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.add(reltype::SLIDE, "slides/slide2.xml"), "rId3");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_rels_xml() {
        let mut rels = Relationships::new();
        rels.add(reltype::OFFICE_DOCUMENT, "ppt/presentation.xml");

        let xml = rels.to_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0""#));
        assert!(xml.contains(
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#
        ));
    }

    #[test]
    fn test_empty_rels() {
        let rels = Relationships::new();
        assert!(rels.is_empty());
        assert!(rels.to_xml().contains("<Relationships"));
    }
}
