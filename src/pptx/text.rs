/// Text frames and paragraphs for slide shapes.
use crate::common::xml::escape_xml;
use crate::error::{BuildError, Result};
use crate::pptx::units::centipoints_from_points;
use std::fmt::Write as FmtWrite;

/// A paragraph of text with indentation level and optional run formatting.
///
/// The indentation level defaults to 0. A level set explicitly (even to 0)
/// is serialized as `<a:pPr lvl="..."/>`; an unset level is omitted and the
/// consumer falls back to the XML default.
#[derive(Debug, Clone)]
pub struct Paragraph {
    text: String,
    level: Option<u8>,
    size_pt: Option<f64>,
    bold: Option<bool>,
}

impl Paragraph {
    /// Create a paragraph with default formatting.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            level: None,
            size_pt: None,
            bold: None,
        }
    }

    /// Builder method: set the indentation level explicitly.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Builder method: set the font size in points.
    pub fn with_size(mut self, points: f64) -> Self {
        self.size_pt = Some(points);
        self
    }

    /// Builder method: set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the effective indentation level (0 when unset).
    pub fn level(&self) -> u8 {
        self.level.unwrap_or(0)
    }

    /// Generate the `<a:p>` element for this paragraph.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if let Some(level) = self.level {
            write!(xml, r#"<a:pPr lvl="{}"/>"#, level)
                .map_err(|e| BuildError::Xml(e.to_string()))?;
        }

        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="en-US" dirty="0""#);

        if let Some(size) = self.size_pt {
            write!(xml, r#" sz="{}""#, centipoints_from_points(size))
                .map_err(|e| BuildError::Xml(e.to_string()))?;
        }

        if let Some(true) = self.bold {
            xml.push_str(r#" b="1""#);
        }

        xml.push_str("/>");

        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))
            .map_err(|e| BuildError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");

        Ok(())
    }
}

/// An ordered sequence of paragraphs inside a shape.
///
/// Insertion order is display order and is preserved on serialization.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text frame holding a single paragraph.
    pub fn with_text(text: &str) -> Self {
        let mut frame = Self::new();
        frame.push(Paragraph::new(text));
        frame
    }

    /// Append a paragraph.
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the paragraphs in display order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get the number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the frame has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Generate the `<p:txBody>` children for this frame.
    ///
    /// An empty frame still yields one empty `<a:p>`, which PowerPoint
    /// requires inside every text body.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        if self.paragraphs.is_empty() {
            xml.push_str("<a:p/>");
            return Ok(());
        }

        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(p: &Paragraph) -> String {
        let mut xml = String::new();
        p.write_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_paragraph() {
        let xml = render(&Paragraph::new("Hello"));
        assert_eq!(
            xml,
            r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>Hello</a:t></a:r></a:p>"#
        );
    }

    #[test]
    fn test_explicit_level_zero_is_emitted() {
        let xml = render(&Paragraph::new("Bullet").with_level(0));
        assert!(xml.contains(r#"<a:pPr lvl="0"/>"#));
    }

    #[test]
    fn test_unset_level_is_omitted() {
        let xml = render(&Paragraph::new("Bullet"));
        assert!(!xml.contains("lvl="));
        assert_eq!(Paragraph::new("Bullet").level(), 0);
    }

    #[test]
    fn test_size_and_bold() {
        let xml = render(&Paragraph::new("Big").with_size(44.0).with_bold(true));
        assert!(xml.contains(r#"sz="4400""#));
        assert!(xml.contains(r#"b="1""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render(&Paragraph::new("a < b & c"));
        assert!(xml.contains("<a:t>a &lt; b &amp; c</a:t>"));
    }

    #[test]
    fn test_frame_preserves_order() {
        let mut frame = TextFrame::new();
        frame.push(Paragraph::new("first"));
        frame.push(Paragraph::new("second"));
        frame.push(Paragraph::new("third"));

        let mut xml = String::new();
        frame.write_xml(&mut xml).unwrap();
        let first = xml.find("first").unwrap();
        let second = xml.find("second").unwrap();
        let third = xml.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_empty_frame_yields_empty_paragraph() {
        let mut xml = String::new();
        TextFrame::new().write_xml(&mut xml).unwrap();
        assert_eq!(xml, "<a:p/>");
    }
}
