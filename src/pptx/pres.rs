/// Presentation model and presentation.xml generation.
use crate::error::{BuildError, Result};
use crate::pptx::slide::{Slide, SlideLayout};
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// A presentation under construction.
///
/// Owns its slides exclusively; slides are appended in display order and
/// the whole document is serialized in a single save step.
#[derive(Debug)]
pub struct Presentation {
    /// Slides in display order
    pub(crate) slides: Vec<Slide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Presentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,  // 10 inches
            slide_height: 6_858_000, // 7.5 inches
        }
    }

    /// Append a new slide with the given layout.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut Slide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id, layout));
        self.slides.last_mut().unwrap()
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slides in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide page size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Serialize the presentation to a complete `.pptx` package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::pptx::package::package_bytes(self)
    }

    /// Save the presentation to a file, overwriting any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `slide_rel_ids` - Relationship IDs for the slides, in slide order
    ///   (allocated by the package assembly)
    pub(crate) fn to_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        // The single slide master is always rId1
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = slide_rel_ids.get(index).ok_or_else(|| {
                    BuildError::Xml(format!("missing relationship ID for slide {}", index + 1))
                })?;
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id, rel_id)
                    .map_err(|e| BuildError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| BuildError::Xml(e.to_string()))?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slide_assigns_ids() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Title);
        pres.add_slide(SlideLayout::Blank);
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slides()[0].slide_id(), 256);
        assert_eq!(pres.slides()[1].slide_id(), 257);
    }

    #[test]
    fn test_set_slide_size() {
        let mut pres = Presentation::new();
        pres.set_slide_size(9_144_000, 5_143_500);
        assert_eq!(pres.slide_height(), 5_143_500);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Title);
        pres.add_slide(SlideLayout::TitleAndContent);

        let rel_ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = pres.to_xml(&rel_ids).unwrap();

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_missing_rel_id() {
        let mut pres = Presentation::new();
        pres.add_slide(SlideLayout::Title);
        assert!(pres.to_xml(&[]).is_err());
    }
}
