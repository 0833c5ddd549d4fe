/// Slide types and XML generation.
use crate::error::Result;
use crate::pptx::shape::{Shape, ShapeKind};
use crate::pptx::text::TextFrame;

/// Layout kind for a slide.
///
/// Each kind maps to one of the slide layout parts written into the
/// package; placeholders on the slide inherit position and formatting from
/// that layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Title slide: centered title and subtitle
    Title,
    /// Title and content: title and body placeholder
    TitleAndContent,
    /// Blank: no placeholders
    Blank,
}

impl SlideLayout {
    /// One-based number of the layout part (`slideLayoutN.xml`).
    pub(crate) fn part_number(self) -> usize {
        match self {
            SlideLayout::Title => 1,
            SlideLayout::TitleAndContent => 2,
            SlideLayout::Blank => 3,
        }
    }
}

/// A slide in a presentation.
///
/// Owned exclusively by its [`Presentation`](crate::pptx::Presentation);
/// shapes are kept in insertion order.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID, unique within the presentation
    pub(crate) slide_id: u32,
    /// Layout kind
    layout: SlideLayout,
    /// Shapes on the slide
    shapes: Vec<Shape>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the layout kind.
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set the slide title, replacing any existing title placeholder.
    ///
    /// The title layout binds to the centered title placeholder; other
    /// layouts use the plain title placeholder.
    pub fn set_title(&mut self, title: &str) {
        let kind = match self.layout {
            SlideLayout::Title => ShapeKind::CenteredTitle,
            _ => ShapeKind::Title,
        };
        self.replace_placeholder(kind, TextFrame::with_text(title));
    }

    /// Get the slide title, if a title placeholder is present.
    pub fn title(&self) -> Option<&str> {
        self.shapes
            .iter()
            .find(|s| matches!(s.kind, ShapeKind::CenteredTitle | ShapeKind::Title))
            .and_then(|s| s.text_frame().paragraphs().first())
            .map(|p| p.text())
    }

    /// Set the subtitle text, replacing any existing subtitle placeholder.
    pub fn set_subtitle(&mut self, subtitle: &str) {
        self.replace_placeholder(ShapeKind::Subtitle, TextFrame::with_text(subtitle));
    }

    /// Get a mutable reference to the body placeholder's text frame,
    /// creating the placeholder on first use.
    pub fn body_mut(&mut self) -> &mut TextFrame {
        if !self.shapes.iter().any(|s| s.kind == ShapeKind::Body) {
            self.shapes.push(Shape::new(ShapeKind::Body));
        }
        self.shapes
            .iter_mut()
            .find(|s| s.kind == ShapeKind::Body)
            .map(|s| s.text_frame_mut())
            .unwrap()
    }

    /// Add a text box with explicit geometry in EMUs.
    pub fn add_text_box(&mut self, frame: TextFrame, x: i64, y: i64, width: i64, height: i64) {
        let mut shape = Shape::new(ShapeKind::TextBox {
            x,
            y,
            width,
            height,
        });
        *shape.text_frame_mut() = frame;
        self.shapes.push(shape);
    }

    /// Get the shapes on the slide, in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn replace_placeholder(&mut self, kind: ShapeKind, frame: TextFrame) {
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.kind == kind) {
            *shape.text_frame_mut() = frame;
            return;
        }
        let mut shape = Shape::new(kind);
        *shape.text_frame_mut() = frame;
        self.shapes.push(shape);
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required); the group shape takes id 1
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for (index, shape) in self.shapes.iter().enumerate() {
            shape.write_xml(&mut xml, index as u32 + 2)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
