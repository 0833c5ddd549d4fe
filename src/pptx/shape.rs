/// Shape types for slides: layout-bound placeholders and positioned text boxes.
use crate::error::{BuildError, Result};
use crate::pptx::text::TextFrame;
use std::fmt::Write as FmtWrite;

/// A shape on a slide.
///
/// Placeholders inherit position and size from the slide layout; text boxes
/// carry explicit geometry in EMUs. Every shape owns a [`TextFrame`].
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) kind: ShapeKind,
    pub(crate) text_frame: TextFrame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShapeKind {
    /// Centered title on the title layout (`ctrTitle`)
    CenteredTitle,
    /// Title on content layouts (`title`)
    Title,
    /// Subtitle placeholder (`subTitle`, idx 1)
    Subtitle,
    /// Body placeholder (`body`, idx 1)
    Body,
    /// Free-standing text box with explicit geometry
    TextBox {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
}

impl Shape {
    pub(crate) fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            text_frame: TextFrame::new(),
        }
    }

    /// Get the shape's text frame.
    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    /// Get a mutable reference to the shape's text frame.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    /// Check if this shape is a text box.
    pub fn is_text_box(&self) -> bool {
        matches!(self.kind, ShapeKind::TextBox { .. })
    }

    /// Get the geometry of a text box in EMUs, if this shape has explicit
    /// placement.
    pub fn geometry(&self) -> Option<(i64, i64, i64, i64)> {
        match self.kind {
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
            } => Some((x, y, width, height)),
            _ => None,
        }
    }

    fn display_name(&self, shape_id: u32) -> String {
        match self.kind {
            ShapeKind::CenteredTitle | ShapeKind::Title => format!("Title {}", shape_id - 1),
            ShapeKind::Subtitle => format!("Subtitle {}", shape_id - 1),
            ShapeKind::Body => format!("Content Placeholder {}", shape_id - 1),
            ShapeKind::TextBox { .. } => format!("TextBox {}", shape_id - 1),
        }
    }

    /// Generate the `<p:sp>` element for this shape.
    ///
    /// `shape_id` must be unique within the slide; id 1 is reserved for the
    /// slide's group shape.
    pub(crate) fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        xml.push_str("<p:sp>");

        // Non-visual properties
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            shape_id,
            self.display_name(shape_id)
        )
        .map_err(|e| BuildError::Xml(e.to_string()))?;

        match self.kind {
            ShapeKind::TextBox { .. } => {
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
            },
            _ => {
                xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
                xml.push_str("<p:nvPr>");
                match self.kind {
                    ShapeKind::CenteredTitle => xml.push_str(r#"<p:ph type="ctrTitle"/>"#),
                    ShapeKind::Title => xml.push_str(r#"<p:ph type="title"/>"#),
                    ShapeKind::Subtitle => xml.push_str(r#"<p:ph type="subTitle" idx="1"/>"#),
                    ShapeKind::Body => xml.push_str(r#"<p:ph type="body" idx="1"/>"#),
                    ShapeKind::TextBox { .. } => unreachable!(),
                }
                xml.push_str("</p:nvPr>");
            },
        }
        xml.push_str("</p:nvSpPr>");

        // Shape properties: placeholders inherit geometry from the layout
        match self.kind {
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
            } => {
                xml.push_str("<p:spPr>");
                xml.push_str("<a:xfrm>");
                write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)
                    .map_err(|e| BuildError::Xml(e.to_string()))?;
                write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)
                    .map_err(|e| BuildError::Xml(e.to_string()))?;
                xml.push_str("</a:xfrm>");
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
            },
            _ => xml.push_str("<p:spPr/>"),
        }

        // Text body
        xml.push_str("<p:txBody>");
        match self.kind {
            ShapeKind::TextBox { .. } => {
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
            },
            _ => xml.push_str("<a:bodyPr/>"),
        }
        xml.push_str("<a:lstStyle/>");
        self.text_frame.write_xml(xml)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::text::Paragraph;

    fn render(shape: &Shape, shape_id: u32) -> String {
        let mut xml = String::new();
        shape.write_xml(&mut xml, shape_id).unwrap();
        xml
    }

    #[test]
    fn test_centered_title_placeholder() {
        let mut shape = Shape::new(ShapeKind::CenteredTitle);
        shape.text_frame_mut().push(Paragraph::new("Hi"));
        let xml = render(&shape, 2);

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title 1"/>"#));
        assert!(xml.contains("<p:spPr/>"));
        assert!(xml.contains("<a:t>Hi</a:t>"));
    }

    #[test]
    fn test_body_placeholder_has_index() {
        let xml = render(&Shape::new(ShapeKind::Body), 3);
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
    }

    #[test]
    fn test_text_box_geometry() {
        let mut shape = Shape::new(ShapeKind::TextBox {
            x: 914_400,
            y: 1_828_800,
            width: 7_315_200,
            height: 914_400,
        });
        shape.text_frame_mut().push(Paragraph::new("boxed"));
        let xml = render(&shape, 2);

        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="1828800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="7315200" cy="914400"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect">"#));
        assert_eq!(
            shape.geometry(),
            Some((914_400, 1_828_800, 7_315_200, 914_400))
        );
    }

    #[test]
    fn test_placeholder_has_no_geometry() {
        assert_eq!(Shape::new(ShapeKind::Subtitle).geometry(), None);
    }
}
