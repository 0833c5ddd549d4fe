//! Construction of the standard test presentation.
//!
//! Builds a small four-slide deck exercising the structures an importer has
//! to handle: a title slide, bulleted content, a free-standing text box with
//! explicit formatting, and a second content slide without paragraph
//! properties.

use crate::error::Result;
#[cfg(not(feature = "pptx"))]
use crate::error::BuildError;
#[cfg(feature = "pptx")]
use crate::pptx::text::{Paragraph, TextFrame};
#[cfg(feature = "pptx")]
use crate::pptx::units::emu_from_inches;
#[cfg(feature = "pptx")]
use crate::pptx::{Presentation, SlideLayout};
use std::path::Path;

/// File name the fixture is written under.
pub const OUTPUT_FILENAME: &str = "test_presentation.pptx";

/// Build the in-memory fixture presentation.
#[cfg(feature = "pptx")]
pub fn build() -> Presentation {
    let mut pres = Presentation::new();
    pres.set_slide_size(emu_from_inches(10.0), emu_from_inches(5.625));

    // Slide 1: title slide
    let slide = pres.add_slide(SlideLayout::Title);
    slide.set_title("Test Presentation");
    slide.set_subtitle("Created for PPTX Import Testing");

    // Slide 2: bullet list with explicit level-0 paragraph properties
    let slide = pres.add_slide(SlideLayout::TitleAndContent);
    slide.set_title("Bullet Points Example");
    let body = slide.body_mut();
    body.push(Paragraph::new("First bullet point").with_level(0));
    body.push(Paragraph::new("Second bullet point").with_level(0));
    body.push(Paragraph::new("Third bullet point").with_level(0));

    // Slide 3: blank layout with a positioned text box, 44pt bold
    let slide = pres.add_slide(SlideLayout::Blank);
    let mut frame = TextFrame::new();
    frame.push(
        Paragraph::new("Simple Text Slide")
            .with_size(44.0)
            .with_bold(true),
    );
    slide.add_text_box(
        frame,
        emu_from_inches(1.0),
        emu_from_inches(2.0),
        emu_from_inches(8.0),
        emu_from_inches(1.0),
    );

    // Slide 4: content slide relying on the layout's default levels
    let slide = pres.add_slide(SlideLayout::TitleAndContent);
    slide.set_title("Features");
    let body = slide.body_mut();
    body.push(Paragraph::new("Easy to use"));
    body.push(Paragraph::new("Markdown support"));
    body.push(Paragraph::new("PowerPoint import/export"));

    pres
}

/// Build the fixture and save it to `path`, overwriting any existing file.
#[cfg(feature = "pptx")]
pub fn build_and_save<P: AsRef<Path>>(path: P) -> Result<()> {
    build().save(path)
}

/// Authoring support was compiled out; nothing is written.
#[cfg(not(feature = "pptx"))]
pub fn build_and_save<P: AsRef<Path>>(_path: P) -> Result<()> {
    Err(BuildError::AuthoringUnavailable)
}

#[cfg(all(test, feature = "pptx"))]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_four_slides() {
        let pres = build();
        assert_eq!(pres.slide_count(), 4);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 5_143_500);
    }

    #[test]
    fn test_slide_titles() {
        let pres = build();
        let slides = pres.slides();
        assert_eq!(slides[0].title(), Some("Test Presentation"));
        assert_eq!(slides[1].title(), Some("Bullet Points Example"));
        assert_eq!(slides[2].title(), None);
        assert_eq!(slides[3].title(), Some("Features"));
    }

    #[test]
    fn test_text_box_slide() {
        let pres = build();
        let slide = &pres.slides()[2];
        assert_eq!(slide.shape_count(), 1);

        let shape = &slide.shapes()[0];
        assert!(shape.is_text_box());
        assert_eq!(
            shape.geometry(),
            Some((914_400, 1_828_800, 7_315_200, 914_400))
        );

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"sz="4400""#));
        assert!(xml.contains(r#"b="1""#));
    }

    #[test]
    fn test_bullet_levels_only_on_second_slide() {
        let pres = build();

        let xml = pres.slides()[1].to_xml().unwrap();
        assert!(xml.contains(r#"<a:pPr lvl="0"/>"#));

        let xml = pres.slides()[3].to_xml().unwrap();
        assert!(!xml.contains("<a:pPr"));
    }
}
