//! End-to-end tests for the generated fixture package.

#![cfg(feature = "pptx")]

use pptx_fixture::fixture;
use std::io::{Cursor, Read};

fn fixture_bytes() -> Vec<u8> {
    fixture::build().to_bytes().unwrap()
}

fn member(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_package_has_expected_parts() {
    let bytes = fixture_bytes();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let names: Vec<&str> = archive.file_names().collect();

    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/slideLayout2.xml",
        "ppt/slideLayouts/slideLayout3.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide2.xml",
        "ppt/slides/slide3.xml",
        "ppt/slides/slide4.xml",
        "ppt/presProps.xml",
        "ppt/viewProps.xml",
        "ppt/tableStyles.xml",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(names.contains(&expected), "missing part {expected}");
    }
}

#[test]
fn test_every_xml_part_is_well_formed() {
    let bytes = fixture_bytes();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_owned).collect();

    for name in names {
        let mut content = String::new();
        archive
            .by_name(&name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let mut reader = quick_xml::Reader::from_str(&content);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("malformed XML in {name}: {e}"),
            }
        }
    }
}

#[test]
fn test_presentation_lists_four_slides_in_order() {
    let bytes = fixture_bytes();
    let pres_xml = member(&bytes, "ppt/presentation.xml");

    assert!(pres_xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
    assert!(pres_xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
    assert!(pres_xml.contains(r#"<p:sldId id="258" r:id="rId4"/>"#));
    assert!(pres_xml.contains(r#"<p:sldId id="259" r:id="rId5"/>"#));
    assert!(pres_xml.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
}

#[test]
fn test_title_slide_content() {
    let bytes = fixture_bytes();
    let slide1 = member(&bytes, "ppt/slides/slide1.xml");

    assert!(slide1.contains(r#"<p:ph type="ctrTitle"/>"#));
    assert!(slide1.contains("<a:t>Test Presentation</a:t>"));
    assert!(slide1.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
    assert!(slide1.contains("<a:t>Created for PPTX Import Testing</a:t>"));

    let rels = member(&bytes, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels.contains("Target=\"../slideLayouts/slideLayout1.xml\""));
}

#[test]
fn test_bullet_slide_content() {
    let bytes = fixture_bytes();
    let slide2 = member(&bytes, "ppt/slides/slide2.xml");

    assert!(slide2.contains("<a:t>Bullet Points Example</a:t>"));
    assert!(slide2.contains("<a:t>First bullet point</a:t>"));
    assert!(slide2.contains("<a:t>Second bullet point</a:t>"));
    assert!(slide2.contains("<a:t>Third bullet point</a:t>"));
    assert_eq!(slide2.matches(r#"<a:pPr lvl="0"/>"#).count(), 3);
}

#[test]
fn test_text_box_slide_content() {
    let bytes = fixture_bytes();
    let slide3 = member(&bytes, "ppt/slides/slide3.xml");

    assert!(slide3.contains(r#"<p:cNvSpPr txBox="1"/>"#));
    assert!(slide3.contains(r#"<a:off x="914400" y="1828800"/>"#));
    assert!(slide3.contains(r#"<a:ext cx="7315200" cy="914400"/>"#));
    assert!(slide3.contains(r#"sz="4400""#));
    assert!(slide3.contains(r#"b="1""#));
    assert!(slide3.contains("<a:t>Simple Text Slide</a:t>"));
    assert!(!slide3.contains("<p:ph"));

    let rels = member(&bytes, "ppt/slides/_rels/slide3.xml.rels");
    assert!(rels.contains("Target=\"../slideLayouts/slideLayout3.xml\""));
}

#[test]
fn test_features_slide_has_no_explicit_levels() {
    let bytes = fixture_bytes();
    let slide4 = member(&bytes, "ppt/slides/slide4.xml");

    assert!(slide4.contains("<a:t>Features</a:t>"));
    assert!(slide4.contains("<a:t>Easy to use</a:t>"));
    assert!(slide4.contains("<a:t>Markdown support</a:t>"));
    assert!(slide4.contains("<a:t>PowerPoint import/export</a:t>"));
    assert!(!slide4.contains("<a:pPr"));
}

#[test]
fn test_reruns_are_byte_identical() {
    assert_eq!(fixture_bytes(), fixture_bytes());
}

#[test]
fn test_build_and_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(fixture::OUTPUT_FILENAME);

    std::fs::write(&path, b"stale").unwrap();
    fixture::build_and_save(&path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, fixture_bytes());
}
