//! Assembly of a complete `.pptx` package from a [`Presentation`].
//!
//! Lays out the fixed part tree (presentation, one slide master, three
//! slide layouts, theme, per-slide parts, property parts), wires all
//! relationships, and serializes through [`PackageWriter`].

use crate::error::Result;
use crate::opc::PackageWriter;
use crate::opc::rel::reltype;
use crate::pptx::pres::Presentation;
use crate::pptx::template;

/// Content types for PresentationML parts.
mod content_type {
    pub const PRESENTATION_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

/// Serialize a presentation to complete package bytes.
pub(crate) fn package_bytes(pres: &Presentation) -> Result<Vec<u8>> {
    let mut writer = PackageWriter::new();

    // Package-level relationships
    let pkg_rels = writer.pkg_rels_mut();
    pkg_rels.add(reltype::OFFICE_DOCUMENT, "ppt/presentation.xml");
    pkg_rels.add(reltype::CORE_PROPERTIES, "docProps/core.xml");
    pkg_rels.add(reltype::EXTENDED_PROPERTIES, "docProps/app.xml");

    // Relationships of the presentation part. The slide master is always
    // rId1 (presentation.xml references it by that id); slides follow in
    // display order, then the shared property parts.
    let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
    let mut pres_rels = crate::opc::Relationships::new();
    pres_rels.add(reltype::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    for index in 0..pres.slide_count() {
        let rel_id = pres_rels.add(reltype::SLIDE, &format!("slides/slide{}.xml", index + 1));
        slide_rel_ids.push(rel_id);
    }
    pres_rels.add(reltype::PRES_PROPS, "presProps.xml");
    pres_rels.add(reltype::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(reltype::THEME, "theme/theme1.xml");
    pres_rels.add(reltype::TABLE_STYLES, "tableStyles.xml");

    let pres_xml = pres.to_xml(&slide_rel_ids)?;
    let part = writer.add_part(
        "/ppt/presentation.xml",
        content_type::PRESENTATION_MAIN,
        pres_xml.into_bytes(),
    )?;
    *part.rels_mut() = pres_rels;

    // Slide master, referencing the three layouts and the theme
    let part = writer.add_part(
        "/ppt/slideMasters/slideMaster1.xml",
        content_type::SLIDE_MASTER,
        template::slide_master_xml().into_bytes(),
    )?;
    let master_rels = part.rels_mut();
    master_rels.add(reltype::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(reltype::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");
    master_rels.add(reltype::SLIDE_LAYOUT, "../slideLayouts/slideLayout3.xml");
    master_rels.add(reltype::THEME, "../theme/theme1.xml");

    // Slide layouts, each referencing back to the master
    let layouts = [
        template::slide_layout_title_xml(),
        template::slide_layout_title_and_content_xml(),
        template::slide_layout_blank_xml(),
    ];
    for (index, layout_xml) in layouts.into_iter().enumerate() {
        let part = writer.add_part(
            &format!("/ppt/slideLayouts/slideLayout{}.xml", index + 1),
            content_type::SLIDE_LAYOUT,
            layout_xml.into_bytes(),
        )?;
        part.rels_mut()
            .add(reltype::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    }

    // Theme
    writer.add_part(
        "/ppt/theme/theme1.xml",
        content_type::THEME,
        template::theme_xml().as_bytes().to_vec(),
    )?;

    // Slides, each referencing its layout
    for (index, slide) in pres.slides().iter().enumerate() {
        let slide_xml = slide.to_xml()?;
        let part = writer.add_part(
            &format!("/ppt/slides/slide{}.xml", index + 1),
            content_type::SLIDE,
            slide_xml.into_bytes(),
        )?;
        part.rels_mut().add(
            reltype::SLIDE_LAYOUT,
            &format!("../slideLayouts/slideLayout{}.xml", slide.layout().part_number()),
        );
    }

    // Shared property parts
    writer.add_part(
        "/ppt/presProps.xml",
        content_type::PRES_PROPS,
        template::pres_props_xml().as_bytes().to_vec(),
    )?;
    writer.add_part(
        "/ppt/viewProps.xml",
        content_type::VIEW_PROPS,
        template::view_props_xml().as_bytes().to_vec(),
    )?;
    writer.add_part(
        "/ppt/tableStyles.xml",
        content_type::TABLE_STYLES,
        template::table_styles_xml().as_bytes().to_vec(),
    )?;

    // Document properties
    writer.add_part(
        "/docProps/core.xml",
        content_type::CORE_PROPERTIES,
        template::core_props_xml().as_bytes().to_vec(),
    )?;
    writer.add_part(
        "/docProps/app.xml",
        content_type::EXTENDED_PROPERTIES,
        template::app_props_xml().as_bytes().to_vec(),
    )?;

    Ok(writer.to_bytes()?)
}
