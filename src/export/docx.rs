//! DOCX exporter.
//!
//! Serializes a [`Report`] into an OOXML WordprocessingML package: title
//! page, bookmark-anchored table of contents, abstract, chapters with
//! inline images, references, and an auto-numbered footer.
//!
//! No page number is ever baked into the output. TOC rows carry `PAGEREF`
//! fields over point bookmarks and the package requests a field update on
//! open, so the consuming viewer resolves pagination itself.

use std::io::{Seek, Write};

use chrono::Local;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};
use crate::model::{Chapter, ImageMap, Report, Segment, split_segments};
use crate::text::strip_numeric_prefix;

use super::xml::{
    BLACK, bookmark, body_paragraph, centered_paragraph, escape_xml, heading_paragraph,
    inline_image_run, list_paragraph, run_props, simple_field, table_cell, table_cell_indented,
    text_run,
};

/// Embedded images render at 400x266 px (the 600x400 source ratio scaled).
const IMAGE_EXTENT: (u64, u64) = (400, 266);
const EMU_PER_PIXEL: u64 = 9525;

/// Relationship ids rId1..=rId4 are taken by styles/settings/numbering/
/// footer; image relationships start after them.
const IMAGE_REL_BASE: usize = 4;

/// Configuration for DOCX export.
///
/// Font sizes are points; `None` falls back to the report's own
/// [`FontSizes`](crate::model::FontSizes). A fixed `timestamp` replaces
/// the current local time on the title page (useful for reproducible
/// output).
#[derive(Debug, Clone, Default)]
pub struct DocxConfig {
    pub content_pt: Option<u32>,
    pub chapter_pt: Option<u32>,
    pub timestamp: Option<String>,
}

/// DOCX format exporter.
///
/// # Example
///
/// ```no_run
/// use folio::export::DocxExporter;
/// use folio::model::Report;
/// use std::fs::File;
///
/// let report = Report::new("Solar Cells");
/// let mut file = File::create("out.docx")?;
/// DocxExporter::new().export(&report, &report.images, &mut file)?;
/// # Ok::<(), folio::Error>(())
/// ```
pub struct DocxExporter {
    config: DocxConfig,
}

impl DocxExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self {
            config: DocxConfig::default(),
        }
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: DocxConfig) -> Self {
        self.config = config;
        self
    }

    /// Serialize the report into `writer`.
    ///
    /// `images` is the resolved tag-to-bytes map (see
    /// [`resolve_images`](crate::fetch::resolve_images)); a tag missing
    /// from it is silently omitted. A chapter whose construction fails is
    /// replaced in place by a visible error paragraph and export
    /// continues.
    pub fn export<W: Write + Seek>(
        &self,
        report: &Report,
        images: &ImageMap,
        writer: &mut W,
    ) -> Result<()> {
        let content_size = self.config.content_pt.unwrap_or(report.font_sizes.content) * 2;
        let chapter_size = self.config.chapter_pt.unwrap_or(report.font_sizes.chapter) * 2;
        let timestamp = self
            .config
            .timestamp
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M").to_string());

        let mut state = ExportState::default();
        let mut body = String::new();

        title_page(&mut body, &report.title, &timestamp);
        toc_section(&mut body, report);
        abstract_section(&mut body, report, content_size, chapter_size, &mut state);

        for (position, chapter) in report.chapters.iter().enumerate() {
            match chapter_xml(chapter, position, images, content_size, chapter_size, &mut state) {
                Ok(xml) => body.push_str(&xml),
                Err(e) => {
                    log::warn!("chapter {} failed to build: {e}", position + 1);
                    body.push_str(&body_paragraph(
                        &format!("[ERROR GENERATING CHAPTER {}: {}]", position + 1, e),
                        content_size,
                    ));
                }
            }
        }

        references_section(&mut body, report, content_size, chapter_size, &mut state);
        body.push_str(SECTION_PROPS);

        self.write_package(writer, report, &body, content_size, &state)
    }

    fn write_package<W: Write + Seek>(
        &self,
        writer: &mut W,
        report: &Report,
        body: &str,
        content_size: u32,
        state: &ExportState,
    ) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let deflated =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        zip.start_file("[Content_Types].xml", deflated)?;
        zip.write_all(content_types(state).as_bytes())?;

        zip.start_file("_rels/.rels", deflated)?;
        zip.write_all(PACKAGE_RELS)?;

        zip.start_file("word/document.xml", deflated)?;
        zip.write_all(document_part(body).as_bytes())?;

        zip.start_file("word/_rels/document.xml.rels", deflated)?;
        zip.write_all(document_rels(state).as_bytes())?;

        zip.start_file("word/styles.xml", deflated)?;
        zip.write_all(styles_part(content_size).as_bytes())?;

        zip.start_file("word/settings.xml", deflated)?;
        zip.write_all(SETTINGS_XML)?;

        zip.start_file("word/numbering.xml", deflated)?;
        zip.write_all(NUMBERING_XML)?;

        zip.start_file("word/footer1.xml", deflated)?;
        zip.write_all(FOOTER_XML)?;

        for media in &state.media {
            zip.start_file(format!("word/media/{}", media.filename), stored)?;
            zip.write_all(&media.data)?;
        }

        zip.start_file("docProps/core.xml", deflated)?;
        zip.write_all(core_props(&report.title).as_bytes())?;

        zip.start_file("docProps/app.xml", deflated)?;
        zip.write_all(APP_PROPS)?;

        zip.finish()?;
        Ok(())
    }
}

impl Default for DocxExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// An embedded media part plus its relationship bookkeeping.
struct Media {
    rel_id: String,
    filename: String,
    content_type: &'static str,
    extension: &'static str,
    data: Vec<u8>,
}

#[derive(Default)]
struct ExportState {
    media: Vec<Media>,
    images_seen: usize,
    bookmarks: u32,
}

impl ExportState {
    fn next_bookmark(&mut self) -> u32 {
        self.bookmarks += 1;
        self.bookmarks
    }
}

// ---------------------------------------------------------------------------
// Body sections
// ---------------------------------------------------------------------------

fn title_page(body: &mut String, title: &str, timestamp: &str) {
    body.push_str(&centered_paragraph(
        &text_run(&title.to_uppercase(), &run_props(48, true, false, BLACK), 0),
        Some(3000),
        1000,
        false,
        None,
    ));
    body.push_str(&centered_paragraph(
        &text_run("A PROJECT REPORT", &run_props(32, true, false, BLACK), 0),
        None,
        1000,
        false,
        None,
    ));
    body.push_str(&centered_paragraph(
        &text_run("Generated by folio", &run_props(24, false, true, "666666"), 0),
        None,
        400,
        false,
        None,
    ));
    body.push_str(&centered_paragraph(
        &text_run(timestamp, &run_props(22, false, true, "888888"), 0),
        None,
        3000,
        false,
        None,
    ));
}

fn toc_section(body: &mut String, report: &Report) {
    body.push_str(&centered_paragraph(
        &text_run("TABLE OF CONTENT", &run_props(32, true, false, BLACK), 0),
        None,
        400,
        true,
        Some("Heading1"),
    ));

    let bold = run_props(24, true, false, BLACK);
    let plain = run_props(24, false, false, BLACK);

    let mut rows = String::new();
    rows.push_str(&format!(
        "<w:tr><w:trPr><w:tblHeader/></w:trPr>{}{}{}</w:tr>",
        table_cell(750, "center", &text_run("CHAPTER NO", &bold, 0)),
        table_cell(3500, "center", &text_run("TITLE", &bold, 0)),
        table_cell(750, "center", &text_run("PAGE NO", &bold, 0)),
    ));

    rows.push_str(&toc_row(
        "",
        &text_run("ABSTRACT", &bold, 0),
        "BMABSTRACT",
        None,
    ));

    for (position, chapter) in report.chapters.iter().enumerate() {
        rows.push_str(&toc_row(
            &chapter.number.to_string(),
            &text_run(&chapter.title.to_uppercase(), &bold, 0),
            &format!("BMCH{}", position + 1),
            None,
        ));
        for (index, subsection) in chapter.subsections.iter().enumerate() {
            let entry = format!(
                "{}.{} {}",
                chapter.number,
                index + 1,
                strip_numeric_prefix(&subsection.title)
            );
            rows.push_str(&toc_row(
                "",
                &text_run(&entry, &plain, 0),
                &format!("BMCH{}S{}", position + 1, index + 1),
                Some(720),
            ));
        }
    }

    rows.push_str(&toc_row(
        "",
        &text_run("REFERENCES", &bold, 0),
        "BMREFS",
        None,
    ));

    body.push_str(&format!(
        "<w:tbl><w:tblPr><w:tblW w:w=\"5000\" w:type=\"pct\"/>{TABLE_BORDERS}</w:tblPr>\
         <w:tblGrid><w:gridCol w:w=\"1354\"/><w:gridCol w:w=\"6318\"/><w:gridCol w:w=\"1354\"/></w:tblGrid>\
         {rows}</w:tbl>"
    ));
}

/// One TOC row: number column, title column, and a page column holding an
/// empty `PAGEREF` field against the row's heading bookmark.
fn toc_row(label: &str, title_runs: &str, anchor: &str, indent: Option<u32>) -> String {
    let label_runs = if label.is_empty() {
        String::new()
    } else {
        text_run(label, &run_props(24, true, false, BLACK), 0)
    };
    let title_cell = match indent {
        Some(indent) => table_cell_indented(3500, indent, title_runs),
        None => table_cell(3500, "left", title_runs),
    };
    let page_field = simple_field(
        &format!("PAGEREF {anchor} \\h"),
        &run_props(24, false, false, BLACK),
    );
    format!(
        "<w:tr>{}{}{}</w:tr>",
        table_cell(750, "center", &label_runs),
        title_cell,
        table_cell(750, "center", &page_field),
    )
}

fn abstract_section(
    body: &mut String,
    report: &Report,
    content_size: u32,
    chapter_size: u32,
    state: &mut ExportState,
) {
    let anchor = bookmark(state.next_bookmark(), "BMABSTRACT");
    let heading = text_run("ABSTRACT", &run_props(chapter_size, true, false, BLACK), 0);
    body.push_str(&centered_paragraph(
        &format!("{anchor}{heading}"),
        None,
        400,
        true,
        Some("Heading1"),
    ));

    for line in report
        .abstract_text
        .lines()
        .filter(|l| !l.trim().is_empty())
    {
        body.push_str(&body_paragraph(line, content_size));
    }
}

fn chapter_xml(
    chapter: &Chapter,
    position: usize,
    images: &ImageMap,
    content_size: u32,
    chapter_size: u32,
    state: &mut ExportState,
) -> Result<String> {
    let mut out = String::new();
    let mut staged: Vec<Media> = Vec::new();

    // Heading: "CHAPTER {n}" then the uppercased title, on a fresh page,
    // anchored for the TOC.
    let anchor = bookmark(state.next_bookmark(), &format!("BMCH{}", position + 1));
    let heading_props = run_props(chapter_size, true, false, BLACK);
    let heading = format!(
        "{anchor}{}{}",
        text_run(&format!("CHAPTER {}", chapter.number), &heading_props, 0),
        text_run(&chapter.title.to_uppercase(), &heading_props, 2),
    );
    out.push_str(&centered_paragraph(&heading, Some(200), 400, true, Some("Heading1")));

    body_blocks(&chapter.content, images, content_size, state, &mut staged, &mut out)?;

    for (index, subsection) in chapter.subsections.iter().enumerate() {
        let anchor = bookmark(
            state.next_bookmark(),
            &format!("BMCH{}S{}", position + 1, index + 1),
        );
        let heading = format!(
            "{}.{} {}:",
            chapter.number,
            index + 1,
            strip_numeric_prefix(&subsection.title)
        );
        out.push_str(&heading_paragraph(
            &format!(
                "{anchor}{}",
                text_run(&heading, &run_props(content_size, true, false, BLACK), 0)
            ),
            300,
            200,
            "Heading2",
        ));

        body_blocks(&subsection.content, images, content_size, state, &mut staged, &mut out)?;
    }

    state.media.extend(staged);
    Ok(out)
}

/// Image-aware text splitter: alternating text/image segments in
/// first-occurrence order. Text becomes one justified paragraph per
/// non-blank line; a resolved image embeds with a centered caption, an
/// unresolved one is omitted, and unrecognizable image bytes fail the
/// enclosing chapter.
fn body_blocks(
    text: &str,
    images: &ImageMap,
    content_size: u32,
    state: &mut ExportState,
    staged: &mut Vec<Media>,
    out: &mut String,
) -> Result<()> {
    for segment in split_segments(text) {
        match segment {
            Segment::Text(text) => {
                for line in text.lines().filter(|l| !l.trim().is_empty()) {
                    out.push_str(&body_paragraph(line, content_size));
                }
            }
            Segment::Image { tag, query } => match images.get(tag) {
                Some(data) => out.push_str(&image_paragraph(data, query, state, staged)?),
                None => log::warn!("no image for {query:?}; omitting"),
            },
        }
    }
    Ok(())
}

fn image_paragraph(
    data: &[u8],
    query: &str,
    state: &mut ExportState,
    staged: &mut Vec<Media>,
) -> Result<String> {
    let (extension, content_type) = sniff_image(data)
        .ok_or_else(|| Error::UnsupportedImage(query.to_string()))?;

    state.images_seen += 1;
    let number = state.images_seen;
    let rel_id = format!("rId{}", IMAGE_REL_BASE + number);
    staged.push(Media {
        rel_id: rel_id.clone(),
        filename: format!("image{number}.{extension}"),
        content_type,
        extension,
        data: data.to_vec(),
    });

    let (width, height) = IMAGE_EXTENT;
    let picture = inline_image_run(
        &rel_id,
        number,
        width * EMU_PER_PIXEL,
        height * EMU_PER_PIXEL,
    );
    let caption = text_run(
        &format!("Figure: {query}"),
        &run_props(20, true, false, BLACK),
        1,
    );
    Ok(centered_paragraph(
        &format!("{picture}{caption}"),
        Some(200),
        200,
        false,
        None,
    ))
}

fn references_section(
    body: &mut String,
    report: &Report,
    content_size: u32,
    chapter_size: u32,
    state: &mut ExportState,
) {
    let anchor = bookmark(state.next_bookmark(), "BMREFS");
    let heading = text_run("REFERENCES", &run_props(chapter_size, true, false, BLACK), 0);
    body.push_str(&centered_paragraph(
        &format!("{anchor}{heading}"),
        None,
        400,
        true,
        Some("Heading1"),
    ));

    for reference in &report.references {
        body.push_str(&list_paragraph(reference, content_size));
    }
}

/// Identify image data by magic number. Only raster formats WordprocessingML
/// viewers universally accept are allowed through.
fn sniff_image(data: &[u8]) -> Option<(&'static str, &'static str)> {
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some(("png", "image/png"))
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(("jpeg", "image/jpeg"))
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some(("gif", "image/gif"))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Package parts
// ---------------------------------------------------------------------------

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const TABLE_BORDERS: &str = "<w:tblBorders>\
    <w:top w:val=\"none\" w:sz=\"0\" w:space=\"0\" w:color=\"auto\"/>\
    <w:left w:val=\"none\" w:sz=\"0\" w:space=\"0\" w:color=\"auto\"/>\
    <w:bottom w:val=\"none\" w:sz=\"0\" w:space=\"0\" w:color=\"auto\"/>\
    <w:right w:val=\"none\" w:sz=\"0\" w:space=\"0\" w:color=\"auto\"/>\
    <w:insideH w:val=\"none\" w:sz=\"0\" w:space=\"0\" w:color=\"auto\"/>\
    <w:insideV w:val=\"none\" w:sz=\"0\" w:space=\"0\" w:color=\"auto\"/>\
    </w:tblBorders>";

/// A4 with one-inch margins; footer carries the viewer-computed page
/// number field.
const SECTION_PROPS: &str = "<w:sectPr>\
    <w:footerReference w:type=\"default\" r:id=\"rId4\"/>\
    <w:pgSz w:w=\"11906\" w:h=\"16838\"/>\
    <w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" \
     w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>\
    </w:sectPr>";

fn document_part(body: &str) -> String {
    format!(
        "{XML_DECL}<w:document xmlns:w=\"{W_NS}\" xmlns:r=\"{R_NS}\" \
         xmlns:wp=\"http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing\" \
         xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
         xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <w:body>{body}</w:body></w:document>"
    )
}

fn content_types(state: &ExportState) -> String {
    let mut types = String::from(XML_DECL);
    types.push_str(
        "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    );

    let mut extensions: Vec<(&str, &str)> = Vec::new();
    for media in &state.media {
        if !extensions.iter().any(|(ext, _)| *ext == media.extension) {
            extensions.push((media.extension, media.content_type));
        }
    }
    for (extension, content_type) in extensions {
        types.push_str(&format!(
            "<Default Extension=\"{extension}\" ContentType=\"{content_type}\"/>"
        ));
    }

    types.push_str(
        "<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
         <Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>\
         <Override PartName=\"/word/settings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml\"/>\
         <Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>\
         <Override PartName=\"/word/footer1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml\"/>\
         <Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
         <Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
         </Types>",
    );
    types
}

const PACKAGE_RELS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>
"#;

fn document_rels(state: &ExportState) -> String {
    let mut rels = String::from(XML_DECL);
    rels.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\
         <Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings\" Target=\"settings.xml\"/>\
         <Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering\" Target=\"numbering.xml\"/>\
         <Relationship Id=\"rId4\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer\" Target=\"footer1.xml\"/>",
    );
    for media in &state.media {
        rels.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"media/{}\"/>",
            media.rel_id, media.filename
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

fn styles_part(content_size: u32) -> String {
    format!(
        "{XML_DECL}<w:styles xmlns:w=\"{W_NS}\">\
         <w:docDefaults><w:rPrDefault><w:rPr>\
         <w:rFonts w:ascii=\"Times New Roman\" w:hAnsi=\"Times New Roman\"/>\
         <w:sz w:val=\"{content_size}\"/><w:szCs w:val=\"{content_size}\"/>\
         </w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>\
         <w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/></w:style>\
         <w:style w:type=\"paragraph\" w:styleId=\"Heading1\"><w:name w:val=\"heading 1\"/>\
         <w:basedOn w:val=\"Normal\"/><w:pPr><w:outlineLvl w:val=\"0\"/></w:pPr><w:rPr><w:b/></w:rPr></w:style>\
         <w:style w:type=\"paragraph\" w:styleId=\"Heading2\"><w:name w:val=\"heading 2\"/>\
         <w:basedOn w:val=\"Normal\"/><w:pPr><w:outlineLvl w:val=\"1\"/></w:pPr><w:rPr><w:b/></w:rPr></w:style>\
         </w:styles>"
    )
}

/// `updateFields` makes the viewer recompute every `PAGEREF`/`PAGE`
/// field the first time the document opens.
const SETTINGS_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:updateFields w:val="true"/></w:settings>
"#;

const NUMBERING_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="&#8226;"/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>
"#;

const FOOTER_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:ftr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:fldSimple w:instr=" PAGE "><w:r><w:rPr><w:color w:val="000000"/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr><w:t xml:space="preserve"></w:t></w:r></w:fldSimple></w:p></w:ftr>
"#;

fn core_props(title: &str) -> String {
    format!(
        "{XML_DECL}<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
         <dc:title>{}</dc:title><dc:creator>folio</dc:creator>\
         </cp:coreProperties>",
        escape_xml(title)
    )
}

const APP_PROPS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>folio</Application></Properties>
"#;
