//! WordprocessingML fragment builders.
//!
//! The document body is assembled as hand-built XML strings; only the
//! handful of shapes this exporter needs are modeled. Run sizes are in
//! OOXML half-points throughout (`pt * 2`).

pub const BLACK: &str = "000000";

/// 1.15 line spacing in 240ths of a line.
pub const LINE_SPACING: u32 = 276;

/// 0.5 inch first-line indent, in twips.
pub const FIRST_LINE_INDENT: u32 = 720;

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Run properties block. `size` is half-points.
pub fn run_props(size: u32, bold: bool, italic: bool, color: &str) -> String {
    let mut props = String::from("<w:rPr>");
    if bold {
        props.push_str("<w:b/>");
    }
    if italic {
        props.push_str("<w:i/>");
    }
    props.push_str(&format!("<w:color w:val=\"{color}\"/>"));
    props.push_str(&format!(
        "<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>"
    ));
    props.push_str("</w:rPr>");
    props
}

/// A text run; `breaks` line breaks are emitted before the text.
pub fn text_run(text: &str, props: &str, breaks: u32) -> String {
    let mut run = format!("<w:r>{props}");
    for _ in 0..breaks {
        run.push_str("<w:br/>");
    }
    run.push_str(&format!(
        "<w:t xml:space=\"preserve\">{}</w:t></w:r>",
        escape_xml(text)
    ));
    run
}

/// A point bookmark (start immediately followed by end) — the structural
/// anchor that `PAGEREF` fields and hyperlinks resolve against.
pub fn bookmark(id: u32, name: &str) -> String {
    format!("<w:bookmarkStart w:id=\"{id}\" w:name=\"{name}\"/><w:bookmarkEnd w:id=\"{id}\"/>")
}

/// A simple field with an empty result, e.g. `PAGEREF BMCH1 \h`. The
/// consuming viewer computes the value when fields are updated.
pub fn simple_field(instruction: &str, props: &str) -> String {
    format!(
        "<w:fldSimple w:instr=\" {instruction} \"><w:r>{props}<w:t xml:space=\"preserve\"></w:t></w:r></w:fldSimple>"
    )
}

/// Justified body paragraph with first-line indent and 1.15 spacing.
pub fn body_paragraph(text: &str, size: u32) -> String {
    format!(
        "<w:p><w:pPr><w:spacing w:after=\"200\" w:line=\"{LINE_SPACING}\" w:lineRule=\"auto\"/>\
         <w:ind w:firstLine=\"{FIRST_LINE_INDENT}\"/><w:jc w:val=\"both\"/></w:pPr>{}</w:p>",
        text_run(text, &run_props(size, false, false, BLACK), 0)
    )
}

/// Bulleted, justified list paragraph (numbering definition 1, level 0).
pub fn list_paragraph(text: &str, size: u32) -> String {
    format!(
        "<w:p><w:pPr><w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>\
         <w:spacing w:after=\"200\" w:line=\"{LINE_SPACING}\" w:lineRule=\"auto\"/>\
         <w:jc w:val=\"both\"/></w:pPr>{}</w:p>",
        text_run(text, &run_props(size, false, false, BLACK), 0)
    )
}

/// Centered paragraph with explicit spacing; `children` are runs and/or
/// bookmarks. `page_break` forces the paragraph onto a new page.
pub fn centered_paragraph(
    children: &str,
    before: Option<u32>,
    after: u32,
    page_break: bool,
    style: Option<&str>,
) -> String {
    let mut ppr = String::from("<w:pPr>");
    if let Some(style) = style {
        ppr.push_str(&format!("<w:pStyle w:val=\"{style}\"/>"));
    }
    if page_break {
        ppr.push_str("<w:pageBreakBefore/>");
    }
    match before {
        Some(before) => ppr.push_str(&format!("<w:spacing w:before=\"{before}\" w:after=\"{after}\"/>")),
        None => ppr.push_str(&format!("<w:spacing w:after=\"{after}\"/>")),
    }
    ppr.push_str("<w:jc w:val=\"center\"/></w:pPr>");
    format!("<w:p>{ppr}{children}</w:p>")
}

/// Left-aligned heading paragraph (subsection headings).
pub fn heading_paragraph(children: &str, before: u32, after: u32, style: &str) -> String {
    format!(
        "<w:p><w:pPr><w:pStyle w:val=\"{style}\"/>\
         <w:spacing w:before=\"{before}\" w:after=\"{after}\"/></w:pPr>{children}</w:p>"
    )
}

/// An inline picture run at a fixed extent, in EMUs.
pub fn inline_image_run(rel_id: &str, doc_pr_id: usize, cx: u64, cy: u64) -> String {
    format!(
        "<w:r><w:drawing><wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{cx}\" cy=\"{cy}\"/>\
         <wp:docPr id=\"{doc_pr_id}\" name=\"Picture {doc_pr_id}\"/>\
         <a:graphic><a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">\
         <pic:pic><pic:nvPicPr>\
         <pic:cNvPr id=\"{doc_pr_id}\" name=\"Picture {doc_pr_id}\"/><pic:cNvPicPr/>\
         </pic:nvPicPr><pic:blipFill>\
         <a:blip r:embed=\"{rel_id}\"/><a:stretch><a:fillRect/></a:stretch>\
         </pic:blipFill><pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
         </pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"
    )
}

/// A table cell holding one paragraph. `width` is in fiftieths of a
/// percent (pct units); `align` is a `w:jc` value.
pub fn table_cell(width: u32, align: &str, children: &str) -> String {
    format!(
        "<w:tc><w:tcPr><w:tcW w:w=\"{width}\" w:type=\"pct\"/></w:tcPr>\
         <w:p><w:pPr><w:jc w:val=\"{align}\"/></w:pPr>{children}</w:p></w:tc>"
    )
}

/// A table cell whose paragraph is indented (subsection TOC rows).
pub fn table_cell_indented(width: u32, indent: u32, children: &str) -> String {
    format!(
        "<w:tc><w:tcPr><w:tcW w:w=\"{width}\" w:type=\"pct\"/></w:tcPr>\
         <w:p><w:pPr><w:ind w:left=\"{indent}\"/></w:pPr>{children}</w:p></w:tc>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_run_props_half_points() {
        let props = run_props(28, true, false, BLACK);
        assert!(props.contains("<w:sz w:val=\"28\"/>"));
        assert!(props.contains("<w:b/>"));
        assert!(!props.contains("<w:i/>"));
    }

    #[test]
    fn test_text_run_escapes_and_breaks() {
        let run = text_run("a < b", "", 2);
        assert!(run.contains("a &lt; b"));
        assert_eq!(run.matches("<w:br/>").count(), 2);
    }

    #[test]
    fn test_bookmark_is_point() {
        let bm = bookmark(7, "BMCH2");
        assert!(bm.contains("w:id=\"7\""));
        assert!(bm.contains("w:name=\"BMCH2\""));
        assert!(bm.contains("bookmarkEnd"));
    }
}
