//! Inline image-tag scanning.
//!
//! Body text may embed markers of the exact form `[IMAGE:<query>]`, where
//! `<query>` is a free-text image description. The marker string itself is
//! the lookup key into [`ImageMap`](super::ImageMap).

use memchr::memmem;

use super::Report;

/// One run of body text: either plain text or an image marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Image {
        /// The full marker, e.g. `[IMAGE:Battery Diagram]`.
        tag: &'a str,
        /// The query with surrounding whitespace trimmed.
        query: &'a str,
    },
}

const OPEN: &[u8] = b"[IMAGE:";

/// Split text into alternating text/image segments, preserving order.
///
/// An unterminated marker (no closing `]`) is treated as plain text.
/// Adjacent markers produce no intervening empty text segment.
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let bytes = text.as_bytes();
    let mut pos = 0;

    while let Some(offset) = memmem::find(&bytes[pos..], OPEN) {
        let start = pos + offset;
        let Some(close) = memchr::memchr(b']', &bytes[start..]) else {
            break;
        };
        let end = start + close + 1;

        if start > pos {
            segments.push(Segment::Text(&text[pos..start]));
        }
        segments.push(Segment::Image {
            tag: &text[start..end],
            query: text[start + OPEN.len()..end - 1].trim(),
        });
        pos = end;
    }

    if pos < text.len() {
        segments.push(Segment::Text(&text[pos..]));
    }
    segments
}

/// Collect every image marker in the report, in document order, deduped
/// on first occurrence. Returns `(tag, query)` pairs.
pub fn image_queries(report: &Report) -> Vec<(String, String)> {
    let mut seen = Vec::new();
    let mut collect = |text: &str| {
        for segment in split_segments(text) {
            if let Segment::Image { tag, query } = segment
                && !seen.iter().any(|(t, _): &(String, String)| t == tag)
            {
                seen.push((tag.to_string(), query.to_string()));
            }
        }
    };

    for chapter in &report.chapters {
        collect(&chapter.content);
        for subsection in &chapter.subsections {
            collect(&subsection.content);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;

    #[test]
    fn test_split_text_only() {
        let segments = split_segments("no markers here");
        assert_eq!(segments, vec![Segment::Text("no markers here")]);
    }

    #[test]
    fn test_split_single_marker() {
        let segments = split_segments("Intro. [IMAGE:Battery Diagram] More text.");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Intro. "),
                Segment::Image {
                    tag: "[IMAGE:Battery Diagram]",
                    query: "Battery Diagram",
                },
                Segment::Text(" More text."),
            ]
        );
    }

    #[test]
    fn test_split_marker_at_edges() {
        let segments = split_segments("[IMAGE:a]middle[IMAGE:b]");
        assert_eq!(segments.len(), 3);
        assert!(matches!(segments[0], Segment::Image { query: "a", .. }));
        assert_eq!(segments[1], Segment::Text("middle"));
        assert!(matches!(segments[2], Segment::Image { query: "b", .. }));
    }

    #[test]
    fn test_unterminated_marker_is_text() {
        let segments = split_segments("before [IMAGE:oops");
        assert_eq!(segments, vec![Segment::Text("before [IMAGE:oops")]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let segments = split_segments("[IMAGE:  padded query ]");
        assert!(matches!(segments[0], Segment::Image { query: "padded query", .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_image_queries_document_order_dedup() {
        let report = crate::model::Report::new("t")
            .with_chapter(
                Chapter::new(1, "one")
                    .with_content("a [IMAGE:x] b [IMAGE:y]")
                    .with_subsection("sub", "c [IMAGE:x] d [IMAGE:z]"),
            )
            .with_chapter(Chapter::new(2, "two").with_content("[IMAGE:y]"));

        let queries: Vec<String> = image_queries(&report)
            .into_iter()
            .map(|(_, q)| q)
            .collect();
        assert_eq!(queries, vec!["x", "y", "z"]);
    }
}
