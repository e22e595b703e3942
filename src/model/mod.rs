//! Core data model for report processing.
//!
//! A [`Report`] is produced by an external content-fetch collaborator
//! (typically as JSON) and consumed read-only by the layout estimator and
//! the DOCX exporter. Missing or empty fields are tolerated everywhere:
//! they deserialize to empty strings and sequences rather than failing.

mod tags;

pub use tags::{Segment, image_queries, split_segments};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Pre-fetched image data, keyed by the exact inline tag string
/// (`[IMAGE:<query>]`). A missing entry means the image is omitted.
pub type ImageMap = HashMap<String, Vec<u8>>;

/// Root report structure.
///
/// Treated as immutable input by both the layout estimator and the
/// exporter; neither holds state across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub title: String,
    /// Abstract text; paragraphs separated by newlines.
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub references: Vec<String>,
    /// Binary image cache populated by the pre-fetch step. Not part of
    /// the JSON interchange form.
    #[serde(skip)]
    pub images: ImageMap,
    /// Export-only font configuration.
    #[serde(default)]
    pub font_sizes: FontSizes,
}

/// A numbered chapter with optional free-text body and subsections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chapter {
    /// Author-assigned 1-based number; not necessarily contiguous after
    /// edits. Display numbering of subsections derives from this plus
    /// structural position.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub title: String,
    /// Body text. May embed `[IMAGE:<query>]` markers; paragraphs are
    /// newline-separated.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

/// A chapter subsection.
///
/// Stored titles may carry a stale numeric prefix (`"1.1 "`); canonical
/// numbering is always `{chapter.number}.{index + 1}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subsection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Font sizes in points, used by the exporter only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FontSizes {
    pub content: u32,
    pub chapter: u32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            content: 14,
            chapter: 16,
        }
    }
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parse a report from its JSON interchange form.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.references.push(reference.into());
        self
    }
}

impl Chapter {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_subsection(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.subsections.push(Subsection {
            title: title.into(),
            content: content.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_tolerates_missing_fields() {
        let report = Report::from_json(r#"{"title": "Solar Cells"}"#).unwrap();
        assert_eq!(report.title, "Solar Cells");
        assert!(report.abstract_text.is_empty());
        assert!(report.chapters.is_empty());
        assert!(report.references.is_empty());
        assert_eq!(report.font_sizes.content, 14);
        assert_eq!(report.font_sizes.chapter, 16);
    }

    #[test]
    fn test_from_json_full_shape() {
        let json = r#"{
            "title": "Grid Storage",
            "abstract": "A study.",
            "chapters": [
                {"number": 1, "title": "Intro", "content": "Hello",
                 "subsections": [{"title": "1.1 Scope", "content": "All of it"}]}
            ],
            "references": ["[1] Someone, Somewhere, 2024."],
            "font_sizes": {"content": 12, "chapter": 18}
        }"#;
        let report = Report::from_json(json).unwrap();
        assert_eq!(report.chapters.len(), 1);
        assert_eq!(report.chapters[0].subsections.len(), 1);
        assert_eq!(report.font_sizes.content, 12);
        assert_eq!(report.references.len(), 1);
    }

    #[test]
    fn test_builder_shape() {
        let report = Report::new("T")
            .with_abstract("A")
            .with_chapter(Chapter::new(1, "One").with_content("body"))
            .with_reference("[1] ref");
        assert_eq!(report.chapters[0].number, 1);
        assert_eq!(report.references.len(), 1);
    }
}
