//! Page layout estimation for on-screen preview.
//!
//! [`paginate`] deterministically partitions a [`Report`] into fixed-size
//! [`Page`]s using word-count heuristics. It is a pure function of its
//! input: no I/O, no shared state, safe to re-run on every render. The
//! result approximates the exported document; exact page boundaries are
//! not guaranteed to match.
//!
//! The TOC page numbers are computed analytically from word counts before
//! any chapter is packed, so a single forward pass suffices. The estimate
//! is informational only and is not corrected against the real packing
//! below it.

use crate::model::Report;
use crate::text::{chunk_words, strip_numeric_prefix, word_count};

/// Word-budget calibration for the estimator.
///
/// The defaults are tuned for a 14 pt body on an A4 page. Retuning them
/// changes page counts but not the shape of the algorithm: flat heading
/// costs, per-word body costs, greedy bin-packing, forced splitting of
/// oversized paragraphs.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Body budget of a chapter page.
    pub words_per_page: usize,
    /// Flat cost charged for a chapter or subsection heading.
    pub title_cost: usize,
    /// Budget of a chapter's first page (the heading eats into it).
    pub chapter_lead_words: usize,
    /// Budget of abstract pages and chapter continuation pages.
    pub overflow_words: usize,
    /// Budget of a references page.
    pub reference_words: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            words_per_page: 320,
            title_cost: 60,
            chapter_lead_words: 250,
            overflow_words: 350,
            reference_words: 300,
        }
    }
}

/// A single estimated page, numbered sequentially from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub body: PageBody,
}

/// Renderable content of an estimated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    /// Cover page: uppercased report title plus the static subtitle.
    Title { heading: String, subtitle: String },
    /// Table of contents with estimated start pages.
    Toc { rows: Vec<TocRow> },
    /// An abstract or chapter page. `heading` is set only on the first
    /// abstract page.
    Section {
        heading: Option<String>,
        elements: Vec<ContentElement>,
    },
    /// A references page; `heading` is true on the first one only.
    References { heading: bool, entries: Vec<String> },
}

/// One table-of-contents row. `label` is the chapter number column and is
/// empty for the ABSTRACT and REFERENCES rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocRow {
    pub label: String,
    pub title: String,
    pub page: u32,
}

/// A chapter flattened into a linear stream for packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentElement {
    /// `CHAPTER {n}: {TITLE}` heading.
    MainTitle(String),
    /// `{n}.{m} {title}: ` subsection heading.
    SubTitle(String),
    /// One paragraph (or forced chunk of one).
    Text(String),
}

const SUBTITLE: &str = "A PROJECT REPORT";

/// Estimate the page layout of a report with the default calibration.
///
/// Never fails: an empty report still yields a title page, a TOC page, an
/// abstract page, and a references page.
pub fn paginate(report: &Report) -> Vec<Page> {
    paginate_with(report, &LayoutConfig::default())
}

/// Estimate the page layout with explicit budgets.
pub fn paginate_with(report: &Report, config: &LayoutConfig) -> Vec<Page> {
    let mut sink = PageSink::default();

    sink.push(PageBody::Title {
        heading: report.title.to_uppercase(),
        subtitle: SUBTITLE.to_string(),
    });

    sink.push(PageBody::Toc {
        rows: toc_rows(report, config),
    });

    // Abstract: greedy chunks, heading on the first page only.
    let mut chunks = chunk_words(&report.abstract_text, config.overflow_words);
    if chunks.is_empty() {
        chunks.push(String::new());
    }
    for (i, chunk) in chunks.into_iter().enumerate() {
        sink.push(PageBody::Section {
            heading: (i == 0).then(|| "ABSTRACT".to_string()),
            elements: vec![ContentElement::Text(chunk)],
        });
    }

    for chapter in &report.chapters {
        pack_chapter(&mut sink, flatten_chapter(chapter), config);
    }

    push_references(&mut sink, &report.references, config);

    sink.pages
}

#[derive(Default)]
struct PageSink {
    pages: Vec<Page>,
}

impl PageSink {
    fn push(&mut self, body: PageBody) {
        let number = self.pages.len() as u32 + 1;
        self.pages.push(Page { number, body });
    }
}

/// Compute TOC rows analytically.
///
/// Chapter pagination depends only on word counts, so start pages can be
/// derived arithmetically: the first chapter page absorbs
/// `chapter_lead_words`, every continuation page `overflow_words`.
fn toc_rows(report: &Report, config: &LayoutConfig) -> Vec<TocRow> {
    // title = 1, TOC = 2, abstract begins right after
    let abstract_start = 3u32;
    let abstract_pages = word_count(&report.abstract_text)
        .div_ceil(config.overflow_words)
        .max(1);

    let mut rows = vec![TocRow {
        label: String::new(),
        title: "ABSTRACT".to_string(),
        page: abstract_start,
    }];

    let mut cursor = abstract_start + abstract_pages as u32;
    for chapter in &report.chapters {
        rows.push(TocRow {
            label: chapter.number.to_string(),
            title: chapter.title.to_uppercase(),
            page: cursor,
        });

        let mut total = word_count(&chapter.content);
        for subsection in &chapter.subsections {
            total += word_count(&subsection.title) + word_count(&subsection.content);
        }

        let mut pages = 1usize;
        if total > config.chapter_lead_words {
            pages += (total - config.chapter_lead_words).div_ceil(config.overflow_words);
        }
        cursor += pages as u32;
    }

    rows.push(TocRow {
        label: String::new(),
        title: "REFERENCES".to_string(),
        page: cursor,
    });
    rows
}

/// Flatten a chapter into a heading + paragraph stream. A chapter or
/// subsection with no content still contributes its heading.
fn flatten_chapter(chapter: &crate::model::Chapter) -> Vec<ContentElement> {
    let mut elements = vec![ContentElement::MainTitle(format!(
        "CHAPTER {}: {}",
        chapter.number,
        chapter.title.to_uppercase()
    ))];

    for line in chapter.content.lines().filter(|l| !l.trim().is_empty()) {
        elements.push(ContentElement::Text(line.to_string()));
    }

    for (index, subsection) in chapter.subsections.iter().enumerate() {
        elements.push(ContentElement::SubTitle(format!(
            "{}.{} {}: ",
            chapter.number,
            index + 1,
            strip_numeric_prefix(&subsection.title)
        )));
        for line in subsection.content.lines().filter(|l| !l.trim().is_empty()) {
            elements.push(ContentElement::Text(line.to_string()));
        }
    }
    elements
}

/// Greedily pack a chapter's elements against the page word budget.
///
/// Headings cost a flat `title_cost` and are never split. A paragraph
/// longer than a whole page is force-split into budget-sized chunks, each
/// packed independently against whatever is already on the open page. A
/// page is only flushed when it holds at least one element.
fn pack_chapter(sink: &mut PageSink, elements: Vec<ContentElement>, config: &LayoutConfig) {
    let budget = config.words_per_page;
    let mut current: Vec<ContentElement> = Vec::new();
    let mut used = 0usize;

    let flush = |current: &mut Vec<ContentElement>, used: &mut usize, sink: &mut PageSink| {
        sink.push(PageBody::Section {
            heading: None,
            elements: std::mem::take(current),
        });
        *used = 0;
    };

    for element in elements {
        let cost = match &element {
            ContentElement::MainTitle(_) | ContentElement::SubTitle(_) => config.title_cost,
            ContentElement::Text(text) => word_count(text),
        };

        if used + cost > budget && !current.is_empty() {
            flush(&mut current, &mut used, sink);
        }

        match element {
            ContentElement::Text(text) if cost > budget => {
                for part in chunk_words(&text, budget) {
                    let part_words = word_count(&part);
                    if used + part_words > budget && !current.is_empty() {
                        flush(&mut current, &mut used, sink);
                    }
                    used += part_words;
                    current.push(ContentElement::Text(part));
                }
            }
            element => {
                used += cost;
                current.push(element);
            }
        }
    }

    if !current.is_empty() {
        flush(&mut current, &mut used, sink);
    }
}

/// Group references greedily onto pages. A reference is never split, even
/// when it alone exceeds the budget; it then takes its own page.
fn push_references(sink: &mut PageSink, references: &[String], config: &LayoutConfig) {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut used = 0usize;

    for reference in references {
        let words = word_count(reference);
        if used + words > config.reference_words && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
            used = 0;
        }
        used += words;
        current.push(reference.clone());
    }
    if !current.is_empty() {
        groups.push(current);
    }
    if groups.is_empty() {
        groups.push(Vec::new());
    }

    for (i, entries) in groups.into_iter().enumerate() {
        sink.push(PageBody::References {
            heading: i == 0,
            entries,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Chapter, Report};

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_report_has_four_pages() {
        let pages = paginate(&Report::default());
        assert_eq!(pages.len(), 4);
        assert!(matches!(pages[0].body, PageBody::Title { .. }));
        assert!(matches!(pages[1].body, PageBody::Toc { .. }));
        assert!(matches!(
            pages[2].body,
            PageBody::Section {
                heading: Some(_),
                ..
            }
        ));
        assert!(matches!(
            pages[3].body,
            PageBody::References { heading: true, .. }
        ));
    }

    #[test]
    fn test_page_numbers_are_sequential() {
        let report = Report::new("T")
            .with_abstract(words(800))
            .with_chapter(Chapter::new(1, "One").with_content(words(900)))
            .with_reference(words(10));
        let pages = paginate(&report);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number, i as u32 + 1);
        }
    }

    #[test]
    fn test_title_page_is_uppercased() {
        let pages = paginate(&Report::new("solar cells"));
        let PageBody::Title { heading, subtitle } = &pages[0].body else {
            panic!("expected title page");
        };
        assert_eq!(heading, "SOLAR CELLS");
        assert_eq!(subtitle, "A PROJECT REPORT");
    }

    #[test]
    fn test_abstract_spans_pages_heading_once() {
        let report = Report::new("T").with_abstract(words(800));
        let pages = paginate(&report);
        // 800 words / 350 per page = 3 abstract pages (pages 3..=5)
        let abstract_pages: Vec<_> = pages
            .iter()
            .filter_map(|p| match &p.body {
                PageBody::Section { heading, elements } => Some((heading, elements)),
                _ => None,
            })
            .collect();
        assert_eq!(abstract_pages.len(), 3);
        assert_eq!(abstract_pages[0].0.as_deref(), Some("ABSTRACT"));
        assert!(abstract_pages[1].0.is_none());
        assert!(abstract_pages[2].0.is_none());
    }

    #[test]
    fn test_toc_rows_and_analytic_pages() {
        // abstract: 400 words -> 2 pages, starts at 3, chapters start at 5
        // chapter 1: 300 words -> 1 lead page + ceil(50/350)=1 -> 2 pages
        // chapter 2 starts at 7; 100 words -> 1 page; references at 8
        let report = Report::new("T")
            .with_abstract(words(400))
            .with_chapter(Chapter::new(1, "alpha").with_content(words(300)))
            .with_chapter(Chapter::new(2, "beta").with_content(words(100)));
        let pages = paginate(&report);
        let PageBody::Toc { rows } = &pages[1].body else {
            panic!("expected TOC page");
        };

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].title, "ABSTRACT");
        assert_eq!(rows[0].page, 3);
        assert_eq!(rows[1].label, "1");
        assert_eq!(rows[1].title, "ALPHA");
        assert_eq!(rows[1].page, 5);
        assert_eq!(rows[2].label, "2");
        assert_eq!(rows[2].page, 7);
        assert_eq!(rows[3].title, "REFERENCES");
        assert_eq!(rows[3].page, 8);
    }

    #[test]
    fn test_subsection_words_count_toward_chapter_total() {
        // 200 body + 3 title + 97 sub content = 300 -> 2 pages
        let report = Report::new("T").with_chapter(
            Chapter::new(1, "c")
                .with_content(words(200))
                .with_subsection("one two three", words(97)),
        );
        let pages = paginate(&report);
        let PageBody::Toc { rows } = &pages[1].body else {
            panic!("expected TOC page");
        };
        // references start page = chapter start (3 + 1 abstract page = 4) + 2
        assert_eq!(rows[2].page, 6);
    }

    #[test]
    fn test_empty_chapter_still_emits_heading_page() {
        let report = Report::new("T").with_chapter(Chapter::new(4, "Hollow"));
        let pages = paginate(&report);
        let chapter_page = pages
            .iter()
            .find(|p| {
                matches!(&p.body, PageBody::Section { heading: None, elements }
                    if matches!(elements.first(), Some(ContentElement::MainTitle(_))))
            })
            .expect("chapter page");
        let PageBody::Section { elements, .. } = &chapter_page.body else {
            unreachable!()
        };
        assert_eq!(
            elements,
            &vec![ContentElement::MainTitle("CHAPTER 4: HOLLOW".to_string())]
        );
    }

    #[test]
    fn test_subsection_numbering_ignores_stored_prefix() {
        let report = Report::new("T").with_chapter(
            Chapter::new(1, "c")
                .with_subsection("2.7 Overview", "x")
                .with_subsection("Scope", "y")
                .with_subsection("9 Results", "z"),
        );
        let pages = paginate(&report);
        let subtitles: Vec<String> = pages
            .iter()
            .filter_map(|p| match &p.body {
                PageBody::Section { elements, .. } => Some(elements),
                _ => None,
            })
            .flatten()
            .filter_map(|el| match el {
                ContentElement::SubTitle(t) => Some(t.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(subtitles, vec!["1.1 Overview: ", "1.2 Scope: ", "1.3 Results: "]);
    }

    #[test]
    fn test_oversized_paragraph_is_split() {
        let report =
            Report::new("T").with_chapter(Chapter::new(1, "c").with_content(words(900)));
        let pages = paginate(&report);
        let chapter_pages: Vec<_> = pages
            .iter()
            .filter(|p| matches!(&p.body, PageBody::Section { heading: None, .. }))
            .collect();
        assert!(chapter_pages.len() >= 2, "900-word paragraph must split");

        // no page exceeds the budget by more than one unsplit element
        for page in &chapter_pages {
            let PageBody::Section { elements, .. } = &page.body else {
                unreachable!()
            };
            let total: usize = elements
                .iter()
                .map(|el| match el {
                    ContentElement::Text(t) => word_count(t),
                    _ => 60,
                })
                .sum();
            assert!(total <= 320 + 320, "page badly overpacked: {total}");
        }
    }

    #[test]
    fn test_references_group_and_never_split() {
        let long_ref = words(400);
        let report = Report::new("T")
            .with_reference(words(150))
            .with_reference(words(150))
            .with_reference(long_ref.clone())
            .with_reference(words(10));
        let pages = paginate(&report);
        let ref_pages: Vec<_> = pages
            .iter()
            .filter_map(|p| match &p.body {
                PageBody::References { entries, .. } => Some(entries),
                _ => None,
            })
            .collect();
        // [150+150], [400 alone], [10]
        assert_eq!(ref_pages.len(), 3);
        assert_eq!(ref_pages[0].len(), 2);
        assert_eq!(ref_pages[1], &vec![long_ref]);
        assert_eq!(ref_pages[2].len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let report = Report::new("T")
            .with_abstract(words(500))
            .with_chapter(
                Chapter::new(1, "c")
                    .with_content(words(700))
                    .with_subsection("s", words(100)),
            )
            .with_reference(words(20));
        assert_eq!(paginate(&report), paginate(&report));
    }

    #[test]
    fn test_custom_config_changes_packing() {
        let report =
            Report::new("T").with_chapter(Chapter::new(1, "c").with_content(words(100)));
        let tight = LayoutConfig {
            words_per_page: 30,
            overflow_words: 30,
            chapter_lead_words: 20,
            title_cost: 10,
            reference_words: 30,
        };
        let pages = paginate_with(&report, &tight);
        assert!(pages.len() > paginate(&report).len());
    }
}
