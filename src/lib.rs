//! # folio
//!
//! A library for turning structured academic reports into paginated
//! on-screen previews and exported Word documents.
//!
//! ## Features
//!
//! - Deterministic page-layout estimation from word-count heuristics
//! - DOCX export with bookmark-anchored table of contents, embedded
//!   images, and viewer-resolved page numbers
//! - Pluggable image-generation collaborator with graceful degradation
//!
//! ## Quick Start
//!
//! ```
//! use folio::layout::paginate;
//! use folio::model::{Chapter, Report};
//!
//! let report = Report::new("Solar Cells")
//!     .with_abstract("A short study of perovskite efficiency.")
//!     .with_chapter(Chapter::new(1, "Introduction").with_content("Context."));
//!
//! let pages = paginate(&report);
//! assert_eq!(pages.first().unwrap().number, 1);
//! ```
//!
//! ## Exporting
//!
//! The [`Report`] is consumed read-only by both components; the preview
//! and the export never call each other and need not agree on exact page
//! boundaries:
//!
//! ```no_run
//! use folio::export::{export_docx, report_filename};
//! use folio::fetch::PollinationsClient;
//! use folio::model::Report;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(async {
//! let report = Report::new("Solar Cells");
//! let bytes = export_docx(&report, &PollinationsClient::new()).await?;
//! std::fs::write(report_filename(&report.title), bytes)?;
//! # Ok::<(), folio::Error>(()) })?;
//! # Ok::<(), folio::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod fetch;
pub mod layout;
pub mod model;
pub mod text;

pub use error::{Error, Result};
pub use export::{export_docx, export_docx_with_images, report_filename, save_report};
pub use fetch::{ImageFetcher, NoFetch, PollinationsClient, resolve_images};
pub use layout::{Page, PageBody, paginate, paginate_with};
pub use model::{Chapter, FontSizes, ImageMap, Report, Subsection};
