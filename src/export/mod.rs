//! Export module for serializing reports to DOCX.
//!
//! # Architecture
//!
//! Image resolution and document assembly are decoupled:
//! [`export_docx`] first resolves every inline image tag through the
//! injected [`ImageFetcher`](crate::fetch::ImageFetcher) (async,
//! cache-keyed), then hands the resolved map to [`DocxExporter`] for a
//! fully synchronous, order-preserving assembly and zip encode.
//!
//! The exporter uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write + Seek` destination
//!
//! # Example
//!
//! ```no_run
//! use folio::export::export_docx;
//! use folio::fetch::NoFetch;
//! use folio::model::Report;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(async {
//! let report = Report::new("Solar Cells");
//! let bytes = export_docx(&report, &NoFetch).await?;
//! # Ok::<(), folio::Error>(()) })?;
//! # Ok::<(), folio::Error>(())
//! ```

mod docx;
mod xml;

pub use docx::{DocxConfig, DocxExporter};

use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fetch::{ImageFetcher, resolve_images};
use crate::model::{ImageMap, Report};

/// Serialize a report to DOCX bytes, resolving images first.
pub async fn export_docx(report: &Report, fetcher: &dyn ImageFetcher) -> Result<Vec<u8>> {
    let images = resolve_images(report, fetcher).await;
    export_docx_with_images(report, &images)
}

/// Serialize a report to DOCX bytes from an already-resolved image map.
/// Purely synchronous; tags missing from `images` are omitted.
pub fn export_docx_with_images(report: &Report, images: &ImageMap) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    DocxExporter::new().export(report, images, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Download filename for a report: the title lowercased with every
/// non-alphanumeric character replaced, suffixed `_report.docx`.
pub fn report_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_report.docx")
}

/// Export a report and write it into `dir` under its conventional
/// filename. Returns the written path.
pub async fn save_report(
    report: &Report,
    dir: impl AsRef<Path>,
    fetcher: &dyn ImageFetcher,
) -> Result<PathBuf> {
    let bytes = export_docx(report, fetcher).await?;
    let path = dir.as_ref().join(report_filename(&report.title));
    std::fs::write(&path, &bytes)?;
    Ok(path)
}
