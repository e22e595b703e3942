//! folio - report JSON to Word document converter

use std::process::ExitCode;

use clap::Parser;

use folio::export::{DocxConfig, DocxExporter, report_filename};
use folio::fetch::{NoFetch, PollinationsClient, resolve_images};
use folio::layout::{PageBody, paginate};
use folio::model::Report;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Report JSON to Word document converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio report.json report.docx    Export a report to DOCX
    folio report.json                Export next to the input, conventional name
    folio -p report.json             Print the estimated page layout
    folio -i report.json             Show report structure")]
struct Cli {
    /// Input report JSON
    #[arg(value_name = "REPORT")]
    input: String,

    /// Output file (defaults to the conventional report filename)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Print the estimated page layout instead of exporting
    #[arg(short, long)]
    preview: bool,

    /// Show report structure without converting
    #[arg(short, long)]
    info: bool,

    /// Body font size in points
    #[arg(long, value_name = "PT")]
    content_size: Option<u32>,

    /// Chapter heading font size in points
    #[arg(long, value_name = "PT")]
    chapter_size: Option<u32>,

    /// Skip image fetching (missing images are omitted)
    #[arg(long)]
    offline: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.preview {
        show_preview(&cli.input)
    } else if cli.info {
        show_info(&cli.input)
    } else {
        convert(&cli).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_report(path: &str) -> Result<Report, String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    Report::from_json(&json).map_err(|e| e.to_string())
}

fn show_info(path: &str) -> Result<(), String> {
    let report = load_report(path)?;

    println!("File: {path}");
    println!("Title: {}", report.title);
    println!("Abstract words: {}", folio::text::word_count(&report.abstract_text));
    println!("Chapters: {}", report.chapters.len());
    for chapter in &report.chapters {
        println!(
            "  {}. {} ({} subsections)",
            chapter.number,
            chapter.title,
            chapter.subsections.len()
        );
    }
    println!("References: {}", report.references.len());

    Ok(())
}

fn show_preview(path: &str) -> Result<(), String> {
    let report = load_report(path)?;

    for page in paginate(&report) {
        let summary = match &page.body {
            PageBody::Title { heading, .. } => format!("title page: {heading}"),
            PageBody::Toc { rows } => format!("table of contents ({} rows)", rows.len()),
            PageBody::Section { heading, elements } => match heading {
                Some(heading) => format!("{heading} ({} elements)", elements.len()),
                None => format!("chapter content ({} elements)", elements.len()),
            },
            PageBody::References { entries, .. } => {
                format!("references ({} entries)", entries.len())
            }
        };
        println!("page {:>3}  {summary}", page.number);
    }

    Ok(())
}

async fn convert(cli: &Cli) -> Result<(), String> {
    let report = load_report(&cli.input)?;

    let images = if cli.offline {
        resolve_images(&report, &NoFetch).await
    } else {
        resolve_images(&report, &PollinationsClient::new()).await
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| report_filename(&report.title));

    let mut file = std::fs::File::create(&output).map_err(|e| format!("{output}: {e}"))?;
    DocxExporter::new()
        .with_config(DocxConfig {
            content_pt: cli.content_size,
            chapter_pt: cli.chapter_size,
            timestamp: None,
        })
        .export(&report, &images, &mut file)
        .map_err(|e| e.to_string())?;

    println!("wrote {output}");
    Ok(())
}
