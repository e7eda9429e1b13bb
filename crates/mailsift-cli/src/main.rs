use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use mailsift_core::{EmailReport, PdfBackend};
use mailsift_ingest::IngestError;
use tracing_subscriber::EnvFilter;

mod output;

/// Exit status when no PDF backend is compiled in. Document errors are
/// reported in the JSON body and still exit 0.
const EXIT_NO_PDF_SUPPORT: u8 = 1;

/// Extract email addresses from the text of a PDF document.
///
/// Prints one JSON line: {"success":true,"emails":[...]} or
/// {"success":false,"error":"..."}.
#[derive(Parser, Debug)]
#[command(name = "mailsift", version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file to scan
    pdf_path: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let backend = mailsift_ingest::pdf_backend();
    let mut stdout = std::io::stdout().lock();
    let status = run(&cli.pdf_path, backend, &mut stdout)?;

    Ok(ExitCode::from(status))
}

/// Log to stderr so stdout carries nothing but the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(
    pdf_path: &Path,
    backend: Result<Box<dyn PdfBackend>, IngestError>,
    writer: &mut dyn Write,
) -> anyhow::Result<u8> {
    let backend = match backend {
        Ok(backend) => backend,
        Err(e) => {
            output::write_report(writer, &EmailReport::failure(&e))?;
            return Ok(EXIT_NO_PDF_SUPPORT);
        }
    };

    let report = mailsift_ingest::report_for(pdf_path, backend.as_ref());
    output::write_report(writer, &report)?;
    Ok(0)
}
