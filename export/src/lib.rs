//! FILENAME: export/src/lib.rs
//! PURPOSE: Export coordinator for offers.
//! CONTEXT: The single entry point the host application calls. Validates
//! the offer, aggregates totals exactly once, dispatches to the requested
//! renderer and wraps the result into a named downloadable artifact. Every
//! failure is recovered here into one structured `ExportError`; export is a
//! deterministic transform of already-valid data, so nothing is retried.

mod error;

pub use error::ExportError;

use engine::{format_date, offer_total, Offer};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Target format of one export call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Document,
    Workbook,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Document => "pdf",
            ExportFormat::Workbook => "xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Document => PDF_CONTENT_TYPE,
            ExportFormat::Workbook => XLSX_CONTENT_TYPE,
        }
    }
}

/// A named, downloadable export result.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Renders one offer into the requested format.
pub fn export(offer: &Offer, format: ExportFormat) -> Result<Artifact, ExportError> {
    if offer.address.trim().is_empty() {
        return Err(ExportError::MissingAddress);
    }

    let totals = offer_total(offer);
    log::debug!(
        "exporting offer {} ({} rooms) as {:?}",
        offer.id,
        offer.rooms.len(),
        format
    );

    let bytes = match format {
        ExportFormat::Document => document::render_document(offer, &totals)?,
        ExportFormat::Workbook => workbook::build_workbook(offer, &totals)?,
    };

    let file_name = file_name(offer, format);
    log::info!(
        "exported offer {} to {} ({} bytes)",
        offer.id,
        file_name,
        bytes.len()
    );

    Ok(Artifact {
        file_name,
        content_type: format.content_type(),
        bytes,
    })
}

/// Suggested download name: `КП_<address>_<DD.MM.YYYY>.<ext>` with
/// path-hostile characters in the address replaced.
pub fn file_name(offer: &Offer, format: ExportFormat) -> String {
    format!(
        "КП_{}_{}.{}",
        sanitize_for_file_name(&offer.address),
        format_date(&offer.created_at),
        format.extension()
    )
}

fn sanitize_for_file_name(address: &str) -> String {
    address
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
