//! FILENAME: workbook/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    /// The index prefix makes collisions impossible by construction; this
    /// guards against a silent overwrite if the naming rule ever changes.
    #[error("duplicate sheet name after truncation: {0}")]
    DuplicateSheetName(String),
}
