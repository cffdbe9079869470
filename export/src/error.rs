//! FILENAME: export/src/error.rs

use document::RenderError;
use thiserror::Error;
use workbook::WorkbookError;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The file name is derived from the address, so an offer without one is
    /// rejected before any rendering work begins.
    #[error("offer has no address, cannot form an export file name")]
    MissingAddress,

    #[error("document render failed: {0}")]
    Render(#[from] RenderError),

    #[error("workbook build failed: {0}")]
    Workbook(#[from] WorkbookError),
}
