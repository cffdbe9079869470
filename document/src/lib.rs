//! FILENAME: document/src/lib.rs
//! PURPOSE: Main library entry point for the printable document renderer.
//! CONTEXT: Splits the work into a layout engine that emits pages of draw
//! ops and a PDF backend that serializes them, so pagination logic never
//! touches file-format details.

pub mod context;
pub mod error;
pub mod layout;
pub mod ops;
pub mod pdf;
pub mod table;

pub use context::RenderContext;
pub use error::RenderError;
pub use layout::layout_offer;
pub use ops::{DrawOp, Page};
pub use table::{flow_table, Align, Column, TableSpec};

use engine::{Offer, OfferTotal};

/// Renders an offer and its precomputed totals into a complete PDF.
pub fn render_document(offer: &Offer, totals: &OfferTotal) -> Result<Vec<u8>, RenderError> {
    let pages = layout_offer(offer, totals)?;
    Ok(pdf::write_pdf(&pages))
}
