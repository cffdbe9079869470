//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the estimate engine.
//! CONTEXT: Re-exports the offer data model, aggregation functions and
//! formatting utilities for use by the renderer crates.

pub mod number_format;
pub mod offer;
pub mod style;
pub mod totals;

// Re-export commonly used types at the crate root
pub use number_format::{format_area, format_currency, format_date, format_quantity};
pub use offer::{DiscountKind, LineItem, Offer, Room, Unit};
pub use style::{Color, MATERIALS_HEADER_FILL, MUTED_TEXT, TABLE_RULE, WORKS_HEADER_FILL};
pub use totals::{line_total, offer_total, room_total, round2, OfferTotal, RoomTotal};
