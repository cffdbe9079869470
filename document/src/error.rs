//! FILENAME: document/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Loop guard of the table-flow primitive: a single row taller than the
    /// usable page body would force an endless page-break cycle. Indices
    /// locate the offending line item for the caller.
    #[error("table row too tall for one page (room {room_index}, item {item_index})")]
    RowTooTall { room_index: usize, item_index: usize },
}
