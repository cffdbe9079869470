//! FILENAME: document/src/ops.rs
//! PURPOSE: Page geometry and the draw instruction model.
//! CONTEXT: The layout engine emits pages of typed draw ops; the PDF backend
//! consumes them without knowing anything about offers or totals. All
//! coordinates are in points with the origin at the top-left of the page
//! (the backend flips the vertical axis into PDF space).

use engine::Color;

/// A4 page size in points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;

/// Uniform page margin.
pub const MARGIN: f64 = 40.0;

/// Horizontal space available to content.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

/// Minimum space that must remain below the cursor for a room heading to be
/// placed on the current page; otherwise the heading moves to a fresh page
/// so it is never orphaned from its tables.
pub const HEADING_MIN_SPACE: f64 = 40.0;

/// Remaining space under which the render starts a fresh page between rooms
/// and before the grand total block.
pub const LATE_PAGE_MIN_SPACE: f64 = 80.0;

pub const TITLE_SIZE: f64 = 16.0;
pub const HEADING_SIZE: f64 = 12.0;
pub const BODY_SIZE: f64 = 9.0;
pub const FOOTER_SIZE: f64 = 8.0;

/// Vertical advance of one body text line.
pub const LINE_HEIGHT: f64 = 14.0;

/// Vertical advance of one line inside a table cell.
pub const TABLE_LINE_HEIGHT: f64 = 12.0;

/// Inner padding above and below table cell text.
pub const CELL_PADDING: f64 = 3.0;

/// One positioned draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text; `y` is the baseline.
    Text {
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        color: Color,
        text: String,
    },
    /// A filled rectangle; `y` is the top edge.
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    /// A stroked line segment.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
}

/// One page of draw instructions, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}
