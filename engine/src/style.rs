//! FILENAME: engine/src/style.rs
//! PURPOSE: Shared colors for the two export renderers.
//! CONTEXT: Works and materials tables must be distinguishable at a glance
//! in both the printable document and the workbook, so the palette lives
//! here and both renderers consume it.

use serde::{Deserialize, Serialize};

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn black() -> Self {
        Color::new(0, 0, 0)
    }

    /// Packed `0xRRGGBB` value, the form spreadsheet writers take.
    pub const fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Fill behind the header row of a works table (light blue).
pub const WORKS_HEADER_FILL: Color = Color::new(0xD9, 0xE2, 0xF3);

/// Fill behind the header row of a materials table (light green).
pub const MATERIALS_HEADER_FILL: Color = Color::new(0xE2, 0xEF, 0xDA);

/// Rule color for table grid lines and separators.
pub const TABLE_RULE: Color = Color::new(0xB0, 0xB0, 0xB0);

/// Muted gray used for secondary text (area lines, page footers).
pub const MUTED_TEXT: Color = Color::new(0x60, 0x60, 0x60);
