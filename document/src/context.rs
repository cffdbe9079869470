//! FILENAME: document/src/context.rs
//! PURPOSE: Mutable render state for one document export.
//! CONTEXT: The vertical cursor and the page list are the only sequential
//! state in the whole engine. They live in this single-owner value which is
//! threaded through the layout call tree, so concurrent exports never share
//! anything.

use crate::ops::{
    DrawOp, Page, FOOTER_SIZE, LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::pdf::metrics::text_width;
use engine::{Color, MUTED_TEXT};

pub struct RenderContext {
    pages: Vec<Page>,
    /// Distance from the top of the current page to the next free position.
    pub cursor_y: f64,
}

impl RenderContext {
    /// Starts a render with one empty page and the cursor at the top margin.
    pub fn new() -> Self {
        RenderContext {
            pages: vec![Page::default()],
            cursor_y: MARGIN,
        }
    }

    /// 0-based index of the page currently being written.
    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    /// Vertical space left between the cursor and the bottom margin.
    pub fn remaining(&self) -> f64 {
        PAGE_HEIGHT - MARGIN - self.cursor_y
    }

    /// Maximum drawable height of a page body; nothing taller can ever fit.
    pub fn body_height(&self) -> f64 {
        PAGE_HEIGHT - 2.0 * MARGIN
    }

    /// Closes the current page and resets the cursor to the top margin.
    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor_y = MARGIN;
    }

    pub fn push(&mut self, op: DrawOp) {
        // pages is never empty; new() seeds the first page
        self.pages.last_mut().unwrap().ops.push(op);
    }

    pub fn advance(&mut self, dy: f64) {
        self.cursor_y += dy;
    }

    /// Draws text at an explicit baseline without touching the cursor.
    pub fn text_at(&mut self, x: f64, baseline: f64, size: f64, bold: bool, color: Color, text: &str) {
        self.push(DrawOp::Text {
            x,
            y: baseline,
            size,
            bold,
            color,
            text: text.to_string(),
        });
    }

    /// Draws one left-aligned line at the cursor and advances past it.
    pub fn line_of_text(&mut self, x: f64, size: f64, bold: bool, color: Color, text: &str) {
        let baseline = self.cursor_y + size;
        self.text_at(x, baseline, size, bold, color, text);
        self.cursor_y = baseline + (LINE_HEIGHT - size).max(3.0);
    }

    /// Draws one line with its right edge at `right`, then advances.
    pub fn line_of_text_right(&mut self, right: f64, size: f64, bold: bool, color: Color, text: &str) {
        let x = right - text_width(text, size, bold);
        self.line_of_text(x, size, bold, color, text);
    }

    /// Draws right-aligned text at an explicit baseline.
    pub fn text_at_right(&mut self, right: f64, baseline: f64, size: f64, bold: bool, color: Color, text: &str) {
        let x = right - text_width(text, size, bold);
        self.text_at(x, baseline, size, bold, color, text);
    }

    /// Finishes the render: stamps a centered page-number footer onto every
    /// page and releases the page list.
    pub fn finish(mut self) -> Vec<Page> {
        let total = self.pages.len();
        for (i, page) in self.pages.iter_mut().enumerate() {
            let label = format!("Страница {} из {}", i + 1, total);
            let x = (PAGE_WIDTH - text_width(&label, FOOTER_SIZE, false)) / 2.0;
            page.ops.push(DrawOp::Text {
                x,
                y: PAGE_HEIGHT - 22.0,
                size: FOOTER_SIZE,
                bold: false,
                color: MUTED_TEXT,
                text: label,
            });
        }
        self.pages
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
