//! FILENAME: document/src/table.rs
//! PURPOSE: Table-flow primitive for the document layout.
//! CONTEXT: Owns its own page breaks: whenever a row does not fit, it opens
//! a fresh page and repeats the header row there, so a table can span any
//! number of pages. The context cursor ends just below the last drawn row.

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::ops::{BODY_SIZE, CELL_PADDING, DrawOp, MARGIN, TABLE_LINE_HEIGHT};
use crate::pdf::metrics::text_width;
use engine::{Color, TABLE_RULE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub title: String,
    pub width: f64,
    pub align: Align,
}

impl Column {
    pub fn new(title: impl Into<String>, width: f64, align: Align) -> Self {
        Column {
            title: title.into(),
            width,
            align,
        }
    }
}

/// Column set and header fill of one table.
pub struct TableSpec {
    pub columns: Vec<Column>,
    pub header_fill: Color,
}

/// Flows header and body rows through the context. `room_index` only feeds
/// error context; each entry in `rows` must have one cell per column.
pub fn flow_table(
    ctx: &mut RenderContext,
    spec: &TableSpec,
    rows: &[Vec<String>],
    room_index: usize,
) -> Result<(), RenderError> {
    let header_height = TABLE_LINE_HEIGHT + 2.0 * CELL_PADDING;

    // keep the header attached to at least the first row
    if let Some(first) = rows.first() {
        let first_height = row_height(spec, first);
        if ctx.remaining() < header_height + first_height {
            ctx.new_page();
        }
    }
    draw_header(ctx, spec, header_height);

    for (item_index, row) in rows.iter().enumerate() {
        let height = row_height(spec, row);
        if header_height + height > ctx.body_height() {
            return Err(RenderError::RowTooTall {
                room_index,
                item_index,
            });
        }
        if ctx.remaining() < height {
            ctx.new_page();
            draw_header(ctx, spec, header_height);
        }
        draw_row(ctx, spec, row, height);
    }
    Ok(())
}

fn draw_header(ctx: &mut RenderContext, spec: &TableSpec, height: f64) {
    let top = ctx.cursor_y;
    ctx.push(DrawOp::FillRect {
        x: MARGIN,
        y: top,
        w: spec.columns.iter().map(|c| c.width).sum(),
        h: height,
        color: spec.header_fill,
    });

    let baseline = top + CELL_PADDING + BODY_SIZE;
    let mut x = MARGIN;
    for column in &spec.columns {
        match column.align {
            Align::Left => {
                ctx.text_at(x + CELL_PADDING, baseline, BODY_SIZE, true, Color::black(), &column.title)
            }
            Align::Right => ctx.text_at_right(
                x + column.width - CELL_PADDING,
                baseline,
                BODY_SIZE,
                true,
                Color::black(),
                &column.title,
            ),
        }
        x += column.width;
    }
    ctx.advance(height);
}

fn draw_row(ctx: &mut RenderContext, spec: &TableSpec, row: &[String], height: f64) {
    let top = ctx.cursor_y;
    let mut x = MARGIN;
    for (column, cell) in spec.columns.iter().zip(row) {
        let avail = column.width - 2.0 * CELL_PADDING;
        for (line_index, line) in wrap_cell(cell, avail).iter().enumerate() {
            let baseline = top + CELL_PADDING + BODY_SIZE + line_index as f64 * TABLE_LINE_HEIGHT;
            match column.align {
                Align::Left => {
                    ctx.text_at(x + CELL_PADDING, baseline, BODY_SIZE, false, Color::black(), line)
                }
                Align::Right => ctx.text_at_right(
                    x + column.width - CELL_PADDING,
                    baseline,
                    BODY_SIZE,
                    false,
                    Color::black(),
                    line,
                ),
            }
        }
        x += column.width;
    }
    ctx.advance(height);

    let width: f64 = spec.columns.iter().map(|c| c.width).sum();
    ctx.push(DrawOp::Line {
        x1: MARGIN,
        y1: ctx.cursor_y,
        x2: MARGIN + width,
        y2: ctx.cursor_y,
        width: 0.4,
        color: TABLE_RULE,
    });
}

fn row_height(spec: &TableSpec, row: &[String]) -> f64 {
    let lines = spec
        .columns
        .iter()
        .zip(row)
        .map(|(column, cell)| wrap_cell(cell, column.width - 2.0 * CELL_PADDING).len())
        .max()
        .unwrap_or(1);
    lines as f64 * TABLE_LINE_HEIGHT + 2.0 * CELL_PADDING
}

/// Greedy word wrap into the available cell width. A single word wider than
/// the cell is broken at character level so no text ever overflows a column.
fn wrap_cell(text: &str, avail: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate, BODY_SIZE, false) <= avail {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width(word, BODY_SIZE, false) <= avail {
            current = word.to_string();
        } else {
            current = break_word(word, avail, &mut lines);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, avail: f64, lines: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if text_width(&chunk, BODY_SIZE, false) > avail && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}
