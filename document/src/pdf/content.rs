//! FILENAME: document/src/pdf/content.rs
//! PURPOSE: Serializes pages of draw ops into PDF content streams.
//! CONTEXT: The layout works in top-left coordinates; PDF puts the origin
//! at the bottom-left, so every vertical coordinate is flipped here.
//! Streams are left uncompressed to keep the output deterministic and
//! inspectable.

use super::encoding::encode_text;
use crate::ops::{DrawOp, Page, PAGE_HEIGHT};
use engine::Color;

/// Builds the content stream for one page.
pub fn page_content(page: &Page) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::FillRect { x, y, w, h, color } => {
                push_str(
                    &mut out,
                    &format!(
                        "{} rg\n{:.2} {:.2} {:.2} {:.2} re\nf\n",
                        rgb(color),
                        x,
                        PAGE_HEIGHT - y - h,
                        w,
                        h
                    ),
                );
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                push_str(
                    &mut out,
                    &format!(
                        "{} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\n",
                        rgb(color),
                        width,
                        x1,
                        PAGE_HEIGHT - y1,
                        x2,
                        PAGE_HEIGHT - y2
                    ),
                );
            }
            DrawOp::Text {
                x,
                y,
                size,
                bold,
                color,
                text,
            } => {
                let font = if *bold { "/F2" } else { "/F1" };
                push_str(
                    &mut out,
                    &format!(
                        "BT\n{} {:.2} Tf\n{} rg\n{:.2} {:.2} Td\n(",
                        font,
                        size,
                        rgb(color),
                        x,
                        PAGE_HEIGHT - y
                    ),
                );
                push_escaped(&mut out, text);
                push_str(&mut out, ") Tj\nET\n");
            }
        }
    }
    out
}

fn push_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(s.as_bytes());
}

/// Encodes the text and escapes the PDF string delimiters.
fn push_escaped(out: &mut Vec<u8>, text: &str) {
    for byte in encode_text(text) {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            _ => out.push(byte),
        }
    }
}

fn rgb(color: &Color) -> String {
    format!(
        "{:.3} {:.3} {:.3}",
        color.r as f64 / 255.0,
        color.g as f64 / 255.0,
        color.b as f64 / 255.0
    )
}
