//! FILENAME: document/src/pdf/writer.rs
//! PURPOSE: Assembles laid-out pages into a complete PDF document.
//! CONTEXT: Object layout is fixed: catalog, page tree, the shared font
//! encoding, the regular and bold fonts, then one page/content pair per
//! page. The output embeds no timestamps, so identical input pages produce
//! identical bytes.

use super::content::page_content;
use super::encoding::differences;
use super::objects::ObjectWriter;
use crate::ops::{Page, PAGE_HEIGHT, PAGE_WIDTH};

const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const ENCODING_ID: u32 = 3;
const FONT_REGULAR_ID: u32 = 4;
const FONT_BOLD_ID: u32 = 5;
const FIRST_PAGE_ID: u32 = 6;

/// Serializes pages into a self-contained PDF byte vector.
pub fn write_pdf(pages: &[Page]) -> Vec<u8> {
    let mut w = ObjectWriter::new();

    w.begin_object(CATALOG_ID);
    w.write(&format!("<< /Type /Catalog /Pages {} 0 R >>\n", PAGES_ID));
    w.end_object();

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", FIRST_PAGE_ID + 2 * i as u32))
        .collect();
    w.begin_object(PAGES_ID);
    w.write(&format!(
        "<< /Type /Pages /Kids [ {} ] /Count {} >>\n",
        kids.join(" "),
        pages.len()
    ));
    w.end_object();

    w.begin_object(ENCODING_ID);
    w.write(&format!(
        "<< /Type /Encoding /BaseEncoding /WinAnsiEncoding /Differences {} >>\n",
        differences()
    ));
    w.end_object();

    for (id, base_font) in [
        (FONT_REGULAR_ID, "Helvetica"),
        (FONT_BOLD_ID, "Helvetica-Bold"),
    ] {
        w.begin_object(id);
        w.write(&format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding {} 0 R >>\n",
            base_font, ENCODING_ID
        ));
        w.end_object();
    }

    for (i, page) in pages.iter().enumerate() {
        let page_id = FIRST_PAGE_ID + 2 * i as u32;
        let content_id = page_id + 1;

        w.begin_object(page_id);
        w.write(&format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] \
             /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> /Contents {} 0 R >>\n",
            PAGES_ID, PAGE_WIDTH, PAGE_HEIGHT, FONT_REGULAR_ID, FONT_BOLD_ID, content_id
        ));
        w.end_object();

        w.write_stream_object(content_id, &page_content(page));
    }

    w.finish(CATALOG_ID)
}
