//! FILENAME: workbook/src/builder.rs
//! PURPOSE: Builds the multi-sheet XLSX workbook for an offer.
//! CONTEXT: Sheet 1 is the summary, then one sheet per room in display
//! order. Monetary and area cells are written as numbers with number
//! formats, never as pre-formatted strings, so spreadsheet consumers can
//! keep computing; only the printable document merges quantity and unit
//! into one display string.

use crate::WorkbookError;
use engine::{
    format_date, line_total, round2, Color, DiscountKind, LineItem, Offer, OfferTotal, Room,
    RoomTotal, MATERIALS_HEADER_FILL, WORKS_HEADER_FILL,
};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, Worksheet};
use std::collections::HashSet;

/// Summary sheet name, fixed by the document layout of the original output.
pub const SUMMARY_SHEET_NAME: &str = "Сводка";

/// Room names longer than this are cut before the index prefix is applied.
const ROOM_NAME_CAP: usize = 25;

/// Hard limit the XLSX format puts on sheet names.
const SHEET_NAME_LIMIT: usize = 31;

/// Builds the complete workbook and returns it as an in-memory buffer.
pub fn build_workbook(offer: &Offer, totals: &OfferTotal) -> Result<Vec<u8>, WorkbookError> {
    let mut workbook = XlsxWorkbook::new();

    summary_sheet(workbook.add_worksheet(), offer, totals)?;

    let mut used_names = HashSet::new();
    for (index, (room, room_totals)) in offer.rooms.iter().zip(&totals.rooms).enumerate() {
        let name = room_sheet_name(index, &room.name);
        if !used_names.insert(name.clone()) {
            return Err(WorkbookError::DuplicateSheetName(name));
        }
        room_sheet(workbook.add_worksheet(), &name, index, room, room_totals)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Sheet name for room `index` (0-based): `<1-based index>. <name>`, with
/// the room name truncated to 25 characters, characters the format forbids
/// replaced and the whole name clamped to the 31-character limit. The index
/// prefix keeps names distinct even when truncated names collide.
pub fn room_sheet_name(index: usize, name: &str) -> String {
    let truncated: String = name.chars().take(ROOM_NAME_CAP).collect();
    let sanitized: String = truncated
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' | '\'' => ' ',
            _ => c,
        })
        .collect();
    let full = format!("{}. {}", index + 1, sanitized.trim());
    full.trim_end().chars().take(SHEET_NAME_LIMIT).collect()
}

fn summary_sheet(
    sheet: &mut Worksheet,
    offer: &Offer,
    totals: &OfferTotal,
) -> Result<(), WorkbookError> {
    sheet.set_name(SUMMARY_SHEET_NAME)?;
    sheet.set_column_width(0, 35.0)?;
    sheet.set_column_width(1, 12.0)?;
    sheet.set_column_width(2, 12.0)?;
    sheet.set_column_width(3, 18.0)?;

    sheet.write_string_with_format(0, 0, "Коммерческое предложение", &title_format())?;

    let mut row: u32 = 1;
    sheet.write_string(row, 0, "Объект:")?;
    sheet.write_string(row, 1, &offer.address)?;
    row += 1;
    if let Some(name) = &offer.customer_name {
        sheet.write_string(row, 0, "Заказчик:")?;
        sheet.write_string(row, 1, name)?;
        row += 1;
    }
    if let Some(phone) = &offer.customer_phone {
        sheet.write_string(row, 0, "Телефон:")?;
        sheet.write_string(row, 1, phone)?;
        row += 1;
    }
    sheet.write_string(row, 0, "Дата:")?;
    sheet.write_string(row, 1, &format_date(&offer.created_at))?;
    row += 2;

    let header = bold_format();
    sheet.write_string_with_format(row, 0, "Помещение", &header)?;
    sheet.write_string_with_format(row, 1, "Пол, м²", &header)?;
    sheet.write_string_with_format(row, 2, "Стены, м²", &header)?;
    sheet.write_string_with_format(row, 3, "Сумма", &header)?;
    row += 1;

    for (room, room_totals) in offer.rooms.iter().zip(&totals.rooms) {
        sheet.write_string(row, 0, &room.name)?;
        sheet.write_number(row, 1, room.floor_area)?;
        sheet.write_number(row, 2, room.wall_area)?;
        sheet.write_number_with_format(row, 3, round2(room_totals.room_total), &currency_format())?;
        row += 1;
    }
    row += 1; // blank row before the totals

    if let Some(discount) = offer.discount {
        sheet.write_string(row, 0, "Сумма")?;
        sheet.write_number_with_format(row, 3, round2(totals.rooms_total), &currency_format())?;
        row += 1;
        sheet.write_string(row, 0, "Скидка")?;
        match offer.discount_kind {
            DiscountKind::Percent => {
                sheet.write_number_with_format(row, 3, discount, &percent_format())?
            }
            DiscountKind::Absolute => {
                sheet.write_number_with_format(row, 3, round2(discount), &currency_format())?
            }
        };
        row += 1;
    }

    sheet.write_string_with_format(row, 0, "Итого", &bold_format())?;
    sheet.write_number_with_format(row, 3, round2(totals.grand_total), &bold_currency_format())?;

    Ok(())
}

fn room_sheet(
    sheet: &mut Worksheet,
    name: &str,
    index: usize,
    room: &Room,
    totals: &RoomTotal,
) -> Result<(), WorkbookError> {
    sheet.set_name(name)?;
    sheet.set_column_width(0, 45.0)?;
    sheet.set_column_width(1, 10.0)?;
    sheet.set_column_width(2, 8.0)?;
    sheet.set_column_width(3, 16.0)?;
    sheet.set_column_width(4, 16.0)?;

    sheet.write_string_with_format(
        0,
        0,
        &format!("{}. {}", index + 1, room.name),
        &bold_format(),
    )?;
    sheet.write_string(1, 0, "Пол, м²")?;
    sheet.write_number(1, 1, room.floor_area)?;
    sheet.write_string(1, 2, "Стены, м²")?;
    sheet.write_number(1, 3, room.wall_area)?;

    let mut row: u32 = 3;
    if !room.works.is_empty() {
        row = item_block(
            sheet,
            row,
            "Наименование работ",
            WORKS_HEADER_FILL,
            &room.works,
            "Итого работы",
            totals.works_total,
        )?;
        row += 1; // blank row between the blocks
    }
    if !room.materials.is_empty() {
        row = item_block(
            sheet,
            row,
            "Наименование материалов",
            MATERIALS_HEADER_FILL,
            &room.materials,
            "Итого материалы",
            totals.materials_total,
        )?;
        row += 1;
    }

    sheet.write_string_with_format(row, 0, "Итого по помещению", &bold_format())?;
    sheet.write_number_with_format(row, 4, round2(totals.room_total), &bold_currency_format())?;

    Ok(())
}

/// Writes one header + items + subtotal block and returns the row just
/// below the subtotal.
fn item_block(
    sheet: &mut Worksheet,
    start_row: u32,
    name_title: &str,
    fill: Color,
    items: &[LineItem],
    subtotal_label: &str,
    subtotal: f64,
) -> Result<u32, WorkbookError> {
    let header = header_format(fill);
    sheet.write_string_with_format(start_row, 0, name_title, &header)?;
    sheet.write_string_with_format(start_row, 1, "Кол-во", &header)?;
    sheet.write_string_with_format(start_row, 2, "Ед.", &header)?;
    sheet.write_string_with_format(start_row, 3, "Цена", &header)?;
    sheet.write_string_with_format(start_row, 4, "Сумма", &header)?;

    let mut row = start_row + 1;
    for item in items {
        sheet.write_string(row, 0, &item.name)?;
        sheet.write_number(row, 1, item.quantity)?;
        sheet.write_string(row, 2, item.unit.label())?;
        sheet.write_number_with_format(row, 3, round2(item.unit_price), &currency_format())?;
        sheet.write_number_with_format(row, 4, round2(line_total(item)), &currency_format())?;
        row += 1;
    }

    sheet.write_string_with_format(row, 0, subtotal_label, &bold_format())?;
    sheet.write_number_with_format(row, 4, round2(subtotal), &bold_currency_format())?;
    Ok(row + 1)
}

fn title_format() -> Format {
    Format::new().set_bold().set_font_size(14.0)
}

fn bold_format() -> Format {
    Format::new().set_bold()
}

fn header_format(fill: Color) -> Format {
    Format::new()
        .set_bold()
        .set_background_color(rust_xlsxwriter::Color::RGB(fill.to_rgb_u32()))
}

fn currency_format() -> Format {
    Format::new().set_num_format("#,##0.00\" ₽\"")
}

fn bold_currency_format() -> Format {
    currency_format().set_bold()
}

fn percent_format() -> Format {
    Format::new().set_num_format("0.##\"%\"")
}
