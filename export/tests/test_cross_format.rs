//! FILENAME: tests/test_cross_format.rs
//! The two export formats must agree structurally and numerically: the
//! grand total printed in the document equals the grand total written into
//! the workbook summary, for any offer.

mod common;

use calamine::{open_workbook, Data, Reader, Xlsx};
use common::{basic_offer, collision_offer, discounted_offer, offer_with_empty_room};
use document::pdf::encoding::encode_text;
use engine::{format_currency, offer_total, round2};
use export::{export, ExportFormat};
use std::io::Write;

fn read_back(bytes: &[u8]) -> Xlsx<std::io::BufReader<std::fs::File>> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    open_workbook(file.path()).unwrap()
}

/// Number in the rightmost summary column of the row labeled `Итого`.
fn summary_grand_total(bytes: &[u8]) -> f64 {
    let mut workbook = read_back(bytes);
    let range = workbook.worksheet_range("Сводка").unwrap();
    for row in range.rows() {
        if matches!(row.first(), Some(Data::String(s)) if s == "Итого") {
            if let Some(Data::Float(f)) = row.get(3) {
                return *f;
            }
        }
    }
    panic!("summary sheet has no grand total row");
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_basic_offer_totals_agree() {
    let offer = basic_offer();
    let totals = offer_total(&offer);
    assert_eq!(round2(totals.grand_total), 26310.00);

    let workbook = export(&offer, ExportFormat::Workbook).unwrap();
    assert_eq!(summary_grand_total(&workbook.bytes), 26310.00);

    let document = export(&offer, ExportFormat::Document).unwrap();
    let printed = format!("Итого по смете: {}", format_currency(26310.00));
    assert!(contains_subslice(&document.bytes, &encode_text(&printed)));
}

#[test]
fn test_discounted_offer_totals_agree() {
    let offer = discounted_offer();
    let totals = offer_total(&offer);
    assert_eq!(round2(totals.grand_total), 23679.00);

    let workbook = export(&offer, ExportFormat::Workbook).unwrap();
    assert_eq!(summary_grand_total(&workbook.bytes), 23679.00);

    let document = export(&offer, ExportFormat::Document).unwrap();
    let printed = format!("Итого по смете: {}", format_currency(23679.00));
    assert!(contains_subslice(&document.bytes, &encode_text(&printed)));
}

#[test]
fn test_workbook_structure_is_idempotent() {
    let offer = offer_with_empty_room();

    let first = export(&offer, ExportFormat::Workbook).unwrap();
    let second = export(&offer, ExportFormat::Workbook).unwrap();

    let names_first = read_back(&first.bytes).sheet_names().to_vec();
    let names_second = read_back(&second.bytes).sheet_names().to_vec();
    assert_eq!(names_first, names_second);
    assert_eq!(
        summary_grand_total(&first.bytes),
        summary_grand_total(&second.bytes)
    );
}

#[test]
fn test_empty_room_appears_in_both_outputs_with_zero_total() {
    let offer = offer_with_empty_room();
    let totals = offer_total(&offer);
    assert_eq!(totals.rooms[1].room_total, 0.0);

    let workbook = export(&offer, ExportFormat::Workbook).unwrap();
    let mut read = read_back(&workbook.bytes);
    let names = read.sheet_names().to_vec();
    assert!(names.iter().any(|n| n == "2. Кладовая"));
    let summary = read.worksheet_range("Сводка").unwrap();
    let mut room_row_total = None;
    for row in summary.rows() {
        if matches!(row.first(), Some(Data::String(s)) if s == "Кладовая") {
            if let Some(Data::Float(f)) = row.get(3) {
                room_row_total = Some(*f);
            }
        }
    }
    assert_eq!(room_row_total, Some(0.0));

    let document = export(&offer, ExportFormat::Document).unwrap();
    assert!(contains_subslice(&document.bytes, &encode_text("2. Кладовая")));
}

#[test]
fn test_colliding_room_names_get_distinct_sheets() {
    let offer = collision_offer();
    let workbook = export(&offer, ExportFormat::Workbook).unwrap();

    let names = read_back(&workbook.bytes).sheet_names().to_vec();
    assert_eq!(names.len(), 3);
    assert_ne!(names[1], names[2]);

    // both sheets keep the shared 25-character room prefix
    let prefix: String = "Помещение с одинаковым длинным именем"
        .chars()
        .take(25)
        .collect();
    assert!(names[1].contains(prefix.trim_end()));
    assert!(names[2].contains(prefix.trim_end()));
}

#[test]
fn test_grand_total_equals_sum_of_room_totals_in_summary() {
    let offer = offer_with_empty_room();
    let workbook = export(&offer, ExportFormat::Workbook).unwrap();

    let mut read = read_back(&workbook.bytes);
    let range = read.worksheet_range("Сводка").unwrap();

    let mut room_rows = Vec::new();
    let mut grand = None;
    let mut in_table = false;
    for row in range.rows() {
        match row.first() {
            Some(Data::String(s)) if s == "Помещение" => in_table = true,
            Some(Data::String(s)) if s == "Итого" => {
                in_table = false;
                if let Some(Data::Float(f)) = row.get(3) {
                    grand = Some(*f);
                }
            }
            Some(Data::String(_)) if in_table => {
                if let Some(Data::Float(f)) = row.get(3) {
                    room_rows.push(*f);
                }
            }
            _ => {}
        }
    }

    let summed: f64 = room_rows.iter().sum();
    assert_eq!(grand, Some(round2(summed)));
}
