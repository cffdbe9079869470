//! FILENAME: workbook/src/lib.rs
//! PURPOSE: Workbook renderer for offers.
//! CONTEXT: Produces the XLSX twin of the printable document: one summary
//! sheet plus one sheet per room, structurally mirroring the document so
//! totals extracted from either format agree.

mod builder;
mod error;

pub use builder::{build_workbook, room_sheet_name, SUMMARY_SHEET_NAME};
pub use error::WorkbookError;

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use chrono::{TimeZone, Utc};
    use engine::{offer_total, round2, LineItem, Offer, Room, Unit};
    use std::io::Write;

    fn sample_offer() -> Offer {
        let created = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
        let mut offer = Offer::new(1, "ул. Ленина, д. 5", created);
        let mut room = Room::new(1, "Гостиная", 20.0, 45.0);
        room.works
            .push(LineItem::new(1, "Штукатурка стен", 45.8, Unit::Area, 450.0));
        room.materials
            .push(LineItem::new(2, "Штукатурка Кнауф", 15.0, Unit::Count, 380.0));
        offer.rooms.push(room);
        offer
    }

    fn read_back(bytes: &[u8]) -> Xlsx<std::io::BufReader<std::fs::File>> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        open_workbook(file.path()).unwrap()
    }

    fn cell_number(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<f64> {
        match range.get_value((row, col)) {
            Some(Data::Float(f)) => Some(*f),
            Some(Data::Int(i)) => Some(*i as f64),
            _ => None,
        }
    }

    #[test]
    fn summary_sheet_comes_first() {
        let offer = sample_offer();
        let totals = offer_total(&offer);
        let bytes = build_workbook(&offer, &totals).unwrap();

        let workbook = read_back(&bytes);
        let names = workbook.sheet_names().to_vec();
        assert_eq!(names[0], SUMMARY_SHEET_NAME);
        assert_eq!(names[1], "1. Гостиная");
    }

    #[test]
    fn summary_grand_total_matches_engine() {
        let offer = sample_offer();
        let totals = offer_total(&offer);
        let bytes = build_workbook(&offer, &totals).unwrap();

        let mut workbook = read_back(&bytes);
        let range = workbook.worksheet_range(SUMMARY_SHEET_NAME).unwrap();

        let mut found = None;
        for (row_idx, row) in range.rows().enumerate() {
            if matches!(row.first(), Some(Data::String(s)) if s == "Итого") {
                found = cell_number(&range, row_idx as u32, 3);
            }
        }
        assert_eq!(found, Some(round2(totals.grand_total)));
        assert_eq!(found, Some(26310.00));
    }

    #[test]
    fn room_sheet_keeps_numeric_and_text_columns_separate() {
        let offer = sample_offer();
        let totals = offer_total(&offer);
        let bytes = build_workbook(&offer, &totals).unwrap();

        let mut workbook = read_back(&bytes);
        let range = workbook.worksheet_range("1. Гостиная").unwrap();

        // first works row: quantity is a number, unit label its own cell
        let mut checked = false;
        for (row_idx, row) in range.rows().enumerate() {
            if matches!(row.first(), Some(Data::String(s)) if s == "Штукатурка стен") {
                assert_eq!(cell_number(&range, row_idx as u32, 1), Some(45.8));
                assert_eq!(
                    range.get_value((row_idx as u32, 2)),
                    Some(&Data::String("м²".to_string()))
                );
                assert_eq!(cell_number(&range, row_idx as u32, 3), Some(450.0));
                assert_eq!(cell_number(&range, row_idx as u32, 4), Some(20610.0));
                checked = true;
            }
        }
        assert!(checked);
    }

    #[test]
    fn empty_room_sheet_has_no_tables() {
        let created = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
        let mut offer = Offer::new(1, "ул. Ленина, д. 5", created);
        offer.rooms.push(Room::new(1, "Кладовая", 3.0, 12.0));
        let totals = offer_total(&offer);
        let bytes = build_workbook(&offer, &totals).unwrap();

        let mut workbook = read_back(&bytes);
        let range = workbook.worksheet_range("1. Кладовая").unwrap();
        let strings: Vec<String> = range
            .rows()
            .flatten()
            .filter_map(|c| match c {
                Data::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect();

        assert!(strings.iter().any(|s| s == "1. Кладовая"));
        assert!(strings.iter().all(|s| s != "Наименование работ"));
        assert!(strings.iter().all(|s| s != "Наименование материалов"));
        assert!(strings.iter().any(|s| s == "Итого по помещению"));
    }

    #[test]
    fn colliding_room_names_produce_distinct_sheets() {
        let created = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
        let mut offer = Offer::new(1, "ул. Ленина, д. 5", created);
        let shared = "Помещение с очень длинным общим префиксом — раз";
        offer.rooms.push(Room::new(1, shared, 10.0, 25.0));
        offer.rooms.push(Room::new(2, shared, 12.0, 28.0));
        let totals = offer_total(&offer);
        let bytes = build_workbook(&offer, &totals).unwrap();

        let workbook = read_back(&bytes);
        let names = workbook.sheet_names().to_vec();
        assert_eq!(names.len(), 3);
        assert_ne!(names[1], names[2]);
    }
}
