//! FILENAME: tests/common/mod.rs
//! Offer fixtures shared by the export integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use engine::{DiscountKind, LineItem, Offer, Room, Unit};

/// One-room offer with hand-checked totals:
/// works 20 610.00, materials 5 700.00, grand total 26 310.00.
pub fn basic_offer() -> Offer {
    let created = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
    let mut offer = Offer::new(1, "ул. Ленина, д. 5", created)
        .with_customer("Иванов И. И.", Some("+7 900 000-00-00".to_string()));
    let mut room = Room::new(1, "Гостиная", 20.0, 45.0);
    room.works
        .push(LineItem::new(1, "Штукатурка стен", 45.8, Unit::Area, 450.0));
    room.materials
        .push(LineItem::new(2, "Штукатурка Кнауф", 15.0, Unit::Count, 380.0));
    offer.rooms.push(room);
    offer
}

/// Offer large enough to overflow one printed page.
pub fn multi_room_offer(rooms: usize, items_per_room: usize) -> Offer {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut offer = Offer::new(2, "пр. Мира, д. 10, кв. 44", created);
    for r in 0..rooms {
        let mut room = Room::new(r as u64 + 1, format!("Комната {}", r + 1), 15.0, 38.0);
        for i in 0..items_per_room {
            room.works.push(LineItem::new(
                (r * 100 + i) as u64,
                format!("Выравнивание стен, участок {}", i + 1),
                12.5,
                Unit::Area,
                520.0,
            ));
            room.materials.push(LineItem::new(
                (r * 100 + i + 50) as u64,
                format!("Смесь цементная, партия {}", i + 1),
                4.0,
                Unit::Mass,
                310.0,
            ));
        }
        offer.rooms.push(room);
    }
    offer
}

/// Two rooms whose names share the same first 25 characters.
pub fn collision_offer() -> Offer {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut offer = Offer::new(3, "ул. Строителей, д. 1", created);
    let shared = "Помещение с одинаковым длинным именем";
    for (id, floor) in [(1u64, 18.0), (2, 22.0)] {
        let mut room = Room::new(id, shared, floor, 40.0);
        room.works
            .push(LineItem::new(id * 10, "Грунтовка", floor, Unit::Area, 90.0));
        offer.rooms.push(room);
    }
    offer
}

/// One populated room followed by a room with no line items.
pub fn offer_with_empty_room() -> Offer {
    let mut offer = basic_offer();
    offer.rooms.push(Room::new(2, "Кладовая", 3.0, 12.0));
    offer
}

/// Basic offer with a 10% offer-level discount.
pub fn discounted_offer() -> Offer {
    let mut offer = basic_offer();
    offer.discount = Some(10.0);
    offer.discount_kind = DiscountKind::Percent;
    offer
}
