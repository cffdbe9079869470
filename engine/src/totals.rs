//! FILENAME: engine/src/totals.rs
//! PURPOSE: Aggregates line items into room and offer totals.
//! CONTEXT: Pure functions over the read-only offer tree. Totals are
//! computed on demand and never cached; document generation is infrequent
//! and datasets are small (tens of rooms, tens of items per room).

use crate::offer::{DiscountKind, LineItem, Offer, Room};
use serde::{Deserialize, Serialize};

/// Derived totals for a single room. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomTotal {
    pub works_total: f64,
    pub materials_total: f64,
    pub room_total: f64,
}

/// Derived totals for a whole offer, with a `RoomTotal` per room kept in
/// display order so renderers can walk rooms and totals in parallel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferTotal {
    pub rooms: Vec<RoomTotal>,
    /// Sum of all room totals before the offer-level discount.
    pub rooms_total: f64,
    /// Final amount after the offer-level discount.
    pub grand_total: f64,
}

/// Rounds a monetary value to 2 decimal places. Applied only at boundaries
/// where a total is displayed or written to an external format, never
/// mid-computation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Applies a discount to an already-multiplied amount, floored at zero.
/// The same rule serves line items and the offer level: a percent discount
/// scales the amount, an absolute discount subtracts from it. Quantities
/// and unit prices are never mutated.
fn apply_discount(amount: f64, discount: Option<f64>, kind: DiscountKind) -> f64 {
    let discounted = match (discount, kind) {
        (Some(d), DiscountKind::Percent) => amount * (1.0 - d / 100.0),
        (Some(d), DiscountKind::Absolute) => amount - d,
        (None, _) => amount,
    };
    discounted.max(0.0)
}

/// Total of one line: quantity × unit price, with the item's discount
/// applied afterwards.
pub fn line_total(item: &LineItem) -> f64 {
    apply_discount(item.quantity * item.unit_price, item.discount, item.discount_kind)
}

/// Sums work and material line totals of one room.
pub fn room_total(room: &Room) -> RoomTotal {
    let works_total: f64 = room.works.iter().map(line_total).sum();
    let materials_total: f64 = room.materials.iter().map(line_total).sum();
    RoomTotal {
        works_total,
        materials_total,
        room_total: works_total + materials_total,
    }
}

/// Sums room totals over the whole offer, then applies the offer-level
/// discount once to the sum. Line-level discounts are already inside the
/// per-room sums, so the two discount levels compose additively, never
/// multiplicatively.
pub fn offer_total(offer: &Offer) -> OfferTotal {
    let rooms: Vec<RoomTotal> = offer.rooms.iter().map(room_total).collect();
    let rooms_total: f64 = rooms.iter().map(|r| r.room_total).sum();
    let grand_total = apply_discount(rooms_total, offer.discount, offer.discount_kind);
    OfferTotal {
        rooms,
        rooms_total,
        grand_total,
    }
}
