//! FILENAME: engine/src/offer.rs
//! PURPOSE: Defines the fundamental data structures of an estimate.
//! CONTEXT: This file contains the `Offer` tree (`Room`, `LineItem`) exactly
//! as it arrives from the data-access layer. The tree is read-only for the
//! duration of one export; derived totals live in the `totals` module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurement unit of a line item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    #[default]
    Area,   // square meters
    Count,  // pieces
    Linear, // linear meters
    Mass,   // kilograms
    Other,
}

impl Unit {
    /// Display label printed next to the quantity.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Area => "м²",
            Unit::Count => "шт.",
            Unit::Linear => "м.п.",
            Unit::Mass => "кг",
            Unit::Other => "ед.",
        }
    }
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DiscountKind {
    #[default]
    Percent,
    Absolute,
}

/// A priced, quantified unit of labor or goods within a room.
/// Works and materials share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    pub name: String,
    /// Non-negative; validated by the data-access layer before it gets here.
    pub quantity: f64,
    pub unit: Unit,
    /// Non-negative currency amount per unit.
    pub unit_price: f64,
    pub discount: Option<f64>,
    pub discount_kind: DiscountKind,
}

impl LineItem {
    pub fn new(id: u64, name: impl Into<String>, quantity: f64, unit: Unit, unit_price: f64) -> Self {
        LineItem {
            id,
            name: name.into(),
            quantity,
            unit,
            unit_price,
            discount: None,
            discount_kind: DiscountKind::Percent,
        }
    }

    pub fn with_discount(mut self, discount: f64, kind: DiscountKind) -> Self {
        self.discount = Some(discount);
        self.discount_kind = kind;
        self
    }
}

/// A cost-bearing subdivision of an offer, carrying its own areas and two
/// disjoint line item sequences. Item order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    pub name: String,
    /// Floor area in square meters.
    pub floor_area: f64,
    /// Wall area in square meters.
    pub wall_area: f64,
    pub works: Vec<LineItem>,
    pub materials: Vec<LineItem>,
}

impl Room {
    pub fn new(id: u64, name: impl Into<String>, floor_area: f64, wall_area: f64) -> Self {
        Room {
            id,
            name: name.into(),
            floor_area,
            wall_area,
            works: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// True when the room has no line items at all. Such rooms still appear
    /// in both exports with their heading and area line, but no tables.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty() && self.materials.is_empty()
    }
}

/// The top-level costed document for one site/address.
/// Room order is display order and is kept stable across both export formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u64,
    /// Site address; also the basis of the export file name.
    pub address: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    /// Offer-level discount, applied to the sum of room totals.
    pub discount: Option<f64>,
    pub discount_kind: DiscountKind,
    pub created_at: DateTime<Utc>,
    pub rooms: Vec<Room>,
}

impl Offer {
    pub fn new(id: u64, address: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Offer {
            id,
            address: address.into(),
            customer_name: None,
            customer_phone: None,
            discount: None,
            discount_kind: DiscountKind::Percent,
            created_at,
            rooms: Vec::new(),
        }
    }

    pub fn with_customer(mut self, name: impl Into<String>, phone: Option<String>) -> Self {
        self.customer_name = Some(name.into());
        self.customer_phone = phone;
        self
    }

    pub fn with_discount(mut self, discount: f64, kind: DiscountKind) -> Self {
        self.discount = Some(discount);
        self.discount_kind = kind;
        self
    }
}
