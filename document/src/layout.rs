//! FILENAME: document/src/layout.rs
//! PURPOSE: Walks the offer tree and lays it out into pages of draw ops.
//! CONTEXT: This is the flow described on the printed document: title block
//! and metadata, then per room a heading, an area line, a works table, a
//! materials table and a subtotal, then the grand total block. Page-break
//! decisions for headings and totals happen here; the tables break
//! themselves.

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::ops::{
    BODY_SIZE, CONTENT_WIDTH, HEADING_MIN_SPACE, HEADING_SIZE, LATE_PAGE_MIN_SPACE, LINE_HEIGHT,
    MARGIN, Page, TITLE_SIZE,
};
use crate::table::{flow_table, Align, Column, TableSpec};
use engine::{
    format_area, format_currency, format_date, format_quantity, line_total, round2, Color,
    DiscountKind, LineItem, Offer, OfferTotal, Room, MATERIALS_HEADER_FILL, MUTED_TEXT,
    WORKS_HEADER_FILL,
};

const QTY_COL: f64 = 80.0;
const PRICE_COL: f64 = 90.0;
const TOTAL_COL: f64 = 95.0;
const NAME_COL: f64 = CONTENT_WIDTH - QTY_COL - PRICE_COL - TOTAL_COL;

/// Gap left between a room's subtotal and the next room heading.
const ROOM_GAP: f64 = 18.0;

/// Lays the offer out into pages. Totals are computed by the caller so both
/// renderers consume the same values.
pub fn layout_offer(offer: &Offer, totals: &OfferTotal) -> Result<Vec<Page>, RenderError> {
    let mut ctx = RenderContext::new();

    title_block(&mut ctx, offer);

    for (room_index, (room, room_totals)) in
        offer.rooms.iter().zip(&totals.rooms).enumerate()
    {
        if ctx.remaining() < HEADING_MIN_SPACE {
            ctx.new_page();
        }
        room_heading(&mut ctx, room_index, room);

        if !room.works.is_empty() {
            let spec = table_spec("Наименование работ", WORKS_HEADER_FILL);
            flow_table(&mut ctx, &spec, &item_rows(&room.works), room_index)?;
        }
        if !room.materials.is_empty() {
            let spec = table_spec("Наименование материалов", MATERIALS_HEADER_FILL);
            flow_table(&mut ctx, &spec, &item_rows(&room.materials), room_index)?;
        }

        ctx.advance(4.0);
        ctx.line_of_text_right(
            MARGIN + CONTENT_WIDTH,
            BODY_SIZE + 1.0,
            true,
            Color::black(),
            &format!("Итого по помещению: {}", format_currency(round2(room_totals.room_total))),
        );

        let last_room = room_index + 1 == offer.rooms.len();
        if !last_room {
            if ctx.remaining() < LATE_PAGE_MIN_SPACE {
                ctx.new_page();
            } else {
                ctx.advance(ROOM_GAP);
            }
        }
    }

    if ctx.remaining() < LATE_PAGE_MIN_SPACE {
        ctx.new_page();
    }
    grand_total_block(&mut ctx, offer, totals);

    Ok(ctx.finish())
}

fn title_block(ctx: &mut RenderContext, offer: &Offer) {
    ctx.line_of_text(MARGIN, TITLE_SIZE, true, Color::black(), "Коммерческое предложение");
    ctx.advance(6.0);

    ctx.line_of_text(
        MARGIN,
        BODY_SIZE,
        false,
        Color::black(),
        &format!("Объект: {}", offer.address),
    );
    if let Some(name) = &offer.customer_name {
        ctx.line_of_text(MARGIN, BODY_SIZE, false, Color::black(), &format!("Заказчик: {}", name));
    }
    if let Some(phone) = &offer.customer_phone {
        ctx.line_of_text(MARGIN, BODY_SIZE, false, Color::black(), &format!("Телефон: {}", phone));
    }
    ctx.line_of_text(
        MARGIN,
        BODY_SIZE,
        false,
        Color::black(),
        &format!("Дата: {}", format_date(&offer.created_at)),
    );
    ctx.advance(LINE_HEIGHT);
}

fn room_heading(ctx: &mut RenderContext, room_index: usize, room: &Room) {
    ctx.line_of_text(
        MARGIN,
        HEADING_SIZE,
        true,
        Color::black(),
        &format!("{}. {}", room_index + 1, room.name),
    );
    ctx.line_of_text(
        MARGIN,
        BODY_SIZE,
        false,
        MUTED_TEXT,
        &format!(
            "Пол: {}, стены: {}",
            format_area(room.floor_area),
            format_area(room.wall_area)
        ),
    );
    ctx.advance(2.0);
}

fn table_spec(name_title: &str, fill: Color) -> TableSpec {
    TableSpec {
        columns: vec![
            Column::new(name_title, NAME_COL, Align::Left),
            Column::new("Кол-во", QTY_COL, Align::Right),
            Column::new("Цена", PRICE_COL, Align::Right),
            Column::new("Сумма", TOTAL_COL, Align::Right),
        ],
        header_fill: fill,
    }
}

/// The printed document combines quantity and unit into one display string;
/// the workbook keeps them in separate columns.
fn item_rows(items: &[LineItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            vec![
                item.name.clone(),
                format!("{} {}", format_quantity(item.quantity), item.unit.label()),
                format_currency(round2(item.unit_price)),
                format_currency(round2(line_total(item))),
            ]
        })
        .collect()
}

fn grand_total_block(ctx: &mut RenderContext, offer: &Offer, totals: &OfferTotal) {
    let right = MARGIN + CONTENT_WIDTH;
    ctx.advance(6.0);

    if let Some(discount) = offer.discount {
        ctx.line_of_text_right(
            right,
            BODY_SIZE,
            false,
            Color::black(),
            &format!("Сумма: {}", format_currency(round2(totals.rooms_total))),
        );
        let discount_label = match offer.discount_kind {
            DiscountKind::Percent => format!("Скидка: {}%", format_quantity(discount)),
            DiscountKind::Absolute => format!("Скидка: {}", format_currency(round2(discount))),
        };
        ctx.line_of_text_right(right, BODY_SIZE, false, Color::black(), &discount_label);
    }

    ctx.line_of_text_right(
        right,
        HEADING_SIZE,
        true,
        Color::black(),
        &format!("Итого по смете: {}", format_currency(round2(totals.grand_total))),
    );
}
