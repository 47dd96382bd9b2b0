//! Where things sit on the product screen, derived from the window size.
//! Shared by hit testing and drawing so both always agree.

use crate::geometry::Rect;
use crate::order::Field;

const CARD_MAX_WIDTH: f32 = 384.0;
const CARD_MARGIN: f32 = 16.0;
const IMAGE_HEIGHT: f32 = 300.0;
const INFO_HEIGHT: f32 = 210.0;
const ARROW_SIZE: f32 = 32.0;
const DOT_SIZE: f32 = 8.0;
const DOT_ACTIVE_WIDTH: f32 = 24.0;
const DOT_GAP: f32 = 8.0;
const BUTTON_HEIGHT: f32 = 56.0;

const MODAL_MAX_WIDTH: f32 = 352.0;
const MODAL_HEIGHT: f32 = 520.0;
const MODAL_PADDING: f32 = 24.0;
const FIELD_HEIGHT: f32 = 44.0;
const LABEL_HEIGHT: f32 = 24.0;
const ROW_GAP: f32 = 14.0;
const STEPPER_SIZE: f32 = 40.0;
const SUBMIT_HEIGHT: f32 = 52.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductLayout {
    pub screen: Rect,
    pub card: Rect,
    pub image: Rect,
    pub prev_arrow: Rect,
    pub next_arrow: Rect,
    pub price_badge: Rect,
    pub info: Rect,
    pub order_button: Rect,
}

impl ProductLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let card_w = (width - 2.0 * CARD_MARGIN).min(CARD_MAX_WIDTH).max(0.0);
        let card_h = IMAGE_HEIGHT + INFO_HEIGHT;
        let card_x = (width - card_w) * 0.5;
        let card_y = ((height - card_h) * 0.5).max(CARD_MARGIN);
        let card = Rect::new(card_x, card_y, card_w, card_h);

        let image = Rect::new(card.x, card.y, card.width, IMAGE_HEIGHT);
        let arrow_y = image.y + (image.height - ARROW_SIZE) * 0.5;
        let info = Rect::new(card.x + 20.0, image.y + image.height + 20.0, card.width - 40.0, INFO_HEIGHT - 40.0);

        Self {
            screen: Rect::new(0.0, 0.0, width, height),
            card,
            image,
            prev_arrow: Rect::new(image.x + 8.0, arrow_y, ARROW_SIZE, ARROW_SIZE),
            next_arrow: Rect::new(image.x + image.width - 8.0 - ARROW_SIZE, arrow_y, ARROW_SIZE, ARROW_SIZE),
            price_badge: Rect::new(image.x + image.width - 124.0, image.y + 12.0, 112.0, 32.0),
            info,
            order_button: Rect::new(info.x, info.y + info.height - BUTTON_HEIGHT, info.width, BUTTON_HEIGHT),
        }
    }

    /// Indicator dots along the bottom of the image; the active one is wider.
    pub fn dots(&self, count: usize, active: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let total = DOT_ACTIVE_WIDTH + (count - 1) as f32 * DOT_SIZE + (count - 1) as f32 * DOT_GAP;
        let mut x = self.image.x + (self.image.width - total) * 0.5;
        let y = self.image.y + self.image.height - 12.0 - DOT_SIZE;
        (0..count)
            .map(|i| {
                let w = if i == active { DOT_ACTIVE_WIDTH } else { DOT_SIZE };
                let r = Rect::new(x, y, w, DOT_SIZE);
                x += w + DOT_GAP;
                r
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalLayout {
    pub panel: Rect,
    pub close: Rect,
    pub title: Rect,
    pub minus: Rect,
    pub quantity: Rect,
    pub plus: Rect,
    pub subtotal: Rect,
    pub name: Rect,
    pub class_name: Rect,
    pub pickup_time: Rect,
    pub submit: Rect,
    pub alert: Rect,
    pub alert_ok: Rect,
}

impl ModalLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let panel_w = (width - 32.0).min(MODAL_MAX_WIDTH).max(0.0);
        let panel_h = MODAL_HEIGHT.min(height * 0.95);
        let mut panel = Rect::new((width - panel_w) * 0.5, ((height - panel_h) * 0.5).max(0.0), panel_w, panel_h);

        let left = panel.x + MODAL_PADDING;
        let inner_w = panel.width - 2.0 * MODAL_PADDING;
        let title = Rect::new(left, panel.y + MODAL_PADDING, inner_w, 28.0);

        let mut y = title.y + title.height + 16.0 + LABEL_HEIGHT;
        let minus = Rect::new(left, y, STEPPER_SIZE, STEPPER_SIZE);
        let quantity = Rect::new(minus.x + STEPPER_SIZE + 8.0, y, 56.0, STEPPER_SIZE);
        let plus = Rect::new(quantity.x + quantity.width + 8.0, y, STEPPER_SIZE, STEPPER_SIZE);
        let subtotal_x = plus.x + STEPPER_SIZE + 8.0;
        let subtotal = Rect::new(subtotal_x, y, left + inner_w - subtotal_x, STEPPER_SIZE);
        y += STEPPER_SIZE + ROW_GAP;

        let mut text_field = || {
            let r = Rect::new(left, y + LABEL_HEIGHT, inner_w, FIELD_HEIGHT);
            y += LABEL_HEIGHT + FIELD_HEIGHT + ROW_GAP;
            r
        };
        let name = text_field();
        let class_name = text_field();
        let pickup_time = text_field();

        // Pinned to the bottom, but never above the last field; the panel grows to fit
        let submit_y = (panel.y + panel.height - MODAL_PADDING - SUBMIT_HEIGHT).max(y);
        let submit = Rect::new(left, submit_y, inner_w, SUBMIT_HEIGHT);
        panel.height = panel.height.max(submit.y + SUBMIT_HEIGHT + MODAL_PADDING - panel.y);
        let alert_w = (width - 48.0).min(300.0).max(0.0);
        let alert = Rect::new((width - alert_w) * 0.5, (height - 160.0) * 0.5, alert_w, 160.0);

        Self {
            panel,
            close: Rect::new(panel.x + panel.width - 44.0, panel.y + 12.0, 32.0, 32.0),
            title,
            minus,
            quantity,
            plus,
            subtotal,
            name,
            class_name,
            pickup_time,
            submit,
            alert,
            alert_ok: Rect::new(alert.x + alert.width * 0.5 - 50.0, alert.y + alert.height - 56.0, 100.0, 40.0),
        }
    }

    pub fn field(&self, field: Field) -> Rect {
        match field {
            Field::Quantity => self.quantity,
            Field::Name => self.name,
            Field::ClassName => self.class_name,
            Field::PickupTime => self.pickup_time,
        }
    }

    /// Label sits directly above its input.
    pub fn label(&self, field: Field) -> Rect {
        let r = match field {
            Field::Quantity => self.minus,
            other => self.field(other),
        };
        Rect::new(r.x, r.y - LABEL_HEIGHT, r.width, LABEL_HEIGHT)
    }
}
