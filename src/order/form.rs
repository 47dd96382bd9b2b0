//! State of the order modal, from opening to hand-off.
//!
//! An [`OrderForm`] lives exactly as long as the modal is open. Submission is
//! split in two so the network call can run off the UI thread:
//! [`OrderForm::begin_submit`] validates and raises the `submitting` flag,
//! [`OrderForm::finish_submit`] takes the outcome and either hands off to the
//! messaging link or raises the failure alert. Once the endpoint accepted an
//! order the form is spent and never submits again.

use tracing::{error, info, warn};

use crate::constants::{MISSING_FIELDS_ALERT, SUBMIT_FAILED_ALERT};
use crate::order::{LinkOpener, Order, OrderChannel, OrderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Quantity,
    Name,
    ClassName,
    PickupTime,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Quantity, Field::Name, Field::ClassName, Field::PickupTime];

    pub fn next(self) -> Field {
        match self {
            Field::Quantity => Field::Name,
            Field::Name => Field::ClassName,
            Field::ClassName => Field::PickupTime,
            Field::PickupTime => Field::Quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Recorded; the modal should close. `opened` is false when the
    /// messaging link could not be launched.
    Sent { link: String, opened: bool },
    /// Something failed; the alert is up and the form stays open.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    quantity: u32,
    name: String,
    class_name: String,
    pickup_time: String,
    submitting: bool,
    sent: bool,
    focus: Field,
    alert: Option<&'static str>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            quantity: 1,
            name: String::new(),
            class_name: String::new(),
            pickup_time: String::new(),
            submitting: false,
            sent: false,
            focus: Field::Name,
            alert: None,
        }
    }
}

/// Reads a typed quantity the way a lenient integer parse would: optional
/// leading whitespace and sign, then digits; anything unreadable is 1, and
/// the result never drops below 1.
pub fn parse_quantity(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return 1;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn pickup_time(&self) -> &str {
        &self.pickup_time
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn total(&self, unit_price: u64) -> u64 {
        u64::from(self.quantity).saturating_mul(unit_price)
    }

    /// Text shown in `field`.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Quantity => self.quantity.to_string(),
            Field::Name => self.name.clone(),
            Field::ClassName => self.class_name.clone(),
            Field::PickupTime => self.pickup_time.clone(),
        }
    }

    /// The modal may be dismissed unless a submission is in flight.
    pub fn can_close(&self) -> bool {
        !self.submitting
    }

    /// Whether the endpoint has accepted this form's order.
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// Input is accepted only when idle, unsent and no alert is blocking.
    pub fn is_editable(&self) -> bool {
        !self.submitting && !self.sent && self.alert.is_none()
    }

    pub fn increment(&mut self) {
        if self.is_editable() {
            self.quantity = self.quantity.saturating_add(1);
        }
    }

    pub fn decrement(&mut self) {
        if self.is_editable() {
            self.quantity = self.quantity.saturating_sub(1).max(1);
        }
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn type_char(&mut self, c: char) {
        if !self.is_editable() || c.is_control() {
            return;
        }
        match self.focus {
            Field::Quantity => {
                let text = format!("{}{c}", self.quantity);
                self.quantity = parse_quantity(&text);
            }
            Field::Name => self.name.push(c),
            Field::ClassName => self.class_name.push(c),
            Field::PickupTime => self.pickup_time.push(c),
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_editable() {
            return;
        }
        match self.focus {
            Field::Quantity => {
                let mut text = self.quantity.to_string();
                text.pop();
                self.quantity = parse_quantity(&text);
            }
            Field::Name => {
                self.name.pop();
            }
            Field::ClassName => {
                self.class_name.pop();
            }
            Field::PickupTime => {
                self.pickup_time.pop();
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::ClassName, &self.class_name),
            (Field::PickupTime, &self.pickup_time),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(f, _)| f)
        .collect()
    }

    /// Validates and raises the `submitting` flag. Returns the order to send,
    /// or `None` when a submission is already running or fields are missing.
    pub fn begin_submit(&mut self) -> Option<Order> {
        if !self.is_editable() {
            return None;
        }
        if let Some(first) = self.missing_fields().first().copied() {
            warn!(missing = ?self.missing_fields(), "order form incomplete");
            self.focus = first;
            self.alert = Some(MISSING_FIELDS_ALERT);
            return None;
        }
        self.submitting = true;
        Some(Order {
            quantity: self.quantity,
            name: self.name.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            pickup_time: self.pickup_time.trim().to_string(),
        })
    }

    /// Applies the outcome of the submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(
        &mut self,
        order: &Order,
        result: Result<(), OrderError>,
        channel: &dyn OrderChannel,
        opener: &dyn LinkOpener,
    ) -> SubmitOutcome {
        if let Err(e) = result {
            self.fail(&e);
            return SubmitOutcome::Failed;
        }

        self.submitting = false;
        self.sent = true;
        let link = channel.message_link(order);
        let opened = match opener.open(&link) {
            Ok(()) => {
                info!(quantity = order.quantity, "order handed off to WhatsApp");
                true
            }
            Err(e) => {
                // Recorded already; a retry would duplicate the row
                error!(error = %e, "order recorded but the WhatsApp link did not open");
                false
            }
        };
        SubmitOutcome::Sent { link, opened }
    }

    /// Clears the in-flight flag and raises the blocking alert.
    pub fn fail(&mut self, err: &OrderError) {
        error!(error = %err, "order submission failed");
        self.submitting = false;
        self.alert = Some(SUBMIT_FAILED_ALERT);
    }
}
