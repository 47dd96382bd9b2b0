//! Order capture and hand-off: the form state, the message sent to the
//! seller, and the channel that delivers both.

pub mod channel;
pub mod error;
pub mod form;
pub mod message;
pub mod submitter;

pub use channel::{LinkOpener, OrderChannel, SystemBrowser, WebhookChannel};
pub use error::OrderError;
pub use form::{Field, OrderForm, SubmitOutcome};
pub use submitter::Submitter;

/// What is being sold. One product per storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub unit_price: u64,
    pub whatsapp_number: String,
}

/// A validated order, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub quantity: u32,
    pub name: String,
    pub class_name: String,
    pub pickup_time: String,
}

impl Order {
    pub fn total(&self, unit_price: u64) -> u64 {
        u64::from(self.quantity).saturating_mul(unit_price)
    }

    /// Fields of the webhook payload, in the order the spreadsheet expects.
    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("jumlah", self.quantity.to_string()),
            ("nama", self.name.clone()),
            ("kelas", self.class_name.clone()),
            ("waktu_ambil", self.pickup_time.clone()),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::constants::*;

    pub fn dumpling() -> Product {
        Product {
            name: PRODUCT_NAME.to_string(),
            description: PRODUCT_DESC.to_string(),
            unit_price: PRODUCT_PRICE,
            whatsapp_number: WHATSAPP_NUMBER.to_string(),
        }
    }

    pub fn budi() -> Order {
        Order {
            quantity: 3,
            name: "Budi".to_string(),
            class_name: "XII IPA 1".to_string(),
            pickup_time: "Istirahat 1".to_string(),
        }
    }

    #[test]
    fn total_is_quantity_times_price() {
        assert_eq!(budi().total(12_000), 36_000);
        let bulk = Order { quantity: u32::MAX, ..budi() };
        assert_eq!(bulk.total(u64::MAX), u64::MAX);
    }

    #[test]
    fn form_fields_use_spreadsheet_keys() {
        let fields = budi().form_fields();
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["jumlah", "nama", "kelas", "waktu_ambil"]);
        assert_eq!(fields[0].1, "3");
        assert_eq!(fields[2].1, "XII IPA 1");
    }
}
