use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;
use crate::order::Product;

/// Dumpling storefront: intro stories, then the product page and order form.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about)]
pub struct Config {
    /// Directory with product photos for the carousel
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Spreadsheet web app that records orders
    #[arg(long, default_value = ORDER_ENDPOINT)]
    pub endpoint: String,

    /// WhatsApp number orders are sent to (country code, no plus sign)
    #[arg(long, default_value = WHATSAPP_NUMBER)]
    pub phone: String,

    /// Unit price in rupiah
    #[arg(long, default_value_t = PRODUCT_PRICE)]
    pub price: u64,

    /// Start on the product page
    #[arg(long)]
    pub skip_intro: bool,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,
}

impl Config {
    pub fn product(&self) -> Product {
        Product {
            name: PRODUCT_NAME.to_string(),
            description: PRODUCT_DESC.to_string(),
            unit_price: self.price,
            whatsapp_number: self.phone.clone(),
        }
    }
}
