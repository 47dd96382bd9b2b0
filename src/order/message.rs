use crate::constants::WHATSAPP_SEND_URL;
use crate::order::{Order, Product};

/// Rupiah amount with `id-ID` grouping: 36000 -> "36.000".
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Text the buyer sends to the seller over WhatsApp.
pub fn order_message(product: &Product, order: &Order) -> String {
    let total = format_rupiah(order.total(product.unit_price));
    format!(
        "Halo! Saya ingin memesan {product}.\n\n\
         📝 Detail Pesanan:\n\
         • Nama: {name}\n\
         • Kelas: {class}\n\
         • Jumlah: {qty} pcs\n\
         • Total: Rp {total}\n\
         • Waktu Ambil: {pickup}\n\n\
         Terima kasih! 🥟",
        product = product.name,
        name = order.name,
        class = order.class_name,
        qty = order.quantity,
        pickup = order.pickup_time,
    )
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("{WHATSAPP_SEND_URL}?phone={}&text={}", urlencoding::encode(number), urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::tests::{budi, dumpling};

    #[test]
    fn rupiah_grouping() {
        assert_eq!(format_rupiah(0), "0");
        assert_eq!(format_rupiah(999), "999");
        assert_eq!(format_rupiah(12_000), "12.000");
        assert_eq!(format_rupiah(36_000), "36.000");
        assert_eq!(format_rupiah(1_234_567), "1.234.567");
    }

    #[test]
    fn message_mentions_every_field_and_total() {
        let msg = order_message(&dumpling(), &budi());
        for needle in ["Dumpling", "Budi", "XII IPA 1", "3 pcs", "Rp 36.000", "Istirahat 1"] {
            assert!(msg.contains(needle), "missing {needle:?} in {msg}");
        }
        assert!(msg.starts_with("Halo! Saya ingin memesan Dumpling.\n\n"));
    }

    #[test]
    fn link_encodes_message() {
        let link = whatsapp_link("62895383307167", "Nama: Budi\nKelas: XII IPA 1");
        assert_eq!(
            link,
            "https://api.whatsapp.com/send?phone=62895383307167&text=Nama%3A%20Budi%0AKelas%3A%20XII%20IPA%201"
        );
    }
}
