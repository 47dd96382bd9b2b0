/// Top-level screens of the storefront, shown one at a time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Stories, // Intro story sequence
    Product, // Product card, carousel and order form
}
