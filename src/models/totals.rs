use crate::models::product::Product;

/// Aggregates shown under the product table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub count: usize,
    pub quantity: u64,
    pub value: f64,
}

impl Totals {
    pub fn derive(products: &[Product]) -> Self {
        products.iter().fold(Totals::default(), |acc, p| Totals {
            count: acc.count + 1,
            quantity: acc.quantity + p.quantity,
            value: acc.value + p.value(),
        })
    }
}
