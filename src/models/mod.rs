pub mod draft;
pub mod product;
pub mod totals;

pub use draft::Draft;
pub use product::{Category, Product, ProductId};
pub use totals::Totals;
