pub mod cart;
pub mod catalog;
pub mod product;

pub use cart::{apply_cart_action, entry_for, total_quantity, CartAction, CartEntry, CartState};
pub use catalog::{product_by_id, ProductCatalogEntry, PRODUCT_CATALOG};
pub use product::{format_price, Product};
