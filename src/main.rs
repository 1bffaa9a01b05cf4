mod cart_store;
mod product_card;
mod storefront;

use crate::cart_store::CartStore;
use crate::storefront::{Storefront, StorefrontProps};

fn main() {
    console_error_panic_hook::set_once();
    let store = CartStore::new();
    yew::Renderer::<Storefront>::with_props(StorefrontProps { store }).render();
}
