use std::rc::Rc;

use yew::prelude::*;

use misedana_core::{format_price, product_by_id, total_quantity, CartState, PRODUCT_CATALOG};

use crate::cart_store::CartStore;
use crate::product_card::ProductCard;

#[derive(Properties)]
pub(crate) struct StorefrontProps {
    pub store: Rc<CartStore>,
}

impl PartialEq for StorefrontProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// Cart value resolved against the catalog. Entries whose product is no
/// longer listed are skipped.
fn cart_total(cart: &CartState) -> f64 {
    cart.entries
        .iter()
        .filter_map(|entry| {
            product_by_id(&entry.id).map(|product| product.price * entry.quantity as f64)
        })
        .sum()
}

#[function_component(Storefront)]
pub(crate) fn storefront(props: &StorefrontProps) -> Html {
    let store = props.store.clone();
    let cart = use_state(|| store.snapshot());
    {
        let store = store.clone();
        let cart = cart.clone();
        use_effect_with((), move |_| {
            let store_for_cb = store.clone();
            let subscription = store.subscribe(Rc::new(move || {
                cart.set(store_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    let cart_value = (*cart).clone();
    let item_count = total_quantity(&cart_value);
    let cards: Html = PRODUCT_CATALOG
        .iter()
        .map(|entry| {
            html! {
                <ProductCard
                    key={entry.id}
                    product={entry.to_product()}
                    cart={cart_value.clone()}
                    store={store.clone()}
                />
            }
        })
        .collect();

    html! {
        <div class="storefront">
            <header class="storefront-header">
                <h1 class="storefront-title">{ "Misedana" }</h1>
                <div class="cart-summary">
                    <span class="cart-count">{ format!("Cart ({item_count})") }</span>
                    <span class="cart-total">{ format_price(cart_total(&cart_value)) }</span>
                </div>
            </header>
            <main class="product-grid">
                { cards }
            </main>
        </div>
    }
}
