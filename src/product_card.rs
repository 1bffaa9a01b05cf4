use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use misedana_core::{entry_for, format_price, CartState, Product};

use crate::cart_store::CartStore;

#[derive(Properties)]
pub(crate) struct ProductCardProps {
    pub product: Product,
    /// Read-only snapshot of the cart; the store owns the authoritative copy.
    pub cart: CartState,
    pub store: Rc<CartStore>,
    #[prop_or(AttrValue::Static("300px"))]
    pub card_width: AttrValue,
    #[prop_or(AttrValue::Static("400px"))]
    pub card_height: AttrValue,
}

impl PartialEq for ProductCardProps {
    fn eq(&self, other: &Self) -> bool {
        self.product == other.product
            && self.cart == other.cart
            && Rc::ptr_eq(&self.store, &other.store)
            && self.card_width == other.card_width
            && self.card_height == other.card_height
    }
}

#[function_component(ProductCard)]
pub(crate) fn product_card(props: &ProductCardProps) -> Html {
    let modal_open = use_state(|| false);
    let product = &props.product;
    let entry = entry_for(&props.cart, &product.id);

    let on_add = {
        let store = props.store.clone();
        let product = product.clone();
        Callback::from(move |_: MouseEvent| {
            store.add_item(product.clone());
        })
    };
    let on_remove = {
        let store = props.store.clone();
        let id = product.id.clone();
        Callback::from(move |_: MouseEvent| {
            store.remove_item(&id);
        })
    };
    let on_increase = {
        let store = props.store.clone();
        let id = product.id.clone();
        Callback::from(move |_: MouseEvent| {
            store.increase_quantity(&id);
        })
    };
    let on_decrease = {
        let store = props.store.clone();
        let id = product.id.clone();
        Callback::from(move |_: MouseEvent| {
            store.decrease_quantity(&id);
        })
    };
    let on_open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(true);
        })
    };
    let on_close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(false);
        })
    };

    let card_style = format!(
        "width: {}; height: {};",
        props.card_width, props.card_height
    );
    let cart_controls = match entry {
        Some(entry) => html! {
            <div class="cart-controls">
                <div class="quantity-stepper">
                    <button class="stepper-decrease" onclick={on_decrease}>{ "-" }</button>
                    <span class="stepper-count">{ entry.quantity }</span>
                    <button class="stepper-increase" onclick={on_increase}>{ "+" }</button>
                </div>
                <button class="remove-button" onclick={on_remove}>{ "Remove from Cart" }</button>
            </div>
        },
        None => html! {
            <button class="add-button" onclick={on_add}>{ "Add to Cart" }</button>
        },
    };
    let modal = if *modal_open {
        html! {
            <div class="modal-overlay">
                <div class="modal-frame">
                    <button class="modal-dismiss" onclick={on_close_modal}>{ "✕" }</button>
                    <img
                        class="modal-image"
                        src={product.image_src.clone()}
                        alt={product.name.clone()}
                    />
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="product-card" style={card_style}>
            <div class="product-image-frame">
                <img
                    class="product-image"
                    src={product.image_src.clone()}
                    alt={product.name.clone()}
                    loading="lazy"
                    onclick={on_open_modal}
                />
            </div>
            <h2 class="product-name">{ product.name.clone() }</h2>
            <p class="product-price">{ format_price(product.price) }</p>
            { cart_controls }
            { modal }
        </div>
    }
}
