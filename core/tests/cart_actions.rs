use misedana_core::{
    apply_cart_action, entry_for, total_quantity, CartAction, CartEntry, CartState, Product,
};

fn product(id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: 9.99,
        image_src: format!("products/{id}.jpg"),
    }
}

fn cart_with(entries: &[(&str, u32)]) -> CartState {
    CartState {
        entries: entries
            .iter()
            .map(|(id, quantity)| CartEntry {
                id: id.to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}

#[test]
fn add_inserts_entry_at_quantity_one() {
    let mut state = CartState::new();
    let applied = apply_cart_action(
        &mut state,
        &CartAction::AddItem {
            product: product("p1"),
        },
    );
    assert!(applied);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, "p1");
    assert_eq!(state.entries[0].quantity, 1);
}

#[test]
fn add_existing_product_increments_single_entry() {
    let mut state = CartState::new();
    apply_cart_action(
        &mut state,
        &CartAction::AddItem {
            product: product("p1"),
        },
    );
    apply_cart_action(
        &mut state,
        &CartAction::AddItem {
            product: product("p1"),
        },
    );
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].quantity, 2);
}

#[test]
fn add_keeps_insertion_order() {
    let mut state = CartState::new();
    for id in ["p1", "p2", "p3"] {
        apply_cart_action(
            &mut state,
            &CartAction::AddItem {
                product: product(id),
            },
        );
    }
    apply_cart_action(
        &mut state,
        &CartAction::AddItem {
            product: product("p2"),
        },
    );
    let ids: Vec<&str> = state.entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[test]
fn remove_deletes_matching_entry() {
    let mut state = cart_with(&[("p1", 2), ("p2", 1)]);
    let applied = apply_cart_action(
        &mut state,
        &CartAction::RemoveItem {
            id: "p1".to_string(),
        },
    );
    assert!(applied);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, "p2");
}

#[test]
fn remove_missing_entry_is_noop() {
    let mut state = cart_with(&[("p1", 2)]);
    let applied = apply_cart_action(
        &mut state,
        &CartAction::RemoveItem {
            id: "p9".to_string(),
        },
    );
    assert!(!applied);
    assert_eq!(state, cart_with(&[("p1", 2)]));
}

#[test]
fn increase_increments_matching_entry() {
    let mut state = cart_with(&[("p1", 3)]);
    let applied = apply_cart_action(
        &mut state,
        &CartAction::IncreaseQuantity {
            id: "p1".to_string(),
        },
    );
    assert!(applied);
    assert_eq!(state.entries[0].quantity, 4);
}

#[test]
fn increase_missing_entry_is_noop() {
    let mut state = CartState::new();
    let applied = apply_cart_action(
        &mut state,
        &CartAction::IncreaseQuantity {
            id: "p1".to_string(),
        },
    );
    assert!(!applied);
    assert!(state.entries.is_empty());
}

#[test]
fn decrease_decrements_matching_entry() {
    let mut state = cart_with(&[("p1", 3)]);
    let applied = apply_cart_action(
        &mut state,
        &CartAction::DecreaseQuantity {
            id: "p1".to_string(),
        },
    );
    assert!(applied);
    assert_eq!(state.entries[0].quantity, 2);
}

#[test]
fn decrease_at_quantity_one_removes_entry() {
    let mut state = cart_with(&[("p1", 1), ("p2", 5)]);
    let applied = apply_cart_action(
        &mut state,
        &CartAction::DecreaseQuantity {
            id: "p1".to_string(),
        },
    );
    assert!(applied);
    assert!(entry_for(&state, "p1").is_none());
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn decrease_missing_entry_is_noop() {
    let mut state = cart_with(&[("p1", 1)]);
    let applied = apply_cart_action(
        &mut state,
        &CartAction::DecreaseQuantity {
            id: "p9".to_string(),
        },
    );
    assert!(!applied);
    assert_eq!(state, cart_with(&[("p1", 1)]));
}

#[test]
fn entry_for_finds_by_id() {
    let state = cart_with(&[("p1", 2), ("p2", 7)]);
    assert_eq!(entry_for(&state, "p2").map(|entry| entry.quantity), Some(7));
    assert!(entry_for(&state, "p3").is_none());
}

#[test]
fn total_quantity_sums_all_entries() {
    let state = cart_with(&[("p1", 2), ("p2", 7), ("p3", 1)]);
    assert_eq!(total_quantity(&state), 10);
    assert_eq!(total_quantity(&CartState::new()), 0);
}
