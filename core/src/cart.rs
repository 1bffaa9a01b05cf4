use crate::product::Product;

#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub id: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub entries: Vec<CartEntry>,
}

impl CartState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum CartAction {
    AddItem { product: Product },
    RemoveItem { id: String },
    IncreaseQuantity { id: String },
    DecreaseQuantity { id: String },
}

impl CartAction {
    pub fn label(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "add-item",
            CartAction::RemoveItem { .. } => "remove-item",
            CartAction::IncreaseQuantity { .. } => "increase-quantity",
            CartAction::DecreaseQuantity { .. } => "decrease-quantity",
        }
    }
}

pub fn entry_for<'a>(state: &'a CartState, id: &str) -> Option<&'a CartEntry> {
    state.entries.iter().find(|entry| entry.id == id)
}

pub fn total_quantity(state: &CartState) -> u32 {
    state.entries.iter().map(|entry| entry.quantity).sum()
}

/// Applies one cart action. Returns whether the state changed.
///
/// The entry list holds at most one entry per product id; adding an already
/// listed product increments that entry instead of inserting a second one.
pub fn apply_cart_action(state: &mut CartState, action: &CartAction) -> bool {
    match action {
        CartAction::AddItem { product } => {
            if let Some(entry) = state
                .entries
                .iter_mut()
                .find(|entry| entry.id == product.id)
            {
                entry.quantity = entry.quantity.saturating_add(1);
            } else {
                state.entries.push(CartEntry {
                    id: product.id.clone(),
                    quantity: 1,
                });
            }
            true
        }
        CartAction::RemoveItem { id } => {
            let before = state.entries.len();
            state.entries.retain(|entry| entry.id != *id);
            state.entries.len() != before
        }
        CartAction::IncreaseQuantity { id } => {
            match state.entries.iter_mut().find(|entry| entry.id == *id) {
                Some(entry) => {
                    entry.quantity = entry.quantity.saturating_add(1);
                    true
                }
                None => false,
            }
        }
        CartAction::DecreaseQuantity { id } => {
            let Some(index) = state.entries.iter().position(|entry| entry.id == *id) else {
                return false;
            };
            if state.entries[index].quantity > 1 {
                state.entries[index].quantity -= 1;
            } else {
                // Quantity stays a positive integer: the last unit removes the line.
                state.entries.remove(index);
            }
            true
        }
    }
}
