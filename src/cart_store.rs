use std::cell::RefCell;
use std::rc::Rc;

use misedana_core::{apply_cart_action, CartAction, CartState, Product};

pub(crate) type StoreSubscriber = Rc<dyn Fn()>;

pub(crate) struct CartStore {
    state: RefCell<CartState>,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl CartStore {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(CartState::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: StoreSubscriber) -> StoreSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        StoreSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Runs the reducer and notifies subscribers when the state changed.
    /// No-op dispatches stay silent.
    pub(crate) fn dispatch(&self, action: CartAction) {
        let applied = apply_cart_action(&mut self.state.borrow_mut(), &action);
        if !applied {
            return;
        }
        log_cart_update(action.label(), self.state.borrow().entries.len());
        self.notify();
    }

    pub(crate) fn add_item(&self, product: Product) {
        self.dispatch(CartAction::AddItem { product });
    }

    pub(crate) fn remove_item(&self, id: &str) {
        self.dispatch(CartAction::RemoveItem { id: id.to_string() });
    }

    pub(crate) fn increase_quantity(&self, id: &str) {
        self.dispatch(CartAction::IncreaseQuantity { id: id.to_string() });
    }

    pub(crate) fn decrease_quantity(&self, id: &str) {
        self.dispatch(CartAction::DecreaseQuantity { id: id.to_string() });
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct StoreSubscription {
    subscriber: StoreSubscriber,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

fn log_cart_update(label: &str, len: usize) {
    gloo::console::log!("cart updated", label, len);
}
