//! # Store State
//!
//! Holds the session's single `Store`.
//!
//! ## Exclusive Access
//! Every command body runs inside one `with_store` / `with_store_mut`
//! closure, so a checkout (build sale, decrement stock, record, clear cart)
//! is never interleaved with another command.
//!
//! ```text
//! command ──► with_store_mut(|store| store.process_sale(..)) ──► response
//!                   └── lock held for the whole closure ──┘
//! ```

use std::sync::Mutex;

use omnipos_core::Store;

use crate::state::ConfigState;

#[derive(Debug)]
pub struct StoreState {
    store: Mutex<Store>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Mutex::new(store),
        }
    }

    /// Seeded or empty depending on `config.seed_data`.
    pub fn from_config(config: &ConfigState) -> Self {
        let store = if config.seed_data {
            Store::seeded()
        } else {
            Store::new(omnipos_core::seed::default_user())
        };
        Self::new(store)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = store_state.with_store(|s| s.cart_totals(Money::zero()));
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(Store::seeded())
    }
}
