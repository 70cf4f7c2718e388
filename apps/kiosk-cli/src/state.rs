//! # Store State
//!
//! Shared handle to the one [`Store`] the shell drives.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so that every operation runs under
//! one lock acquisition. With a single interactive user this is uncontended;
//! with several handles on several threads it serializes access per store, so
//! a checkout's deduct-and-clear is never observed half done.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell action            StoreState call            Store method        │
//! │  ────────────            ───────────────            ────────────        │
//! │  1 list products ──────► with_store ──────────────► list_products()     │
//! │  2 add to cart ────────► with_store_mut ──────────► add_to_cart()       │
//! │  3 view cart ──────────► with_store ──────────────► view_cart()         │
//! │  4 checkout ───────────► with_store_mut ──────────► checkout()          │
//! │  5 view balance ───────► with_store ──────────────► view_balance()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use kiosk_core::Store;
use tracing::warn;

/// Cloneable, thread-safe store handle.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use kiosk_cli::state::StoreState;
    /// use kiosk_core::Store;
    ///
    /// let state = StoreState::new(Store::default());
    /// let balance = state.with_store(|store| store.view_balance());
    /// assert_eq!(balance.to_string(), "150.00");
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Store methods finish their checks before mutating, so a store behind
        // a poisoned lock is still consistent.
        self.store.lock().unwrap_or_else(|poisoned| {
            warn!("store lock poisoned by a panicked holder, continuing");
            poisoned.into_inner()
        })
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(Store::default())
    }
}
