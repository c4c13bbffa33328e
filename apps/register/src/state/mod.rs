//! # State Module
//!
//! Session state for the register.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │       StoreState         │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  Mutex<Store>            │        │  store_name              │      │
//! │  │  (catalog, customers,    │        │  currency                │      │
//! │  │   sales, cart)           │        │  report limits           │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  • StoreState: exclusive access per command                            │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreState;
