//! # OmniPOS Register Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        OmniPOS Register                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Register UI (any language)                  │  │
//! │  │  • Product Search       • Cart Display                           │  │
//! │  │  • Checkout             • Dashboard                              │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                     JSON lines on stdin/stdout                          │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Runs the session, exits non-zero on I/O failure  │  │
//! │  │  lib.rs ─────► Logging, state, command loop                     │  │
//! │  │  commands/ ──► addToCart, processSale, searchProducts, ...      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    omnipos-core (in memory)                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match omnipos_register_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("omnipos-register: {}", e);
            ExitCode::FAILURE
        }
    }
}
