//! # OmniPOS Register Library
//!
//! The register process: session state, commands, and the command stream
//! a UI talks to.
//!
//! ## Module Organization
//! ```text
//! omnipos_register_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── protocol.rs     ◄─── JSON-lines request/response loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── The session's Store behind a Mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum and dispatch
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── sale.rs     ◄─── Checkout and sale history
//! │   ├── product.rs  ◄─── Catalog commands
//! │   ├── customer.rs ◄─── Customer registry commands
//! │   ├── report.rs   ◄─── Dashboard and sales report
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register State                                       │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │    StoreState                │   │    ConfigState               │   │
//! │  │                              │   │                              │   │
//! │  │  • Catalog, customers        │   │  • Store name                │   │
//! │  │  • Sales history             │   │  • Currency                  │   │
//! │  │  • Current cart              │   │  • Report limits             │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Both live for one session. Nothing is written to disk.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod protocol;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::RegisterError;
use state::{ConfigState, StoreState};

/// Runs a register session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • OMNIPOS_* environment variables over defaults                     │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • StoreState: seeded catalog and customers, empty cart              │
/// │                                                                         │
/// │  4. Serve Commands ───────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line until EOF                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), RegisterError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, seed = config.seed_data, "Starting OmniPOS register");

    let store = StoreState::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = protocol::serve(stdin.lock(), stdout.lock(), &store, &config)?;

    store.with_store(|s| {
        let takings: i64 = s.sales().iter().map(|sale| sale.total_cents).sum();
        info!(
            commands = handled,
            sales = s.sales().len(),
            takings = %config.format_currency(takings),
            "Register session ended"
        );
    });

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// stdout carries responses, so logs go to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=omnipos=trace` - Show trace for omnipos crates only
/// - Default: INFO, DEBUG for omnipos crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,omnipos=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
