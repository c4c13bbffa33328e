//! # Command Stream Protocol
//!
//! JSON lines in, JSON lines out. One request per line, exactly one
//! response line per request, in order.
//!
//! ```text
//! stdin  ─► {"cmd":"addToCart","args":{"productId":"..."}}
//! stdout ◄─ {"ok":true,"data":{...}}
//!
//! stdin  ─► {"cmd":"processSale","args":{"paymentMethod":"CASH"}}
//! stdout ◄─ {"ok":false,"error":{"code":"EMPTY_CART","message":"Cart is empty"}}
//! ```
//!
//! Blank lines are skipped. A line that is not a valid command gets a
//! `VALIDATION_ERROR` response and the session keeps going; end of input
//! ends the session.

use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::commands::{self, Command};
use crate::error::{ApiError, RegisterError};
use crate::state::{ConfigState, StoreState};

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(error) => Response::failure(error),
        }
    }
}

/// Parses and runs a single request line.
pub fn handle_line(store: &StoreState, config: &ConfigState, line: &str) -> Response {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, "Rejected malformed command");
            return Response::failure(ApiError::validation(format!("Invalid command: {}", e)));
        }
    };

    let name = command.name();
    let response = Response::from(commands::dispatch(store, config, command));
    if let Some(error) = &response.error {
        debug!(command = name, code = ?error.code, message = %error.message, "Command failed");
    }
    response
}

/// Serves commands until end of input.
///
/// Returns the number of requests handled.
pub fn serve<R, W>(
    input: R,
    mut output: W,
    store: &StoreState,
    config: &ConfigState,
) -> Result<usize, RegisterError>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(store, config, line);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;
    }

    debug!(handled, "Command stream closed");
    Ok(handled)
}
