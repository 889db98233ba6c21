//! Turning command output into tool results.

use crate::commands::Out;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{error, warn};

const INSTRUCTIONS: &str = include_str!("docs/INSTRUCTIONS.md");

/// The usage guide handed out by `initialize_service`.
pub(super) fn instructions() -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::text(INSTRUCTIONS)]))
}

/// What every tool except `initialize_service` answers until the session is initialized.
pub(super) fn not_initialized() -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::error(vec![Content::text(
        "You have not yet initialized the service. Please call initialize_service first.",
    )]))
}

/// The message first, then the ledger data as JSON when the command produced any. A structure
/// that cannot be encoded is logged and left out; the message still goes back.
fn ledger_content<T>(out: &Out<T>) -> Vec<Content>
where
    T: Debug + Clone + Serialize,
{
    let text = Content::text(out.message());
    match out.structure().map(Content::json) {
        None => vec![text],
        Some(Ok(json)) => vec![text, json],
        Some(Err(e)) => {
            error!("Unable to encode the result of '{}': {e}", out.message());
            vec![text]
        }
    }
}

/// Command failures such as a blank category name go back as error results carrying the whole
/// context chain. Only transport problems are protocol errors.
pub(super) fn tool_result<T>(result: crate::Result<Out<T>>) -> Result<CallToolResult, ErrorData>
where
    T: Debug + Clone + Serialize,
{
    Ok(match result {
        Ok(out) => CallToolResult::success(ledger_content(&out)),
        Err(e) => {
            warn!("Tool call failed: {e:#}");
            CallToolResult::error(vec![Content::text(format!("{e:#}"))])
        }
    })
}
