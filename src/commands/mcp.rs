//! MCP server command handler.
//!
//! This module implements the `expenses mcp` command which runs an MCP server
//! for AI agent integration.

use crate::args::McpArgs;
use crate::commands::Out;
use crate::mcp::{ExpenseServer, Io};
use crate::{mcp, Clock, Config, Result};

/// Runs the MCP server.
///
/// This launches a long-running process that communicates via JSON-RPC over stdin/stdout.
/// Everything recorded during the session is gone when it ends.
pub async fn mcp(config: Config, args: &McpArgs) -> Result<Out<()>> {
    let clock = args.now().map(Clock::Fixed).unwrap_or_default();
    let server = ExpenseServer::new(config.ledger(clock), config.amount_format());
    mcp::run_server(server, Io::Stdio).await?;
    Ok("Done running MCP server".into())
}
