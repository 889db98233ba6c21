//! MCP (Model Context Protocol) server implementation.
//!
//! This module provides an MCP server that exposes the expense ledger as tools for AI agent
//! integration. The server communicates via JSON-RPC over stdio.

/// Checks if the server has been initialized and returns an error if not.
macro_rules! require_init {
    ($self:expr) => {
        if !$self.check_initialized().await {
            return $crate::mcp::mcp_utils::not_initialized();
        }
    };
}

mod mcp_utils;
mod tools;

use crate::model::AmountFormat;
use crate::Ledger;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::transport::stdio;
use rmcp::{tool_handler, ServerHandler, ServiceExt};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// The expenses MCP server.
///
/// Owns the one `Ledger` for the session. Every tool call holds the ledger lock for the whole
/// command, so mutations never interleave.
#[derive(Debug, Clone)]
pub struct ExpenseServer {
    initialized: Arc<Mutex<bool>>,
    ledger: Arc<Mutex<Ledger>>,
    format: AmountFormat,
    tool_router: ToolRouter<ExpenseServer>,
}

impl ExpenseServer {
    /// Creates a new ExpenseServer that takes ownership of `ledger`.
    pub fn new(ledger: Ledger, format: AmountFormat) -> Self {
        Self::with_shared(Arc::new(Mutex::new(ledger)), format)
    }

    pub(crate) fn with_shared(ledger: Arc<Mutex<Ledger>>, format: AmountFormat) -> Self {
        Self {
            initialized: Arc::new(Mutex::new(false)),
            ledger,
            format,
            tool_router: Self::tool_router(),
        }
    }

    async fn check_initialized(&self) -> bool {
        *self.initialized.lock().await
    }
}

#[tool_handler]
impl ServerHandler for ExpenseServer {
    /// Returns server information sent to the MCP client during initialization.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "expenses".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(include_str!("docs/INTRO.md").into()),
        }
    }
}

/// Transport type for the MCP server.
#[derive(Debug, Default)]
pub(crate) enum Io {
    #[default]
    Stdio,
    /// Mock transport for testing - holds one end of a duplex channel.
    #[cfg(test)]
    Mock(tokio::io::DuplexStream),
}

/// Runs `server` on stdio or on a mock transport and blocks until the client disconnects or an
/// error occurs.
pub(crate) async fn run_server(server: ExpenseServer, io: Io) -> crate::Result<()> {
    info!("Starting MCP server...");

    let service = match io {
        Io::Stdio => server
            .serve(stdio())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start MCP server: {e}"))?,
        #[cfg(test)]
        Io::Mock(stream) => server
            .serve(stream)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start MCP server: {e}"))?,
    };

    info!("MCP server running, waiting for requests...");

    // Wait for the server to complete (client disconnects or error)
    service
        .waiting()
        .await
        .map_err(|e| anyhow::anyhow!("MCP server error: {e}"))?;

    info!("MCP server shut down");
    Ok(())
}
