//! The tools exposed by the expenses MCP server.

use crate::args::{
    AddCategoryArgs, AddExpenseArgs, CategoryIdArgs, CategoryNameArgs, ExpenseIdArgs,
    UpdateExpenseArgs,
};
use crate::commands;
use crate::mcp::mcp_utils::{instructions, tool_result};
use crate::mcp::ExpenseServer;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use rmcp::{tool, tool_router};
use tracing::info;

#[tool_router(vis = "pub(super)")]
impl ExpenseServer {
    #[tool]
    /// Initialize the expenses MCP service for this session and return usage instructions. You
    /// **MUST** call this **ONCE** before using other tools so that you have the full usage
    /// instructions. You **MAY** call it more than once if you have forgotten them.
    async fn initialize_service(&self) -> Result<CallToolResult, McpError> {
        let mut initialized = self.initialized.lock().await;
        *initialized = true;
        instructions()
    }

    /// Record a new expense at the top of the list.
    ///
    /// `amount` and `description` are required. If either is blank, nothing is recorded and the
    /// result says "No expense was added" without being an error. `category` is a category name
    /// and defaults to the first category. `date` is YYYY-MM-DD and defaults to today.
    ///
    /// Returns the new expense, including its generated `id`.
    #[tool]
    async fn add_expense(
        &self,
        Parameters(params): Parameters<AddExpenseArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        info!("MCP: add_expense called");
        let mut ledger = self.ledger.lock().await;
        tool_result(commands::add_expense(&mut ledger, params, self.format))
    }

    /// Edit an expense by id, replacing its amount, description and category. The id and date are
    /// kept. `category` defaults to the expense's current category.
    ///
    /// Unknown ids, or a blank amount or description, change nothing.
    #[tool]
    async fn update_expense(
        &self,
        Parameters(params): Parameters<UpdateExpenseArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        info!("MCP: update_expense called for {}", params.id);
        let mut ledger = self.ledger.lock().await;
        tool_result(commands::update_expense(&mut ledger, params, self.format))
    }

    /// Delete an expense by id. Unknown ids change nothing.
    #[tool]
    async fn delete_expense(
        &self,
        Parameters(params): Parameters<ExpenseIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        info!("MCP: delete_expense called for {}", params.id);
        let mut ledger = self.ledger.lock().await;
        tool_result(commands::delete_expense(&mut ledger, params, self.format))
    }

    /// Get one expense by id, with its formatted amount and date and its category's color and
    /// icon.
    #[tool]
    async fn get_expense(
        &self,
        Parameters(params): Parameters<ExpenseIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        let ledger = self.ledger.lock().await;
        tool_result(commands::get_expense(&ledger, params, self.format))
    }

    /// List every expense, newest first, along with the running total.
    #[tool]
    async fn list_expenses(&self) -> Result<CallToolResult, McpError> {
        require_init!(self);
        let ledger = self.ledger.lock().await;
        tool_result(commands::list_expenses(&ledger, self.format))
    }

    /// Return every expense as CSV text with the columns id, date, description, category and
    /// amount.
    #[tool]
    async fn export_expenses(&self) -> Result<CallToolResult, McpError> {
        require_init!(self);
        let ledger = self.ledger.lock().await;
        tool_result(commands::export_expenses(&ledger))
    }

    /// Add a category. `name` is required; `color` (hex) and `icon` default to the first entries
    /// of the palette.
    #[tool]
    async fn add_category(
        &self,
        Parameters(params): Parameters<AddCategoryArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        info!("MCP: add_category called");
        let mut ledger = self.ledger.lock().await;
        tool_result(commands::add_category(ledger.categories_mut(), params))
    }

    /// Delete a category by id. Expenses that use its name are not changed; they are drawn with
    /// the fallback color and icon from then on.
    #[tool]
    async fn delete_category(
        &self,
        Parameters(params): Parameters<CategoryIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        info!("MCP: delete_category called for {}", params.id);
        let mut ledger = self.ledger.lock().await;
        tool_result(commands::delete_category(ledger.categories_mut(), params))
    }

    /// List every category with its id, name, color and icon.
    #[tool]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        require_init!(self);
        let ledger = self.ledger.lock().await;
        tool_result(commands::list_categories(ledger.categories()))
    }

    /// Get the color and icon used to draw expenses with the given category name. Names that
    /// match no category get the fallback color #FFD93D and icon more-horiz.
    #[tool]
    async fn lookup_category(
        &self,
        Parameters(params): Parameters<CategoryNameArgs>,
    ) -> Result<CallToolResult, McpError> {
        require_init!(self);
        let ledger = self.ledger.lock().await;
        tool_result(commands::lookup_category(ledger.categories(), params))
    }

    /// List the colors and icons offered for new categories.
    #[tool]
    async fn palette(&self) -> Result<CallToolResult, McpError> {
        require_init!(self);
        tool_result(commands::palette())
    }

    /// Weekly and monthly totals.
    ///
    /// `weekly` sums the last seven days (inclusive) by weekday, Sun..Sat. `monthly` sums every
    /// expense by calendar month, Jan..Dec, merging the same month of different years.
    /// `week_total` is the weekly sum and `month_total` is the current month's bucket.
    #[tool]
    async fn history(&self) -> Result<CallToolResult, McpError> {
        require_init!(self);
        let ledger = self.ledger.lock().await;
        tool_result(commands::history(&ledger, self.format))
    }
}
