//! History command handler: the charts screen.

use crate::commands::Out;
use crate::model::AmountFormat;
use crate::{HistorySummary, Ledger, Result};

/// Snapshots the expenses and returns the weekly and monthly charts with their summary totals.
pub fn history(ledger: &Ledger, format: AmountFormat) -> Result<Out<HistorySummary>> {
    let summary = ledger.history().summary();
    let message = format!(
        "This week's total: {}. This month's total: {}",
        summary.week_total.format(format),
        summary.month_total.format(format)
    );
    Ok(Out::new(message, summary))
}
