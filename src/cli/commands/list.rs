use crate::config::Config;
use crate::core::directory::EmployeeDirectory;
use crate::core::ledger::EntryLedger;
use crate::core::report::Report;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::{print_driver_summary, print_report};

/// Recompute the whole view from the stores; `summary_only` skips the table.
pub fn handle(
    search: &Option<String>,
    summary_only: bool,
    cfg: &Config,
    pool: &mut DbPool,
) -> AppResult<()> {
    let directory = EmployeeDirectory::load(pool)?;
    let ledger = EntryLedger::load(pool)?;

    let report = Report::build(ledger.all(), &directory, search.as_deref().unwrap_or(""));

    if report.is_empty() && report.drivers.is_empty() {
        match search {
            Some(s) if !s.trim().is_empty() => info(format!("No entries for: {}", s.trim())),
            _ => info("No entries recorded yet."),
        }
        return Ok(());
    }

    if summary_only {
        print_driver_summary(&report, cfg);
    } else {
        print_report(&report, cfg);
    }

    Ok(())
}
