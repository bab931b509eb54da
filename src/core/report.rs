//! Read-only aggregation over the ledger: search filter, table totals and the
//! per-driver summary. Nothing in here mutates the stores.

use crate::core::directory::EmployeeDirectory;
use crate::models::{Entry, Totals, TokenSummary};
use crate::utils::tokens::parse_search_tokens;
use indexmap::IndexMap;
use serde::Serialize;

/// Ledger entries whose token is in the search set, with their ledger
/// positions (0-based). An empty search keeps everything.
pub fn filter_by_tokens<'a>(entries: &'a [Entry], search: &str) -> Vec<(usize, &'a Entry)> {
    let tokens = parse_search_tokens(search);

    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| tokens.is_empty() || tokens.contains(&e.token))
        .collect()
}

fn accumulate(totals: &mut Totals, entry: &Entry) {
    totals.total_hours += u64::from(entry.hours);
    totals.total_minutes += u64::from(entry.minutes);
    totals.total_amount += entry.amount;
    totals.total_distance += entry.total_distance;
    totals.section1 += entry.section1;
    totals.section2 += entry.section2;
    totals.section3 += entry.section3;
}

/// Grand totals of the worked entries, minutes normalized into hours.
pub fn table_totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut totals = Totals::default();
    for entry in entries.into_iter().filter(|e| !e.is_day_off) {
        accumulate(&mut totals, entry);
    }
    totals.normalized()
}

/// One reduction pass grouping entries by token, in order of first appearance.
pub fn summarize<'a, I>(entries: I) -> IndexMap<String, TokenSummary>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut summary: IndexMap<String, TokenSummary> = IndexMap::new();

    for entry in entries {
        let slot = summary.entry(entry.token.clone()).or_default();
        if entry.is_day_off {
            slot.day_offs += 1;
        } else {
            accumulate(&mut slot.totals, entry);
        }
    }

    for s in summary.values_mut() {
        s.totals = s.totals.normalized();
    }

    summary
}

/// A table line joined with its employee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// 1-based ledger position, as accepted by `entry edit/del`.
    pub position: usize,
    pub name: String,
    #[serde(flatten)]
    pub entry: Entry,
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCard {
    pub token: String,
    pub name: String,
    #[serde(flatten)]
    pub summary: TokenSummary,
}

/// Everything the list, print and export views show.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub totals: Totals,
    pub drivers: Vec<DriverCard>,
}

impl Report {
    /// Build the view for the current ledger, filtered by `search`.
    ///
    /// Entries whose employee was deleted are left out of the rows and of
    /// the driver cards; the grand totals still count them.
    pub fn build(entries: &[Entry], directory: &EmployeeDirectory, search: &str) -> Self {
        let filtered = filter_by_tokens(entries, search);

        let rows = filtered
            .iter()
            .filter_map(|(idx, entry)| {
                let employee = directory.lookup(&entry.token)?;
                Some(ReportRow {
                    position: idx + 1,
                    name: employee.name.clone(),
                    entry: (*entry).clone(),
                    hourly_rate: employee.hourly_rate,
                })
            })
            .collect();

        let totals = table_totals(filtered.iter().map(|(_, e)| *e));

        let drivers = summarize(filtered.iter().map(|(_, e)| *e))
            .into_iter()
            .filter_map(|(token, summary)| {
                let employee = directory.lookup(&token)?;
                Some(DriverCard {
                    name: employee.name.clone(),
                    token,
                    summary,
                })
            })
            .collect();

        Self {
            rows,
            totals,
            drivers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
