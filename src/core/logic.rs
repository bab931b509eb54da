//! Command-level business logic: hydrate the stores, apply one mutation,
//! flush the touched store and write the audit line.

use crate::core::directory::EmployeeDirectory;
use crate::core::ledger::EntryLedger;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Employee, Entry, EntrySubmission};

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(pool: &mut DbPool, name: &str, token: &str, hourly_rate: f64) -> AppResult<Employee> {
        let mut directory = EmployeeDirectory::load(pool)?;
        let added = directory.add(name, token, hourly_rate)?.clone();
        directory.persist(pool)?;

        audit(
            &pool.conn,
            "add",
            &format!("employee {}", added.token),
            &format!("Added {} at {:.2}/h", added.name, added.hourly_rate),
        );
        Ok(added)
    }

    /// Edit in place. Fields left as `None` keep their current value.
    pub fn update(
        pool: &mut DbPool,
        index: usize,
        name: Option<&str>,
        token: Option<&str>,
        hourly_rate: Option<f64>,
    ) -> AppResult<Employee> {
        let mut directory = EmployeeDirectory::load(pool)?;
        let current = directory.get(index)?.clone();

        let updated = directory
            .update(
                index,
                name.unwrap_or(&current.name),
                token.unwrap_or(&current.token),
                hourly_rate.unwrap_or(current.hourly_rate),
            )?
            .clone();
        directory.persist(pool)?;

        audit(
            &pool.conn,
            "edit",
            &format!("employee {}", current.token),
            &format!(
                "{} ({}, {:.2}/h) -> {} ({}, {:.2}/h)",
                current.name,
                current.token,
                current.hourly_rate,
                updated.name,
                updated.token,
                updated.hourly_rate
            ),
        );
        Ok(updated)
    }

    /// Entries referencing the removed token are kept (they become orphans).
    pub fn delete(pool: &mut DbPool, index: usize) -> AppResult<Employee> {
        let mut directory = EmployeeDirectory::load(pool)?;
        let removed = directory.delete(index)?;
        directory.persist(pool)?;

        audit(
            &pool.conn,
            "del",
            &format!("employee {}", removed.token),
            &format!("Deleted {}", removed.name),
        );
        Ok(removed)
    }
}

pub struct EntryLogic;

impl EntryLogic {
    pub fn add(pool: &mut DbPool, submission: &EntrySubmission) -> AppResult<Vec<Entry>> {
        let directory = EmployeeDirectory::load(pool)?;
        let mut ledger = EntryLedger::load(pool)?;

        let created = ledger.submit(submission, &directory)?;
        ledger.persist(pool)?;

        for e in &created {
            audit(&pool.conn, "add", &format!("entry {}", e.token), &describe(e));
        }
        Ok(created)
    }

    pub fn update(
        pool: &mut DbPool,
        index: usize,
        submission: &EntrySubmission,
    ) -> AppResult<Vec<Entry>> {
        let directory = EmployeeDirectory::load(pool)?;
        let mut ledger = EntryLedger::load(pool)?;
        let previous = ledger.get(index)?.clone();

        let created = ledger.update(index, submission, &directory)?;
        ledger.persist(pool)?;

        for e in &created {
            audit(
                &pool.conn,
                "edit",
                &format!("entry {}", previous.token),
                &format!("{} -> {}", describe(&previous), describe(e)),
            );
        }
        Ok(created)
    }

    pub fn delete(pool: &mut DbPool, index: usize) -> AppResult<Entry> {
        let mut ledger = EntryLedger::load(pool)?;
        let removed = ledger.delete(index)?;
        ledger.persist(pool)?;

        audit(
            &pool.conn,
            "del",
            &format!("entry {}", removed.token),
            &describe(&removed),
        );
        Ok(removed)
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Replace both stores with previously serialized lists (for example a
    /// dump of the browser version's `employees` / `entries` keys).
    /// Employees go through the regular add checks, so a blob with duplicate
    /// tokens is rejected as a whole.
    pub fn apply(
        pool: &mut DbPool,
        employees: Vec<Employee>,
        entries: Vec<Entry>,
    ) -> AppResult<(usize, usize)> {
        let mut directory = EmployeeDirectory::default();
        for e in &employees {
            directory.add(&e.name, &e.token, e.hourly_rate)?;
        }
        let ledger = EntryLedger::new(entries);

        directory.persist(pool)?;
        ledger.persist(pool)?;

        audit(
            &pool.conn,
            "import",
            "storage",
            &format!(
                "Imported {} employees and {} entries",
                directory.len(),
                ledger.len()
            ),
        );
        Ok((directory.len(), ledger.len()))
    }
}

fn describe(e: &Entry) -> String {
    if e.is_day_off {
        format!("{} Day Off", e.date_str())
    } else {
        format!(
            "{} {}h {}m {:.2} km amount {:.2}",
            e.date_str(),
            e.hours,
            e.minutes,
            e.total_distance,
            e.amount
        )
    }
}
