use crate::core::calculator::{calculate_amount, is_off_day_for_person, split_distance};
use crate::core::directory::EmployeeDirectory;
use crate::db::pool::DbPool;
use crate::db::store::{ENTRIES_KEY, load_list, save_list};
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntrySubmission, WorkDetails};
use crate::utils::tokens::parse_entry_tokens;

/// In-memory entry list mirrored to the `entries` storage key.
#[derive(Debug, Default, Clone)]
pub struct EntryLedger {
    entries: Vec<Entry>,
}

impl EntryLedger {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn load(pool: &DbPool) -> AppResult<Self> {
        Ok(Self::new(load_list(pool, ENTRIES_KEY)?))
    }

    pub fn persist(&self, pool: &DbPool) -> AppResult<()> {
        save_list(pool, ENTRIES_KEY, &self.entries)
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> AppResult<&Entry> {
        self.entries.get(index).ok_or(AppError::InvalidIndex(index + 1))
    }

    /// Validate a submission and append one entry per named token.
    /// Nothing is appended when any check fails.
    pub fn submit(
        &mut self,
        submission: &EntrySubmission,
        directory: &EmployeeDirectory,
    ) -> AppResult<Vec<Entry>> {
        let created = build_entries(&self.entries, submission, directory)?;
        self.entries.extend(created.iter().cloned());
        Ok(created)
    }

    /// Replace the entry at `index` with the entries produced by `submission`.
    ///
    /// The old entry is left out of the history while validating, so editing a
    /// day off does not block itself. On rejection the ledger is unchanged.
    pub fn update(
        &mut self,
        index: usize,
        submission: &EntrySubmission,
        directory: &EmployeeDirectory,
    ) -> AppResult<Vec<Entry>> {
        if index >= self.entries.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }

        let mut history = self.entries.clone();
        history.remove(index);

        let created = build_entries(&history, submission, directory)?;
        self.entries.splice(index..=index, created.iter().cloned());
        Ok(created)
    }

    /// Remove the entry at `index` and return it so it can be re-submitted.
    pub fn take_for_edit(&mut self, index: usize) -> AppResult<Entry> {
        self.delete(index)
    }

    pub fn delete(&mut self, index: usize) -> AppResult<Entry> {
        if index >= self.entries.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }
        Ok(self.entries.remove(index))
    }
}

/// Runs every submission check against `history` and derives the new entries.
///
/// Check order: token count, repeated token, unknown tokens, off-day rule.
fn build_entries(
    history: &[Entry],
    submission: &EntrySubmission,
    directory: &EmployeeDirectory,
) -> AppResult<Vec<Entry>> {
    let tokens = parse_entry_tokens(&submission.tokens);

    if tokens.is_empty() || tokens.len() > 2 {
        return Err(AppError::TokenCount);
    }
    if tokens.len() == 2 && tokens[0] == tokens[1] {
        return Err(AppError::RepeatedToken);
    }

    let mut employees = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let employee = directory
            .lookup(token)
            .ok_or_else(|| AppError::UnknownToken(token.clone()))?;
        employees.push(employee);
    }

    if !submission.is_day_off {
        for token in &tokens {
            if is_off_day_for_person(history, token, submission.date) {
                return Err(AppError::MandatoryOffDay {
                    token: token.clone(),
                    date: submission.date.format("%Y-%m-%d").to_string(),
                });
            }
        }
    }

    let work = if submission.is_day_off {
        WorkDetails::default()
    } else {
        validate_work(submission)?
    };
    let sections = split_distance(work.total_distance);

    Ok(employees
        .into_iter()
        .map(|employee| Entry {
            token: employee.token.clone(),
            date: submission.date,
            is_day_off: submission.is_day_off,
            hours: work.hours,
            minutes: work.minutes,
            total_distance: work.total_distance,
            section1: sections.section1,
            section2: sections.section2,
            section3: sections.section3,
            amount: calculate_amount(&work, employee.hourly_rate, submission.is_day_off),
        })
        .collect())
}

fn validate_work(submission: &EntrySubmission) -> AppResult<WorkDetails> {
    let work = submission.work;
    if !work.total_distance.is_finite() || work.total_distance < 0.0 {
        return Err(AppError::InvalidDistance(work.total_distance.to_string()));
    }
    Ok(work)
}
