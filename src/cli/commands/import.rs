use crate::core::logic::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Entry};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;
use serde::de::DeserializeOwned;
use std::fs;

fn read_json_list<T: DeserializeOwned>(file: &str) -> AppResult<Vec<T>> {
    let path = expand_tilde(file);
    let content = fs::read_to_string(&path)
        .map_err(|e| AppError::Other(format!("Cannot read {}: {e}", path.display())))?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

pub fn handle(employees: &str, entries: &str, yes: bool, pool: &mut DbPool) -> AppResult<()> {
    let employees: Vec<Employee> = read_json_list(employees)?;
    let entries: Vec<Entry> = read_json_list(entries)?;

    let prompt = format!(
        "Replace all stored data with {} employees and {} entries?",
        employees.len(),
        entries.len()
    );
    if !yes && !ask_confirmation(&prompt) {
        info("Import cancelled.");
        return Ok(());
    }

    let (n_employees, n_entries) = ImportLogic::apply(pool, employees, entries)?;
    success(format!(
        "Imported {n_employees} employees and {n_entries} entries."
    ));
    Ok(())
}
