use crate::cli::parser::EmployeeAction;
use crate::config::Config;
use crate::core::directory::EmployeeDirectory;
use crate::core::logic::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::ui::render::employees_table;

/// 1-based position from the CLI → 0-based index.
pub(crate) fn to_index(position: usize) -> AppResult<usize> {
    position.checked_sub(1).ok_or(AppError::InvalidIndex(position))
}

pub fn handle(action: &EmployeeAction, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    match action {
        EmployeeAction::Add { name, token, rate } => {
            let added = EmployeeLogic::add(pool, name, token, *rate)?;
            success(format!(
                "Employee {} added with token {} ({}{:.2}/h).",
                added.name, added.token, cfg.currency_symbol, added.hourly_rate
            ));
        }

        EmployeeAction::List => {
            let directory = EmployeeDirectory::load(pool)?;
            if directory.is_empty() {
                info("No employees yet. Add one with `employee add`.");
            } else {
                print!("{}", employees_table(directory.all(), cfg));
            }
        }

        EmployeeAction::Edit {
            position,
            name,
            token,
            rate,
        } => {
            let index = to_index(*position)?;
            let updated =
                EmployeeLogic::update(pool, index, name.as_deref(), token.as_deref(), *rate)?;
            success(format!(
                "Employee #{} updated: {} ({}, {}{:.2}/h).",
                position, updated.name, updated.token, cfg.currency_symbol, updated.hourly_rate
            ));
        }

        EmployeeAction::Del { position, yes } => {
            let index = to_index(*position)?;
            let directory = EmployeeDirectory::load(pool)?;
            let target = directory.get(index)?;

            let prompt = format!(
                "Delete employee #{} {} ({})? Their entries are kept but hidden from reports.",
                position, target.name, target.token
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = EmployeeLogic::delete(pool, index)?;
            success(format!("Employee {} ({}) deleted.", removed.name, removed.token));
        }
    }

    Ok(())
}
