use crate::cli::commands::employee::to_index;
use crate::cli::parser::{EntryAction, EntryArgs, EntryEditArgs};
use crate::config::Config;
use crate::core::form::WorkInputs;
use crate::core::ledger::EntryLedger;
use crate::core::logic::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntrySubmission};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::{date, format_amount, format_distance, format_time};

/// Apply the optional work fields, warning about the ones a day off disables.
fn fill_work(
    form: &mut WorkInputs,
    hours: Option<u32>,
    minutes: Option<u32>,
    distance: Option<f64>,
) {
    let mut ignored = Vec::new();
    if let Some(h) = hours
        && !form.set_hours(h)
    {
        ignored.push("--hours");
    }
    if let Some(m) = minutes
        && !form.set_minutes(m)
    {
        ignored.push("--minutes");
    }
    if let Some(km) = distance
        && !form.set_distance(km)
    {
        ignored.push("--distance");
    }

    if !ignored.is_empty() {
        warning(format!(
            "Day off: ignoring {} (work fields are disabled).",
            ignored.join(", ")
        ));
    }
}

/// Fill an empty entry form from the CLI fields.
fn build_submission(args: &EntryArgs) -> AppResult<EntrySubmission> {
    let d = date::parse_or_today(args.date.as_deref())?;

    let mut form = WorkInputs::new();
    form.set_day_off(args.day_off);
    fill_work(&mut form, args.hours, args.minutes, args.distance);

    Ok(EntrySubmission {
        tokens: args.tokens.clone(),
        date: d,
        is_day_off: form.is_day_off(),
        work: form.details(),
    })
}

/// Load the stored entry into the form, then overlay the given fields.
fn build_edit_submission(args: &EntryEditArgs, stored: &Entry) -> AppResult<EntrySubmission> {
    let d = match args.date.as_deref() {
        Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?,
        None => stored.date,
    };

    let mut form = WorkInputs::from_entry(stored);
    if args.day_off {
        form.set_day_off(true);
    } else if args.work_day {
        form.set_day_off(false);
    }
    fill_work(&mut form, args.hours, args.minutes, args.distance);

    Ok(EntrySubmission {
        tokens: args.tokens.clone().unwrap_or_else(|| stored.token.clone()),
        date: d,
        is_day_off: form.is_day_off(),
        work: form.details(),
    })
}

fn describe(e: &Entry, cfg: &Config) -> String {
    if e.is_day_off {
        format!("{} on {}: Day Off", e.token, e.date_str())
    } else {
        format!(
            "{} on {}: {}, {}, amount {}",
            e.token,
            e.date_str(),
            format_time(e.hours, e.minutes),
            format_distance(e.total_distance),
            format_amount(e.amount, &cfg.currency_symbol)
        )
    }
}

pub fn handle(action: &EntryAction, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    match action {
        EntryAction::Add(args) => {
            let submission = build_submission(args)?;
            let created = EntryLogic::add(pool, &submission)?;
            for e in &created {
                success(format!("Entry added: {}", describe(e, cfg)));
            }
        }

        EntryAction::Edit { position, fields } => {
            let index = to_index(*position)?;
            let ledger = EntryLedger::load(pool)?;
            let submission = build_edit_submission(fields, ledger.get(index)?)?;
            let created = EntryLogic::update(pool, index, &submission)?;
            for e in &created {
                success(format!("Entry #{} updated: {}", position, describe(e, cfg)));
            }
        }

        EntryAction::Del { position, yes } => {
            let index = to_index(*position)?;
            let ledger = EntryLedger::load(pool)?;
            let target = ledger.get(index)?;

            let prompt = format!(
                "Delete entry #{} ({})? This action is irreversible.",
                position,
                describe(target, cfg)
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = EntryLogic::delete(pool, index)?;
            success(format!("Entry deleted: {}", describe(&removed, cfg)));
        }
    }

    Ok(())
}
