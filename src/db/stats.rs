use crate::db::pool::DbPool;
use crate::db::store::{EMPLOYEES_KEY, ENTRIES_KEY, load_list};
use crate::errors::AppResult;
use crate::models::{Employee, Entry};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = file_size / 1024;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORD COUNTS
    //
    let employees: Vec<Employee> = load_list(pool, EMPLOYEES_KEY)?;
    let entries: Vec<Entry> = load_list(pool, ENTRIES_KEY)?;
    let day_offs = entries.iter().filter(|e| e.is_day_off).count();

    println!(
        "{}• Employees:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        employees.len(),
        RESET
    );
    println!(
        "{}• Entries:{} {}{}{} ({} day offs)",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET,
        day_offs
    );

    //
    // 3) DATE RANGE
    //
    let first_date = entries.iter().map(|e| e.date).min();
    let last_date = entries.iter().map(|e| e.date).max();

    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first_date));
    println!("    to:   {}", fmt(last_date));

    println!();
    Ok(())
}
