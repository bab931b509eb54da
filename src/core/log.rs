use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::visible_width;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 40;

/// ANSI color for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" => Colour::Cyan,
        "backup" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogLine {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogLine {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut lines = Vec::new();
        for r in rows {
            lines.push(r?);
        }

        if lines.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);
        let target_w = lines
            .iter()
            .map(|l| l.target.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_TARGET_WIDTH);

        println!("📜 Internal log:\n");

        for line in lines {
            let colored_op = color_for_operation(&line.operation)
                .paint(line.operation.as_str())
                .to_string();

            let target = if line.target.chars().count() > MAX_TARGET_WIDTH {
                let mut t: String = line.target.chars().take(MAX_TARGET_WIDTH - 3).collect();
                t.push_str("...");
                t
            } else {
                line.target.clone()
            };

            // padding computed on the visible width, without ANSI codes
            let visible_op_w = visible_width(&colored_op);
            let op_pad = " ".repeat(18usize.saturating_sub(visible_op_w));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} {:<target_w$} => {}",
                line.id,
                line.date,
                colored_op,
                op_pad,
                target,
                line.message,
                id_w = id_w,
                date_w = date_w,
                target_w = target_w
            );
        }

        Ok(())
    }
}
