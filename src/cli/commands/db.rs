use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(check: bool, vacuum: bool, info: bool, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if info {
        stats::print_db_info(pool, &cfg.database)?;
    }

    if check {
        println!("{}▶ Running integrity check…{}", CYAN, RESET);

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
        }
    }

    if vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);
        pool.conn.execute_batch("VACUUM;")?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
