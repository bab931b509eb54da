use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::PrintLogic;

pub fn handle(cmd: &Commands, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::Print {
        file,
        format,
        search,
        force,
    } = cmd
    {
        PrintLogic::print(pool, cfg, *format, file, search, *force)?;
    }
    Ok(())
}
