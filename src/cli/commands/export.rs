use crate::cli::parser::Commands;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, pool: &mut DbPool) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        search,
        force,
    } = cmd
    {
        ExportLogic::export(pool, *format, file, search, *force)?;
    }
    Ok(())
}
