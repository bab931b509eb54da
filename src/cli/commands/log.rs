use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(print: bool, pool: &mut DbPool) -> AppResult<()> {
    if print {
        LogLogic::print_log(pool)?;
    } else {
        info("Nothing to do. Use `log --print` to show the internal log.");
    }

    Ok(())
}
