use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(file: &str, compress: bool, cfg: &Config, pool: &mut DbPool) -> AppResult<()> {
    BackupLogic::backup(pool, cfg, file, compress)
}
