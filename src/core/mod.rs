pub mod backup;
pub mod calculator;
pub mod directory;
pub mod form;
pub mod ledger;
pub mod log;
pub mod logic;
pub mod report;
