//! Unified application error type.
//! Every layer (db, core, export, cli) returns AppError so that validation
//! rejections and infrastructure failures surface the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    #[error("Invalid distance: {0}")]
    InvalidDistance(String),

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    // ---------------------------
    // Directory / ledger rules
    // ---------------------------
    #[error("Token number {0} already exists. Please use a unique token.")]
    DuplicateToken(String),

    #[error("Please enter one or two token numbers, separated by a comma.")]
    TokenCount,

    #[error("Please enter two different token numbers.")]
    RepeatedToken,

    #[error("Token number {0} does not match any employee. Please check and try again.")]
    UnknownToken(String),

    #[error(
        "Person with token {token} is on leave on {date} (7th day after last Day Off). Please mark as Day Off."
    )]
    MandatoryOffDay { token: String, date: String },

    #[error("No record at position #{0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
