pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod tokens;

pub use formatting::{format_amount, format_date, format_distance, format_time};
