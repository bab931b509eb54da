pub mod distance;
pub mod off_day;
pub mod pay;

pub use distance::{DistanceSections, split_distance};
pub use off_day::is_off_day_for_person;
pub use pay::calculate_amount;
