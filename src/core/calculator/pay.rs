use crate::models::WorkDetails;

/// Pay for one entry: decimal hours times the employee's hourly rate.
/// Day offs are never paid.
pub fn calculate_amount(work: &WorkDetails, hourly_rate: f64, is_day_off: bool) -> f64 {
    if is_day_off {
        return 0.0;
    }

    let time_in_hours = f64::from(work.hours) + f64::from(work.minutes) / 60.0;
    time_in_hours * hourly_rate
}
