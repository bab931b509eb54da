//! Distance tiers. The first 150 km of a day are untiered; the rest is
//! split into 50 km, 25 km and open-ended bands for reporting.

/// Kilometres covered before any tier starts counting.
pub const UNTIERED_KM: f64 = 150.0;
/// Width of section 1 (150–200 km).
pub const SECTION1_KM: f64 = 50.0;
/// Width of section 2 (200–225 km).
pub const SECTION2_KM: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistanceSections {
    pub section1: f64,
    pub section2: f64,
    pub section3: f64,
}

pub fn split_distance(total_distance: f64) -> DistanceSections {
    let remaining = (total_distance - UNTIERED_KM).max(0.0);

    DistanceSections {
        section1: remaining.min(SECTION1_KM),
        section2: (remaining - SECTION1_KM).max(0.0).min(SECTION2_KM),
        section3: (remaining - (SECTION1_KM + SECTION2_KM)).max(0.0),
    }
}
