use serde::Serialize;

/// Running totals over a set of worked (non day-off) entries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_hours: u64,
    pub total_minutes: u64,
    pub total_amount: f64,
    pub total_distance: f64,
    pub section1: f64,
    pub section2: f64,
    pub section3: f64,
}

impl Totals {
    /// Moves whole hours out of the minutes counter (`90m` → `1h 30m`).
    pub fn normalized(mut self) -> Self {
        self.total_hours += self.total_minutes / 60;
        self.total_minutes %= 60;
        self
    }
}

/// Per-token aggregate shown in the driver summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    #[serde(flatten)]
    pub totals: Totals,
    pub day_offs: u32,
}
