//! Work-detail inputs of the entry form.
//!
//! Two states only: with the day-off flag set the hours, minutes and distance
//! inputs are cleared and disabled; unsetting it enables them again.

use crate::models::{Entry, WorkDetails};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkInputs {
    hours: Option<u32>,
    minutes: Option<u32>,
    distance: Option<f64>,
    day_off: bool,
}

impl WorkInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form loaded with a stored entry, as when it is opened for editing.
    pub fn from_entry(entry: &Entry) -> Self {
        let mut form = Self::new();
        form.set_day_off(entry.is_day_off);
        form.set_hours(entry.hours);
        form.set_minutes(entry.minutes);
        form.set_distance(entry.total_distance);
        form
    }

    pub fn is_day_off(&self) -> bool {
        self.day_off
    }

    pub fn is_enabled(&self) -> bool {
        !self.day_off
    }

    /// Toggle the day-off checkbox. Checking it clears every work field.
    pub fn set_day_off(&mut self, checked: bool) {
        self.day_off = checked;
        if checked {
            self.hours = None;
            self.minutes = None;
            self.distance = None;
        }
    }

    /// Returns false (and keeps the field empty) while the inputs are disabled.
    pub fn set_hours(&mut self, hours: u32) -> bool {
        if self.day_off {
            return false;
        }
        self.hours = Some(hours);
        true
    }

    pub fn set_minutes(&mut self, minutes: u32) -> bool {
        if self.day_off {
            return false;
        }
        self.minutes = Some(minutes);
        true
    }

    pub fn set_distance(&mut self, km: f64) -> bool {
        if self.day_off {
            return false;
        }
        self.distance = Some(km);
        true
    }

    /// Current values; empty fields count as zero.
    pub fn details(&self) -> WorkDetails {
        WorkDetails {
            hours: self.hours.unwrap_or(0),
            minutes: self.minutes.unwrap_or(0),
            total_distance: self.distance.unwrap_or(0.0),
        }
    }
}
