use serde::{Deserialize, Serialize};

/// A worker of the fleet, identified by a unique token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub token: String,
    pub hourly_rate: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, token: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            hourly_rate,
        }
    }
}
