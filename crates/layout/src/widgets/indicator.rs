use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single headline number (sales, active users, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Indicator {
    pub title: String,
    pub value: Value,
    /// Target value, or the URL a client queries for it.
    pub target: Value,
    pub unit: String,
    /// Percentage change against the previous period.
    pub trend: f64,
    pub description: String,
}

impl Indicator {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<Value>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
