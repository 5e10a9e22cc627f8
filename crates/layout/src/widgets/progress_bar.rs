use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    pub title: String,
    pub value: f64,
    pub max_value: f64,
    pub show_percent: bool,
}

impl ProgressBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: 0.0,
            max_value: 100.0,
            show_percent: true,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_max(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_show_percent(mut self, show_percent: bool) -> Self {
        self.show_percent = show_percent;
        self
    }

    /// `value` as a percentage of `max_value`; 0 when the maximum is 0.
    pub fn percent(&self) -> f64 {
        if self.max_value == 0.0 {
            0.0
        } else {
            self.value / self.max_value * 100.0
        }
    }

    pub fn to_node(&self) -> ProgressBarNode {
        ProgressBarNode {
            title: self.title.clone(),
            value: self.value,
            max_value: self.max_value,
            show_percent: self.show_percent,
            percent: self.percent(),
        }
    }
}

/// Render tree form of a [`ProgressBar`], carrying the derived percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBarNode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default = "default_max")]
    pub max_value: f64,
    #[serde(default = "default_show_percent")]
    pub show_percent: bool,
    #[serde(default)]
    pub percent: f64,
}

fn default_max() -> f64 {
    100.0
}

fn default_show_percent() -> bool {
    true
}

impl From<ProgressBarNode> for ProgressBar {
    fn from(node: ProgressBarNode) -> Self {
        ProgressBar {
            title: node.title,
            value: node.value,
            max_value: node.max_value,
            show_percent: node.show_percent,
        }
    }
}
