use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Chart {
    pub title: String,
    pub subtitle: String,
    /// line, bar, pie, etc.
    pub chart_type: String,
    pub data: Value,
    pub options: Value,
}

impl Chart {
    pub fn new(title: impl Into<String>, chart_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            chart_type: chart_type.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_options(mut self, options: impl Into<Value>) -> Self {
        self.options = options.into();
        self
    }
}
