use crate::node_kind::FilterKind;
use serde::{Deserialize, Serialize};

/// One control of a [`FilterBar`](super::FilterBar).
///
/// `label` is what the user sees, `key` is the query parameter the control
/// drives. The kind-specific payload lives in `control` and is flattened next
/// to them in the render tree, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub label: String,
    pub key: String,
    #[serde(flatten)]
    pub control: FilterControl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterControl {
    Date,
    Select {
        options: Vec<String>,
    },
    Text,
    Bool {
        value: bool,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Range {
        min: f64,
        max: f64,
    },
    Checkbox {
        options: Vec<String>,
    },
    Radio {
        options: Vec<String>,
    },
    MultiSelect {
        options: Vec<String>,
    },
    Slider {
        min: f64,
        max: f64,
    },
    Toggle {
        value: bool,
    },
    Search {
        #[serde(default)]
        placeholder: String,
    },
    Color {
        value: String,
    },
}

impl FilterControl {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterControl::Date => FilterKind::Date,
            FilterControl::Select { .. } => FilterKind::Select,
            FilterControl::Text => FilterKind::Text,
            FilterControl::Bool { .. } => FilterKind::Bool,
            FilterControl::Number { .. } => FilterKind::Number,
            FilterControl::Range { .. } => FilterKind::Range,
            FilterControl::Checkbox { .. } => FilterKind::Checkbox,
            FilterControl::Radio { .. } => FilterKind::Radio,
            FilterControl::MultiSelect { .. } => FilterKind::MultiSelect,
            FilterControl::Slider { .. } => FilterKind::Slider,
            FilterControl::Toggle { .. } => FilterKind::Toggle,
            FilterControl::Search { .. } => FilterKind::Search,
            FilterControl::Color { .. } => FilterKind::Color,
        }
    }
}

fn owned(options: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    options.into_iter().map(Into::into).collect()
}

impl Filter {
    pub fn new(label: impl Into<String>, key: impl Into<String>, control: FilterControl) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            control,
        }
    }

    pub fn kind(&self) -> FilterKind {
        self.control.kind()
    }

    pub fn date(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(label, key, FilterControl::Date)
    }

    pub fn select(
        label: impl Into<String>,
        key: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(label, key, FilterControl::Select { options: owned(options) })
    }

    pub fn text(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(label, key, FilterControl::Text)
    }

    pub fn boolean(label: impl Into<String>, key: impl Into<String>, value: bool) -> Self {
        Self::new(label, key, FilterControl::Bool { value })
    }

    pub fn number(
        label: impl Into<String>,
        key: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self::new(label, key, FilterControl::Number { min, max })
    }

    pub fn range(label: impl Into<String>, key: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(label, key, FilterControl::Range { min, max })
    }

    pub fn checkbox(
        label: impl Into<String>,
        key: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(label, key, FilterControl::Checkbox { options: owned(options) })
    }

    pub fn radio(
        label: impl Into<String>,
        key: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(label, key, FilterControl::Radio { options: owned(options) })
    }

    pub fn multi_select(
        label: impl Into<String>,
        key: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(label, key, FilterControl::MultiSelect { options: owned(options) })
    }

    pub fn slider(label: impl Into<String>, key: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(label, key, FilterControl::Slider { min, max })
    }

    pub fn toggle(label: impl Into<String>, key: impl Into<String>, value: bool) -> Self {
        Self::new(label, key, FilterControl::Toggle { value })
    }

    pub fn search(
        label: impl Into<String>,
        key: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self::new(label, key, FilterControl::Search { placeholder: placeholder.into() })
    }

    pub fn color(label: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, key, FilterControl::Color { value: value.into() })
    }
}
