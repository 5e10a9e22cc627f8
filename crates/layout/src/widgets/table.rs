use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A paginated table. Rows are keyed objects; `headers` only labels columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub data: Vec<Map<String, Value>>,
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            title: String::new(),
            headers: Vec::new(),
            data: Vec::new(),
            page_size: 10,
            current_page: 1,
        }
    }
}

impl Table {
    pub fn new<I, S>(title: impl Into<String>, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Appends a row. Non-object values are ignored since rows are keyed by column.
    pub fn push_row(&mut self, row: Value) -> &mut Self {
        match row {
            Value::Object(map) => self.data.push(map),
            other => log::warn!("Ignoring non-object table row in '{}': {}", self.title, other),
        }
        self
    }
}
