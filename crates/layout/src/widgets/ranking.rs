use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingItem {
    pub position: u32,
    pub name: String,
    pub description: String,
    /// Avatar or logo URL.
    pub image: String,
}

impl RankingItem {
    pub fn new(
        position: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

/// An ordered leaderboard. `order` is a display hint for clients; items keep
/// the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ranking {
    pub title: String,
    pub order: SortOrder,
    pub items: Vec<RankingItem>,
}

impl Ranking {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn add_item(&mut self, item: RankingItem) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn set_order(&mut self, order: SortOrder) -> &mut Self {
        self.order = order;
        self
    }
}
