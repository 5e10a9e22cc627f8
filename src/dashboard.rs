use crate::error::DashboardError;
use dashgrid_layout::{Grid, GridNode};
use dashgrid_preview::{PreviewConfig, PreviewRenderer};
use dashgrid_types::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Visual theme handed through to dashboard clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text_color: Color,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x19, 0x76, 0xD2),
            secondary: Color::gray(0x42),
            background: Color::WHITE,
            text_color: Color::gray(0x21),
            font_family: "Roboto, sans-serif".to_string(),
        }
    }
}

/// A titled dashboard with an optional root layout grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    pub description: String,
    pub layout: Option<Grid>,
    pub theme: Theme,
}

/// Serialized form of a [`Dashboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardNode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<GridNode>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            layout: None,
            theme: Theme::default(),
        }
    }

    pub fn set_layout(&mut self, grid: Grid) -> &mut Self {
        self.layout = Some(grid);
        self
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn render(&self) -> DashboardNode {
        DashboardNode {
            title: self.title.clone(),
            description: self.description.clone(),
            theme: self.theme.clone(),
            layout: self.layout.as_ref().map(Grid::render_tree),
        }
    }

    pub fn from_node(node: DashboardNode) -> Result<Self, DashboardError> {
        Ok(Self {
            title: node.title,
            description: node.description,
            layout: node.layout.map(Grid::from_node).transpose()?,
            theme: node.theme,
        })
    }

    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string(&self.render())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(&self.render())?)
    }

    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let node: DashboardNode = serde_json::from_str(json)?;
        Self::from_node(node)
    }

    /// Writes a raster preview of the layout to `path`. Succeeds without
    /// writing anything when the dashboard has no layout.
    pub fn save_preview(
        &self,
        path: impl AsRef<Path>,
        config: &PreviewConfig,
    ) -> Result<(), DashboardError> {
        PreviewRenderer::new(*config).render_to_file(self.layout.as_ref(), path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_layout::Indicator;
    use serde_json::json;

    #[test]
    fn default_theme_matches_material_palette() {
        let dashboard = Dashboard::new("Analytics", "Real-time metrics");
        let value = serde_json::to_value(&dashboard.theme).unwrap();
        assert_eq!(
            value,
            json!({
                "primary": "#1976D2",
                "secondary": "#424242",
                "background": "#FFFFFF",
                "textColor": "#212121",
                "fontFamily": "Roboto, sans-serif"
            })
        );
    }

    #[test]
    fn layout_is_omitted_until_set() {
        let mut dashboard = Dashboard::new("Analytics", "");
        let value: serde_json::Value = serde_json::from_str(&dashboard.to_json().unwrap()).unwrap();
        assert!(value.get("layout").is_none());

        let mut grid = Grid::new("Main", 1, 1);
        grid.place_at(Indicator::new("Sales"), 0, 0, 1, 1);
        dashboard.set_layout(grid);
        let value: serde_json::Value = serde_json::from_str(&dashboard.to_json().unwrap()).unwrap();
        assert_eq!(value["layout"]["cells"][0]["content"]["title"], "Sales");
    }

    #[test]
    fn json_round_trip_preserves_the_dashboard() {
        let mut dashboard = Dashboard::new("Ops", "On-call overview");
        let mut grid = Grid::new("Main", 2, 2);
        grid.place_at(Indicator::new("Incidents").with_unit("open"), 0, 0, 1, 2);
        dashboard.set_layout(grid);

        let decoded = Dashboard::from_json(&dashboard.to_json_pretty().unwrap()).unwrap();
        assert_eq!(decoded, dashboard);
    }
}
