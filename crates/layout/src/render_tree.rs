//! Serializes a [`Grid`] into an ordered tree of cell descriptors.
//!
//! The top-level grid renders to an untagged [`GridNode`]. Cell contents are
//! [`RenderNode`]s, internally tagged by `type`; a grid nested as content is
//! tagged `"grid"` like every other kind. When decoding, a content node that
//! has no `type` but looks like a grid is accepted as one.

use crate::LayoutError;
use crate::config::GridConfig;
use crate::grid::Grid;
use crate::widget::{Render, Widget};
use crate::widgets::{Chart, FilterBar, Indicator, ProgressBarNode, Ranking, Table};
use serde::{Deserialize, Deserializer, Serialize};

/// A widget in its serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    Indicator(Indicator),
    Chart(Chart),
    Table(Table),
    ProgressBar(ProgressBarNode),
    FilterBar(FilterBar),
    Ranking(Ranking),
    Grid(GridNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridNode {
    #[serde(default)]
    pub title: String,
    pub rows: usize,
    pub columns: usize,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub cells: Vec<CellNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellNode {
    pub row: usize,
    pub column: usize,
    #[serde(default = "default_span")]
    pub row_span: usize,
    #[serde(default = "default_span")]
    pub col_span: usize,
    #[serde(deserialize_with = "deserialize_content")]
    pub content: RenderNode,
}

fn default_spacing() -> f64 {
    10.0
}

fn default_padding() -> f64 {
    15.0
}

fn default_span() -> usize {
    1
}

fn deserialize_content<'de, D>(deserializer: D) -> Result<RenderNode, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Content {
        Tagged(RenderNode),
        UntaggedGrid(GridNode),
    }

    Ok(match Content::deserialize(deserializer)? {
        Content::Tagged(node) => node,
        Content::UntaggedGrid(grid) => RenderNode::Grid(grid),
    })
}

impl Grid {
    /// Builds the render tree: every anchored cell in row-major order, with
    /// its content rendered recursively.
    pub fn render_tree(&self) -> GridNode {
        let cells: Vec<CellNode> = self
            .cells()
            .map(|cell| CellNode {
                row: cell.row,
                column: cell.column,
                row_span: cell.row_span,
                col_span: cell.col_span,
                content: cell.content.render(),
            })
            .collect();

        log::debug!("Rendered grid '{}' with {} cells", self.title(), cells.len());

        GridNode {
            title: self.title().to_string(),
            rows: self.rows(),
            columns: self.columns(),
            spacing: self.spacing(),
            padding: self.padding(),
            cells,
        }
    }

    /// Rebuilds a grid by replaying every cell through [`Grid::place_at`], so
    /// cells anchored outside the declared size are dropped.
    ///
    /// Fails when the declared size, or that of a nested grid, is too large
    /// to allocate.
    pub fn from_node(node: GridNode) -> Result<Grid, LayoutError> {
        let config = GridConfig {
            spacing: node.spacing,
            padding: node.padding,
            ..GridConfig::default()
        };
        let mut grid = Grid::try_with_config(node.title, node.rows, node.columns, config)?;
        for cell in node.cells {
            grid.place_at(
                Widget::from_node(cell.content)?,
                cell.row,
                cell.column,
                cell.row_span,
                cell.col_span,
            );
        }
        Ok(grid)
    }
}

/// Renders `grid` into its tree form.
pub fn render(grid: &Grid) -> GridNode {
    grid.render_tree()
}

pub fn to_json(grid: &Grid) -> Result<String, LayoutError> {
    Ok(serde_json::to_string(&grid.render_tree())?)
}

pub fn to_json_pretty(grid: &Grid) -> Result<String, LayoutError> {
    Ok(serde_json::to_string_pretty(&grid.render_tree())?)
}

pub fn from_json(json: &str) -> Result<Grid, LayoutError> {
    let node: GridNode = serde_json::from_str(json)?;
    Grid::from_node(node)
}
