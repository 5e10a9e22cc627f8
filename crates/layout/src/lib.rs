//! Grid layout engine for dashboards.
//!
//! Widgets are placed into a [`Grid`] explicitly with [`Grid::place_at`] or by
//! first-fit auto-placement with [`Grid::place_next`]. A grid renders into a
//! serializable [`GridNode`] tree; grids nest by being placed as cell content.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to decode render tree: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Grid of {rows}x{columns} cells is too large to allocate")]
    GridTooLarge { rows: usize, columns: usize },
}

pub mod config;
pub mod grid;
pub mod node_kind;
pub mod render_tree;
pub mod widget;
pub mod widgets;

pub use self::config::{GridConfig, OccupancyMode};
pub use self::grid::{Cell, Grid, Placement};
pub use self::node_kind::{FilterKind, WidgetKind};
pub use self::render_tree::{CellNode, GridNode, RenderNode};
pub use self::widget::{Render, Widget};
pub use self::widgets::{
    Chart, Filter, FilterBar, FilterControl, Indicator, ProgressBar, ProgressBarNode, Ranking,
    RankingItem, SortOrder, Table,
};
