//! Hierarchical dashboard layouts.
//!
//! This crate ties the workspace together: widgets and grids come from
//! [`dashgrid_layout`], raster previews from [`dashgrid_preview`], and the
//! [`Dashboard`] type wraps a root grid with a title and theme.
//!
//! ```
//! use dashgrid::{Dashboard, Grid, Indicator};
//!
//! let mut grid = Grid::new("Indicators", 1, 2);
//! grid.place_next(Indicator::new("Sales").with_value(1500).with_unit("R$"), 1, 1);
//! grid.place_next(Indicator::new("Users").with_value(250), 1, 1);
//!
//! let mut dashboard = Dashboard::new("Analytics", "Real-time metrics");
//! dashboard.set_layout(grid);
//! assert!(dashboard.to_json().unwrap().contains("\"Users\""));
//! ```

pub mod dashboard;
pub mod error;

pub use dashboard::{Dashboard, DashboardNode, Theme};
pub use error::DashboardError;

pub use dashgrid_layout::{
    Cell, CellNode, Chart, Filter, FilterBar, FilterControl, FilterKind, Grid, GridConfig,
    GridNode, Indicator, LayoutError, OccupancyMode, Placement, ProgressBar, Ranking, RankingItem,
    Render, RenderNode, SortOrder, Table, Widget, WidgetKind,
};
pub use dashgrid_preview::{
    ImageFormat, Palette, PreviewConfig, PreviewError, PreviewRenderer, compute_canvas_size,
    render_preview,
};
pub use dashgrid_types::{Color, Rect, Size};
