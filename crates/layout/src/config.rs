/// How auto-placement decides whether a coordinate is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OccupancyMode {
    /// Only a cell's anchor (top-left) coordinate counts as occupied.
    ///
    /// A coordinate covered by another cell's span is treated as free, so
    /// `place_next` may produce overlapping footprints after a spanning
    /// `place_at`. This is the compatible default.
    #[default]
    Anchor,
    /// Every coordinate inside a placed cell's footprint (clipped to the grid)
    /// counts as occupied.
    Footprint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Gap between cells, carried into the render tree for consumers.
    ///
    /// Defaults to `10.0`.
    pub spacing: f64,
    /// Inner padding of the grid, carried into the render tree for consumers.
    ///
    /// Defaults to `15.0`.
    pub padding: f64,
    /// Occupancy rule used by `Grid::place_next`.
    pub occupancy: OccupancyMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            padding: 15.0,
            occupancy: OccupancyMode::default(),
        }
    }
}
