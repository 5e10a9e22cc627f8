//! Leaf widgets that can be placed in a [`Grid`](crate::Grid).
//!
//! Each widget is a plain data holder with a constructor that fills in sane
//! defaults and builder-style setters. Widgets serialize directly into the
//! render tree, except for [`ProgressBar`] which adds a derived `percent`.

mod chart;
mod filter;
mod filter_bar;
mod indicator;
mod progress_bar;
mod ranking;
mod table;

pub use chart::Chart;
pub use filter::{Filter, FilterControl};
pub use filter_bar::FilterBar;
pub use indicator::Indicator;
pub use progress_bar::{ProgressBar, ProgressBarNode};
pub use ranking::{Ranking, RankingItem, SortOrder};
pub use table::Table;
