use crate::LayoutError;
use crate::grid::Grid;
use crate::node_kind::WidgetKind;
use crate::render_tree::RenderNode;
use crate::widgets::{Chart, FilterBar, Indicator, ProgressBar, Ranking, Table};

/// Anything that can appear in the render tree.
pub trait Render {
    fn render(&self) -> RenderNode;
    fn kind(&self) -> WidgetKind;
}

/// The content of a grid cell. Grids nest by containing other grids.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Indicator(Indicator),
    Chart(Chart),
    Table(Table),
    ProgressBar(ProgressBar),
    FilterBar(FilterBar),
    Ranking(Ranking),
    Grid(Grid),
}

impl Widget {
    /// The widget's own title, `None` when it is empty.
    pub fn title(&self) -> Option<&str> {
        let title = match self {
            Widget::Indicator(w) => w.title.as_str(),
            Widget::Chart(w) => w.title.as_str(),
            Widget::Table(w) => w.title.as_str(),
            Widget::ProgressBar(w) => w.title.as_str(),
            Widget::FilterBar(w) => w.title.as_str(),
            Widget::Ranking(w) => w.title.as_str(),
            Widget::Grid(g) => g.title(),
        };
        (!title.is_empty()).then_some(title)
    }

    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            Widget::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    /// Rebuilds a widget from its render tree form.
    pub fn from_node(node: RenderNode) -> Result<Widget, LayoutError> {
        Ok(match node {
            RenderNode::Indicator(w) => Widget::Indicator(w),
            RenderNode::Chart(w) => Widget::Chart(w),
            RenderNode::Table(w) => Widget::Table(w),
            RenderNode::ProgressBar(node) => Widget::ProgressBar(node.into()),
            RenderNode::FilterBar(w) => Widget::FilterBar(w),
            RenderNode::Ranking(w) => Widget::Ranking(w),
            RenderNode::Grid(node) => Widget::Grid(Grid::from_node(node)?),
        })
    }
}

impl Render for Widget {
    fn render(&self) -> RenderNode {
        match self {
            Widget::Indicator(w) => w.render(),
            Widget::Chart(w) => w.render(),
            Widget::Table(w) => w.render(),
            Widget::ProgressBar(w) => w.render(),
            Widget::FilterBar(w) => w.render(),
            Widget::Ranking(w) => w.render(),
            Widget::Grid(g) => g.render(),
        }
    }

    fn kind(&self) -> WidgetKind {
        match self {
            Widget::Indicator(_) => WidgetKind::Indicator,
            Widget::Chart(_) => WidgetKind::Chart,
            Widget::Table(_) => WidgetKind::Table,
            Widget::ProgressBar(_) => WidgetKind::ProgressBar,
            Widget::FilterBar(_) => WidgetKind::FilterBar,
            Widget::Ranking(_) => WidgetKind::Ranking,
            Widget::Grid(_) => WidgetKind::Grid,
        }
    }
}

macro_rules! impl_leaf_widget {
    ($($ty:ident => $node:expr),+ $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> RenderNode {
                    let to_node: fn(&$ty) -> RenderNode = $node;
                    to_node(self)
                }

                fn kind(&self) -> WidgetKind {
                    WidgetKind::$ty
                }
            }

            impl From<$ty> for Widget {
                fn from(widget: $ty) -> Self {
                    Widget::$ty(widget)
                }
            }
        )+
    };
}

impl_leaf_widget!(
    Indicator => |w| RenderNode::Indicator(w.clone()),
    Chart => |w| RenderNode::Chart(w.clone()),
    Table => |w| RenderNode::Table(w.clone()),
    ProgressBar => |w| RenderNode::ProgressBar(w.to_node()),
    FilterBar => |w| RenderNode::FilterBar(w.clone()),
    Ranking => |w| RenderNode::Ranking(w.clone()),
);

impl Render for Grid {
    fn render(&self) -> RenderNode {
        RenderNode::Grid(self.render_tree())
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Grid
    }
}

impl From<Grid> for Widget {
    fn from(grid: Grid) -> Self {
        Widget::Grid(grid)
    }
}
