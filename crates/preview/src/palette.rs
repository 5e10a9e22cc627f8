use dashgrid_layout::{FilterKind, WidgetKind};
use dashgrid_types::Color;

/// Colors used when rasterizing a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub gridline: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            gridline: Color::gray(200),
            border: Color::gray(100),
            text: Color::gray(30),
        }
    }
}

impl Palette {
    /// Fill color of a widget box.
    pub fn widget(&self, kind: WidgetKind) -> Color {
        match kind {
            WidgetKind::Indicator => Color::rgb(173, 216, 230),   // light blue
            WidgetKind::Chart => Color::rgb(144, 238, 144),       // light green
            WidgetKind::Table => Color::rgb(255, 182, 193),       // light pink
            WidgetKind::ProgressBar => Color::rgb(255, 218, 185), // light orange
            WidgetKind::Grid => Color::rgb(255, 250, 205),        // light yellow
            WidgetKind::FilterBar => Color::gray(220),
            WidgetKind::Ranking => Color::rgb(221, 204, 255), // light purple
        }
    }

    /// Fill color of a filter chip.
    pub fn filter(&self, kind: FilterKind) -> Color {
        match kind {
            FilterKind::Date => Color::rgb(255, 228, 196),
            FilterKind::Select => Color::rgb(224, 255, 255),
            FilterKind::Text => Color::rgb(240, 255, 240),
            FilterKind::Bool => Color::rgb(255, 240, 245),
            FilterKind::Number => Color::rgb(230, 230, 250),
            FilterKind::Range => Color::rgb(250, 235, 215),
            FilterKind::Checkbox => Color::rgb(245, 222, 179),
            FilterKind::Radio => Color::rgb(176, 224, 230),
            FilterKind::MultiSelect => Color::rgb(216, 191, 216),
            FilterKind::Slider => Color::rgb(152, 251, 152),
            FilterKind::Toggle => Color::rgb(255, 228, 225),
            FilterKind::Search => Color::rgb(255, 255, 224),
            FilterKind::Color => Color::rgb(238, 232, 170),
        }
    }
}
