/// Represents the specific type of a widget.
///
/// The preview renderer and the render tree both switch on this instead of
/// inspecting concrete widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Indicator,
    Chart,
    Table,
    ProgressBar,
    FilterBar,
    Ranking,
    Grid,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::Indicator,
        WidgetKind::Chart,
        WidgetKind::Table,
        WidgetKind::ProgressBar,
        WidgetKind::FilterBar,
        WidgetKind::Ranking,
        WidgetKind::Grid,
    ];

    /// The `type` discriminator used in the render tree.
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetKind::Indicator => "indicator",
            WidgetKind::Chart => "chart",
            WidgetKind::Table => "table",
            WidgetKind::ProgressBar => "progressBar",
            WidgetKind::FilterBar => "filterBar",
            WidgetKind::Ranking => "ranking",
            WidgetKind::Grid => "grid",
        }
    }

    /// Human readable name, drawn on previews.
    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::Indicator => "Indicator",
            WidgetKind::Chart => "Chart",
            WidgetKind::Table => "Table",
            WidgetKind::ProgressBar => "ProgressBar",
            WidgetKind::FilterBar => "FilterBar",
            WidgetKind::Ranking => "Ranking",
            WidgetKind::Grid => "Grid",
        }
    }
}

/// Represents the specific type of a filter inside a filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Date,
    Select,
    Text,
    Bool,
    Number,
    Range,
    Checkbox,
    Radio,
    MultiSelect,
    Slider,
    Toggle,
    Search,
    Color,
}

impl FilterKind {
    pub const ALL: [FilterKind; 13] = [
        FilterKind::Date,
        FilterKind::Select,
        FilterKind::Text,
        FilterKind::Bool,
        FilterKind::Number,
        FilterKind::Range,
        FilterKind::Checkbox,
        FilterKind::Radio,
        FilterKind::MultiSelect,
        FilterKind::Slider,
        FilterKind::Toggle,
        FilterKind::Search,
        FilterKind::Color,
    ];

    /// The `type` discriminator used in the render tree, also shown on preview chips.
    pub fn tag(&self) -> &'static str {
        match self {
            FilterKind::Date => "date",
            FilterKind::Select => "select",
            FilterKind::Text => "text",
            FilterKind::Bool => "bool",
            FilterKind::Number => "number",
            FilterKind::Range => "range",
            FilterKind::Checkbox => "checkbox",
            FilterKind::Radio => "radio",
            FilterKind::MultiSelect => "multiSelect",
            FilterKind::Slider => "slider",
            FilterKind::Toggle => "toggle",
            FilterKind::Search => "search",
            FilterKind::Color => "color",
        }
    }
}
