use dashgrid::{
    Chart, Dashboard, Filter, FilterBar, Grid, Indicator, ProgressBar, Ranking, RankingItem,
    SortOrder, Table,
};
use serde_json::json;

/// A filter bar with one control of each common kind.
pub fn filter_bar() -> FilterBar {
    FilterBar::new("Filtros")
        .with_filter(Filter::date("Período", "period"))
        .with_filter(Filter::select("Tipo", "type", ["Todos", "Vendas", "Compras"]))
        .with_filter(Filter::toggle("Ativos", "active", true))
}

/// 2x1 grid of progress bars, meant to be nested.
pub fn progress_grid() -> Grid {
    let mut grid = Grid::new("Metas", 2, 1);
    grid.place_next(ProgressBar::new("Conversão").with_value(75.0), 1, 1);
    grid.place_next(ProgressBar::new("Retenção").with_value(42.0).with_max(50.0), 1, 1);
    grid
}

pub fn sales_table() -> Table {
    let mut table = Table::new("Vendas", ["Produto", "Quantidade"]).with_page_size(5);
    table.push_row(json!({ "Produto": "A", "Quantidade": 10 }));
    table.push_row(json!({ "Produto": "B", "Quantidade": 4 }));
    table
}

pub fn top_sellers() -> Ranking {
    let mut ranking = Ranking::new("Top vendedores");
    ranking.set_order(SortOrder::Desc);
    ranking.add_item(RankingItem::new(1, "Ana", "R$ 12.000", ""));
    ranking.add_item(RankingItem::new(2, "Bruno", "R$ 9.500", ""));
    ranking
}

/// The 4x3 sample analytics layout:
///
/// ```text
/// row 0: filter bar (1x3)
/// row 1: sales | users | progress grid
/// row 2: revenue chart (1x2) | ranking
/// row 3: sales table (1x3)
/// ```
pub fn analytics_grid() -> Grid {
    let mut grid = Grid::new("Principal", 4, 3);
    grid.place_at(filter_bar(), 0, 0, 1, 3);
    grid.place_at(Indicator::new("Vendas").with_value(1500).with_unit("R$"), 1, 0, 1, 1);
    grid.place_at(Indicator::new("Usuários").with_value(250).with_trend(5.2), 1, 1, 1, 1);
    grid.place_at(progress_grid(), 1, 2, 1, 1);
    grid.place_at(
        Chart::new("Receita", "line").with_data(json!({ "labels": ["Jan", "Fev"], "values": [10, 20] })),
        2,
        0,
        1,
        2,
    );
    grid.place_at(top_sellers(), 2, 2, 1, 1);
    grid.place_at(sales_table(), 3, 0, 1, 3);
    grid
}

pub fn analytics_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::new("Analytics", "Métricas em tempo real");
    dashboard.set_layout(analytics_grid());
    dashboard
}
