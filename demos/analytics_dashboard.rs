//! Builds the sample analytics dashboard, prints its JSON and writes a preview.
//!
//! Run with: cargo run --example analytics_dashboard [output.jpg]

use dashgrid::{
    Chart, Color, Dashboard, DashboardError, Filter, FilterBar, Grid, Indicator, PreviewConfig,
    ProgressBar, Ranking, RankingItem, SortOrder, Table, Theme,
};
use serde_json::json;
use std::env;

fn indicators() -> Grid {
    let sales = Indicator::new("Total Sales")
        .with_unit("R$")
        .with_trend(5.7)
        .with_target("http://localhost:4040/api/v1/query/sales/indicator");
    let users = Indicator::new("Active Users").with_description("Currently active users");
    let tma = Indicator::new("TMA")
        .with_unit("min")
        .with_description("Average time to action (TMA)")
        .with_target("http://localhost:4040/api/v1/query/tma/indicator");
    let issues = Indicator::new("Total Issues").with_unit("Issues");

    let mut grid = Grid::new("Indicators", 2, 4);
    for indicator in [&sales, &users, &sales, &users, &issues, &tma, &issues, &tma] {
        grid.place_next(indicator.clone(), 1, 1);
    }
    grid
}

fn progress_bars() -> Grid {
    let mut grid = Grid::new("ProgressBar Grid", 2, 1);
    grid.place_at(
        ProgressBar::new("Conversion Rate").with_value(75.0).with_max(100.0),
        0,
        0,
        1,
        1,
    );
    grid.place_at(ProgressBar::new("Total Conversion"), 1, 0, 1, 1);
    grid
}

fn filters() -> FilterBar {
    FilterBar::new("Filtros Gerais")
        .with_filter(Filter::date("Periodo", "period"))
        .with_filter(Filter::select(
            "Tipo de Problema",
            "problem_type",
            ["Todos", "Erro", "Aviso", "Info"],
        ))
        .with_filter(Filter::text("Nome do Cliente", "client_name"))
        .with_filter(Filter::search("Pesquisar", "search", "Search by name or ID"))
}

fn recent_users() -> Table {
    let mut table = Table::new("Recent Users", ["ID", "Name", "Last Access", "Status"]);
    table.push_row(json!({ "id": 1, "name": "John Doe", "lastAccess": "2025-06-26", "status": "Active" }));
    table.push_row(json!({ "id": 2, "name": "Jane Smith", "lastAccess": "2025-06-25", "status": "Inactive" }));
    table
}

fn customer_ranking() -> Ranking {
    let mut ranking = Ranking::new("Ranking de Clientes");
    ranking
        .add_item(RankingItem::new(1, "Empresa Alpha", "Maior faturamento", "https://randomuser.me/api/portraits/men/1.jpg"))
        .add_item(RankingItem::new(2, "Empresa Beta", "Crescimento rápido", "https://randomuser.me/api/portraits/women/2.jpg"))
        .add_item(RankingItem::new(3, "Empresa Gama", "Melhor avaliação", "https://randomuser.me/api/portraits/men/3.jpg"))
        .set_order(SortOrder::Desc);
    ranking
}

fn main() -> Result<(), DashboardError> {
    env_logger::init();
    let output = env::args().nth(1).unwrap_or_else(|| "dashboard.jpg".to_string());

    let mut main_grid = Grid::new("Main Grid", 4, 3);
    main_grid.place_at(filters(), 0, 0, 1, 3);
    main_grid.place_at(indicators(), 1, 0, 1, 3);
    main_grid.place_at(progress_bars(), 2, 0, 1, 1);
    main_grid.place_at(
        Chart::new("Revenue Over Time", "line")
            .with_data(json!([1200, 1900, 3000, 5000, 4100, 4500]))
            .with_options(json!({
                "xAxis": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                "color": "#1976D2"
            })),
        2,
        1,
        1,
        2,
    );
    main_grid.place_at(recent_users(), 3, 0, 1, 2);
    main_grid.place_at(customer_ranking(), 3, 2, 1, 1);

    let mut dashboard = Dashboard::new("Analytics Dashboard", "Real-time performance metrics");
    dashboard.set_layout(main_grid).set_theme(Theme {
        primary: Color::rgb(0x21, 0x96, 0xF3),
        secondary: Color::rgb(0xFF, 0xC1, 0x07),
        background: Color::gray(0xF5),
        text_color: Color::gray(0x21),
        font_family: "Inter, sans-serif".to_string(),
    });

    println!("Dashboard JSON:\n{}", dashboard.to_json_pretty()?);

    dashboard.save_preview(&output, &PreviewConfig::default())?;
    println!("Preview written to {}", output);
    Ok(())
}
