//! Upgrade cost tab

use super::{draw_form, draw_result, form_layout, format_cost, section_header, stat_line};
use crate::app::App;
use clan_core::{UpgradeCost, UPGRADE_TIERS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let (form_area, result_area) = form_layout(area, 2);

    draw_form(
        f,
        app,
        form_area,
        "Item",
        &[
            ("Item level", app.upgrade.level.clone()),
            ("Rarity", format!("◀ {} ▶", app.upgrade.rarity.name())),
        ],
    );

    let result = app.upgrade_result();
    if app.show_json {
        draw_result(f, app, result_area, "Upgrade Cost", Ok(Vec::new()));
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(UPGRADE_TIERS as u16 + 4), Constraint::Min(0)])
        .split(result_area);

    draw_tier_table(f, &result, chunks[0]);
    draw_result(f, app, chunks[1], "Totals", Ok(total_lines(&result)));
}

fn draw_tier_table(f: &mut Frame, result: &UpgradeCost, area: Rect) {
    let header = Row::new(vec!["Tier", "Step cost", "Cumulative"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = (0..UPGRADE_TIERS)
        .map(|i| {
            Row::new(vec![
                Cell::from(format!("+{}", i + 1)),
                Cell::from(format_cost(result.tier_costs[i])),
                Cell::from(format_cost(result.cumulative[i])),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Level {} {} ", result.level, result.rarity.name())),
    );

    f.render_widget(table, area);
}

fn total_lines(result: &UpgradeCost) -> Vec<Line<'static>> {
    vec![
        section_header("Extraction"),
        stat_line("Full extraction", format_cost(result.total_upgrade_cost)),
        stat_line("Normal extraction", format_cost(result.total_75_percent)),
        stat_line("Gold factor", format!("{:.0}", result.gold_factor)),
        Line::from(""),
        Line::from(Span::styled(
            "Levels outside 1-300 are clamped",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
