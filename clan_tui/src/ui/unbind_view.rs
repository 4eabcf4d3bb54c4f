//! Unbind cost tab

use super::{
    draw_form, draw_result, form_layout, format_cost, formula, section_header, stat_line,
};
use crate::app::App;
use clan_core::UnbindCost;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
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
            ("Item level (1-300)", app.unbind.level.clone()),
            ("Rarity", format!("◀ {} ▶", app.unbind.rarity.name())),
        ],
    );

    let result = app
        .unbind_result()
        .map(|r| result_lines(app, &r))
        .map_err(|e| e.to_string());
    draw_result(f, app, result_area, "Unbind Cost", result);
}

fn result_lines(app: &App, result: &UnbindCost) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_header("Calculation"),
        stat_line("Base value", format!("{:.1}", result.base_value)),
        stat_line("Rarity multiplier", format!("x{:.1}", result.multiplier)),
        stat_line("Total cost", format_cost(result.total_cost as f64)),
    ];

    if result.is_capped {
        lines.push(Line::from(Span::styled(
            format!("Capped: {} items cannot cost more than this", result.rarity.name()),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(formula::unbind_base(&app.config.unbind)));
    lines.push(Line::from(formula::unbind_cost(&app.config.unbind)));
    lines
}
