//! Group penalty tab

use super::{
    draw_form, draw_result, form_layout, formula, section_header, stat_line, verdict_line,
};
use crate::app::App;
use clan_core::GroupPenalty;
use ratatui::{layout::Rect, text::Line, Frame};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let (form_area, result_area) = form_layout(area, 2);

    draw_form(
        f,
        app,
        form_area,
        "Levels (comma separated)",
        &[
            ("Attacker levels", app.group.attackers.clone()),
            ("Defender levels", app.group.defenders.clone()),
        ],
    );

    let result = app
        .group_result()
        .map(|r| result_lines(app, &r))
        .map_err(|e| e.to_string());
    draw_result(f, app, result_area, "Result", result);
}

fn result_lines(app: &App, result: &GroupPenalty) -> Vec<Line<'static>> {
    vec![
        section_header("Attackers"),
        stat_line("Count", result.attacker_count.to_string()),
        stat_line("Highest level", result.max_attacker_level.to_string()),
        stat_line("Average level", format!("{:.2}", result.avg_attacker_level)),
        stat_line("Strength (max + avg)", format!("{:.2}", result.attacker_strength)),
        Line::from(""),
        section_header("Defenders"),
        stat_line("Count", result.defender_count.to_string()),
        stat_line("Average level", format!("{:.2}", result.avg_defender_level)),
        Line::from(""),
        section_header("Outcome"),
        stat_line("Difference", format!("{:.2}", result.difference)),
        stat_line("Threshold", format!("{:.2}", result.threshold)),
        verdict_line("Penalty", result.penalty),
        Line::from(""),
        Line::from(formula::group_difference(&app.config.penalty)),
        Line::from(formula::group_threshold(&app.config.penalty)),
    ]
}
