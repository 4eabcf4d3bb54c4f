//! 1v1 penalty tab

use super::{
    draw_form, draw_result, form_layout, formula, section_header, stat_line, verdict_line,
};
use crate::app::App;
use clan_core::DuelPenalty;
use ratatui::{layout::Rect, text::Line, Frame};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let (form_area, result_area) = form_layout(area, 2);

    draw_form(
        f,
        app,
        form_area,
        "Attacker vs Victim",
        &[
            ("Attacker level", app.duel.attacker.clone()),
            ("Victim level", app.duel.victim.clone()),
        ],
    );

    let result = app
        .duel_result()
        .map(|r| result_lines(app, &r))
        .map_err(|e| e.to_string());
    draw_result(f, app, result_area, "Result", result);
}

fn result_lines(app: &App, result: &DuelPenalty) -> Vec<Line<'static>> {
    let min_victim = if result.min_victim_level >= 1 {
        result.min_victim_level.to_string()
    } else {
        "none (no valid victim)".to_string()
    };

    vec![
        section_header("Outcome"),
        stat_line("Level difference", result.level_difference.to_string()),
        stat_line("Required difference", format!("{:.1}", result.min_difference)),
        verdict_line("Penalty", result.penalty),
        Line::from(""),
        section_header("Guidance"),
        stat_line(
            &format!("Penalised victims (lvl {})", result.attacker_level),
            format!("level {} and below", min_victim),
        ),
        stat_line(
            &format!("Safe attackers (vs lvl {})", result.victim_level),
            format!("up to level {}", result.max_attacker_level),
        ),
        Line::from(""),
        Line::from(formula::duel_required(&app.config.penalty)),
    ]
}
