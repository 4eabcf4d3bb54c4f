//! Help tab view

use super::{formula, section_header};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let penalty = &app.config.penalty;
    let unbind = &app.config.unbind;
    let upgrade = &app.config.upgrade;

    let lines = vec![
        section_header("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("F1-F5 / ?", "Jump to tab / help"),
        key_line("↑  ↓ / Enter", "Select field"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section_header("Editing"),
        key_line("0-9 , space", "Type into the selected field"),
        key_line("Backspace / Del", "Delete last character / clear field"),
        key_line("←/→", "Change rarity"),
        key_line("v", "Toggle JSON view of the result"),
        key_line("r", "Reset all forms"),
        Line::from(""),
        section_header("Penalty Points"),
        Line::from(""),
        Line::from(Span::styled("1v1:", Style::default().fg(Color::Yellow))),
        indented(formula::duel_required(penalty)),
        Line::from("  Penalty when attacker - victim >= required difference"),
        indented(formula::duel_scan(penalty)),
        Line::from(""),
        Line::from(Span::styled("Group:", Style::default().fg(Color::Yellow))),
        Line::from("  Strength   = highest attacker + average attacker"),
        indented(formula::group_difference(penalty)),
        indented(formula::group_threshold(penalty)),
        Line::from("  Penalty when difference > threshold"),
        Line::from(""),
        section_header("Item Costs"),
        Line::from(""),
        Line::from(Span::styled("Unbind:", Style::default().fg(Color::Yellow))),
        indented(formula::unbind_base(unbind)),
        indented(formula::unbind_cost(unbind)),
        indented(formula::unbind_caps(unbind)),
        Line::from(""),
        Line::from(Span::styled("Upgrade:", Style::default().fg(Color::Yellow))),
        indented(formula::upgrade_tiers(upgrade)),
        indented(formula::upgrade_upgraded(upgrade)),
        indented(formula::upgrade_others(upgrade)),
        indented(formula::upgrade_extraction(upgrade)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Formulas "))
        .scroll((app.help_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn indented(text: String) -> Line<'static> {
    Line::from(format!("  {}", text))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
