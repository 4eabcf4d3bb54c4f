//! UI rendering

mod duel_view;
mod formula;
mod group_view;
mod help_view;
mod unbind_view;
mod upgrade_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Duel => duel_view::draw(f, app, chunks[1]),
        Tab::Group => group_view::draw(f, app, chunks[1]),
        Tab::Unbind => unbind_view::draw(f, app, chunks[1]),
        Tab::Upgrade => upgrade_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Duel | Tab::Group => vec![
            ("↑/↓", "Field"),
            ("0-9", "Edit"),
            ("Del", "Clear"),
            ("v", "JSON"),
        ],
        Tab::Unbind | Tab::Upgrade => vec![
            ("↑/↓", "Field"),
            ("0-9", "Edit"),
            ("←/→", "Rarity"),
            ("v", "JSON"),
        ],
        Tab::Help => vec![("↑/↓", "Scroll")],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Clan Calculators ({}) ", app.config_source)),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Split a calculator tab into the input form (top) and the result (bottom)
pub fn form_layout(area: Rect, field_count: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(field_count + 2), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the input fields, highlighting the selected one
pub fn draw_form(f: &mut Frame, app: &App, area: Rect, title: &str, fields: &[(&str, String)]) {
    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| field_line(label, value, i == app.selected_field))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title)),
    );
    f.render_widget(paragraph, area);
}

fn field_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    let (marker, value_style) = if selected {
        (
            "▶ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    let cursor = if selected { "_" } else { "" };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{:20}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

/// Render either the result lines, the JSON export, or an input error
pub fn draw_result(
    f: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    result: Result<Vec<Line<'static>>, String>,
) {
    let (lines, border): (Vec<Line<'static>>, Color) = match result {
        Ok(_) if app.show_json => (
            app.result_json().lines().map(|l| Line::from(l.to_string())).collect(),
            Color::Blue,
        ),
        Ok(lines) => (lines, Color::White),
        Err(message) => (
            vec![Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))],
            Color::Red,
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", title)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:26}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Yes/no verdict line, red when a penalty applies
pub fn verdict_line(name: &str, penalty: bool) -> Line<'static> {
    let (text, color) = if penalty {
        ("YES - penalty point", Color::Red)
    } else {
        ("no penalty", Color::Green)
    };
    Line::from(vec![
        Span::styled(format!("{:26}", name), Style::default().fg(Color::Gray)),
        Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Format a currency amount with thousands separators
pub fn format_cost(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "0"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac_part == "0" {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
