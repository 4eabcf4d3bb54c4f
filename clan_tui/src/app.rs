//! Application state

use clan_core::{
    assess_duel_with, assess_group_with, calculate_unbind_cost_with, calculate_upgrade_cost_with,
    BalanceConfig, CalcError, DuelPenalty, GroupPenalty, Rarity, UnbindCost, UpgradeCost,
};
use serde::Serialize;
use thiserror::Error;

/// Why a form could not be turned into a result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field}: {value:?} is not a whole number")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Calc(#[from] CalcError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Duel,
    Group,
    Unbind,
    Upgrade,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Duel, Tab::Group, Tab::Unbind, Tab::Upgrade, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Duel => "1v1 Penalty",
            Tab::Group => "Group Penalty",
            Tab::Unbind => "Unbind",
            Tab::Upgrade => "Upgrade",
            Tab::Help => "Help",
        }
    }

    /// Number of input fields on this tab
    pub fn field_count(&self) -> usize {
        match self {
            Tab::Help => 0,
            _ => 2,
        }
    }
}

/// Kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Level,
    LevelList,
    Rarity,
}

#[derive(Debug, Clone)]
pub struct DuelForm {
    pub attacker: String,
    pub victim: String,
}

impl Default for DuelForm {
    fn default() -> Self {
        DuelForm {
            attacker: "200".to_string(),
            victim: "150".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupForm {
    pub attackers: String,
    pub defenders: String,
}

impl Default for GroupForm {
    fn default() -> Self {
        GroupForm {
            attackers: "200, 180, 160".to_string(),
            defenders: "150, 140".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemForm {
    pub level: String,
    pub rarity: Rarity,
}

impl ItemForm {
    fn new(level: &str, rarity: Rarity) -> Self {
        ItemForm {
            level: level.to_string(),
            rarity,
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub config: BalanceConfig,
    /// Where the balance table came from, shown in the title bar
    pub config_source: String,
    pub duel: DuelForm,
    pub group: GroupForm,
    pub unbind: ItemForm,
    pub upgrade: ItemForm,
    /// Selected field on the current tab
    pub selected_field: usize,
    pub show_json: bool,
    pub help_scroll: usize,
}

impl App {
    pub fn new(config: BalanceConfig, config_source: String) -> Self {
        App {
            current_tab: Tab::Duel,
            config,
            config_source,
            duel: DuelForm::default(),
            group: GroupForm::default(),
            unbind: ItemForm::new("50", Rarity::Common),
            upgrade: ItemForm::new("100", Rarity::Heroic),
            selected_field: 0,
            show_json: false,
            help_scroll: 0,
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.switch_to(tabs[next_idx]);
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.switch_to(tabs[prev_idx]);
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.switch_to(tabs[index]);
        }
    }

    fn switch_to(&mut self, tab: Tab) {
        if tab != self.current_tab {
            log::info!("Switched to tab {}", tab.name());
        }
        self.current_tab = tab;
        self.selected_field = 0;
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Help => {
                if self.help_scroll > 0 {
                    self.help_scroll -= 1;
                }
            }
            _ => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Help => self.help_scroll += 1,
            tab => {
                if self.selected_field + 1 < tab.field_count() {
                    self.selected_field += 1;
                }
            }
        }
    }

    pub fn on_left(&mut self) {
        if let Some(form) = self.selected_rarity_form() {
            form.rarity = form.rarity.prev();
        }
    }

    pub fn on_right(&mut self) {
        if let Some(form) = self.selected_rarity_form() {
            form.rarity = form.rarity.next();
        }
    }

    /// Kind of the field at `index` on the current tab
    pub fn field_kind(&self, index: usize) -> Option<FieldKind> {
        match (self.current_tab, index) {
            (Tab::Duel, 0 | 1) => Some(FieldKind::Level),
            (Tab::Group, 0 | 1) => Some(FieldKind::LevelList),
            (Tab::Unbind | Tab::Upgrade, 0) => Some(FieldKind::Level),
            (Tab::Unbind | Tab::Upgrade, 1) => Some(FieldKind::Rarity),
            _ => None,
        }
    }

    fn selected_rarity_form(&mut self) -> Option<&mut ItemForm> {
        if self.field_kind(self.selected_field) != Some(FieldKind::Rarity) {
            return None;
        }
        match self.current_tab {
            Tab::Unbind => Some(&mut self.unbind),
            Tab::Upgrade => Some(&mut self.upgrade),
            _ => None,
        }
    }

    fn selected_text_mut(&mut self) -> Option<&mut String> {
        match (self.current_tab, self.selected_field) {
            (Tab::Duel, 0) => Some(&mut self.duel.attacker),
            (Tab::Duel, 1) => Some(&mut self.duel.victim),
            (Tab::Group, 0) => Some(&mut self.group.attackers),
            (Tab::Group, 1) => Some(&mut self.group.defenders),
            (Tab::Unbind, 0) => Some(&mut self.unbind.level),
            (Tab::Upgrade, 0) => Some(&mut self.upgrade.level),
            _ => None,
        }
    }

    /// Type a character into the selected field, ignoring characters it does not accept
    pub fn on_char(&mut self, c: char) {
        let accepts = match self.field_kind(self.selected_field) {
            // Upgrade levels are clamped, so fractions and negatives are allowed
            Some(FieldKind::Level) if self.current_tab == Tab::Upgrade => {
                c.is_ascii_digit() || c == '.' || c == '-'
            }
            Some(FieldKind::Level) => c.is_ascii_digit(),
            Some(FieldKind::LevelList) => c.is_ascii_digit() || c == ',' || c == ' ',
            Some(FieldKind::Rarity) | None => false,
        };
        if !accepts {
            return;
        }
        if let Some(text) = self.selected_text_mut() {
            text.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(text) = self.selected_text_mut() {
            text.pop();
        }
    }

    /// Clear the selected text field
    pub fn clear_field(&mut self) {
        if let Some(text) = self.selected_text_mut() {
            text.clear();
        }
    }

    /// Restore every form to its starting values
    pub fn reset(&mut self) {
        self.duel = DuelForm::default();
        self.group = GroupForm::default();
        self.unbind = ItemForm::new("50", Rarity::Common);
        self.upgrade = ItemForm::new("100", Rarity::Heroic);
        self.selected_field = 0;
    }

    pub fn toggle_json(&mut self) {
        self.show_json = !self.show_json;
    }

    pub fn duel_result(&self) -> Result<DuelPenalty, InputError> {
        let attacker = parse_level("Attacker level", &self.duel.attacker)?;
        let victim = parse_level("Victim level", &self.duel.victim)?;
        Ok(assess_duel_with(&self.config.penalty, attacker, victim)?)
    }

    pub fn group_result(&self) -> Result<GroupPenalty, InputError> {
        let attackers = parse_level_list("Attacker levels", &self.group.attackers)?;
        let defenders = parse_level_list("Defender levels", &self.group.defenders)?;
        Ok(assess_group_with(&self.config.penalty, &attackers, &defenders)?)
    }

    pub fn unbind_result(&self) -> Result<UnbindCost, InputError> {
        let level = parse_level("Item level", &self.unbind.level)?;
        Ok(calculate_unbind_cost_with(
            &self.config.unbind,
            level,
            self.unbind.rarity,
        )?)
    }

    /// Never fails: unparsable levels are clamped like any other bad level
    pub fn upgrade_result(&self) -> UpgradeCost {
        let level = self.upgrade.level.trim().parse::<f64>().unwrap_or(f64::NAN);
        calculate_upgrade_cost_with(&self.config.upgrade, level, self.upgrade.rarity)
    }

    /// Current tab's result as pretty JSON, or the error message
    pub fn result_json(&self) -> String {
        match self.current_tab {
            Tab::Duel => to_json(self.duel_result()),
            Tab::Group => to_json(self.group_result()),
            Tab::Unbind => to_json(self.unbind_result()),
            Tab::Upgrade => to_json(Ok::<_, InputError>(self.upgrade_result())),
            Tab::Help => String::new(),
        }
    }
}

fn to_json<T: Serialize>(result: Result<T, InputError>) -> String {
    match result {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|e| format!("failed to serialize result: {}", e)),
        Err(e) => e.to_string(),
    }
}

fn parse_level(field: &'static str, value: &str) -> Result<u32, InputError> {
    value.trim().parse::<u32>().map_err(|_| InputError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parse "200, 180 160" into levels; an empty string gives an empty list
fn parse_level_list(field: &'static str, value: &str) -> Result<Vec<u32>, InputError> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| parse_level(field, part))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clan_core::Side;

    fn app() -> App {
        App::new(BalanceConfig::default(), "built-in".to_string())
    }

    #[test]
    fn test_default_forms_compute() {
        let app = app();
        assert!(app.duel_result().unwrap().penalty);
        assert!(app.group_result().unwrap().penalty);
        assert_eq!(app.unbind_result().unwrap().total_cost, 1125);
        assert_eq!(app.upgrade_result().level, 100);
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Duel);
        app.set_tab(3);
        assert_eq!(app.current_tab, Tab::Upgrade);
        app.set_tab(42);
        assert_eq!(app.current_tab, Tab::Upgrade);
    }

    #[test]
    fn test_typing_into_fields() {
        let mut app = app();
        app.clear_field();
        app.on_char('1');
        app.on_char('a');
        app.on_char('2');
        app.on_char('0');
        assert_eq!(app.duel.attacker, "120");

        app.on_down();
        app.clear_field();
        for c in "119".chars() {
            app.on_char(c);
        }
        assert!(!app.duel_result().unwrap().penalty);

        app.on_backspace();
        assert_eq!(app.duel.victim, "11");
    }

    #[test]
    fn test_invalid_number() {
        let mut app = app();
        app.duel.victim.clear();
        assert_eq!(
            app.duel_result(),
            Err(InputError::InvalidNumber {
                field: "Victim level",
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_group_list_parsing() {
        assert_eq!(parse_level_list("x", "200, 180 160,"), Ok(vec![200, 180, 160]));
        assert_eq!(parse_level_list("x", "  "), Ok(vec![]));

        let mut app = app();
        app.group.defenders.clear();
        assert_eq!(
            app.group_result(),
            Err(InputError::Calc(CalcError::EmptyLevels {
                side: Side::Defender,
            }))
        );
    }

    #[test]
    fn test_rarity_cycling() {
        let mut app = app();
        app.set_tab(2);
        // Level field selected, arrows do nothing
        app.on_right();
        assert_eq!(app.unbind.rarity, Rarity::Common);

        app.on_down();
        app.on_right();
        assert_eq!(app.unbind.rarity, Rarity::Unique);
        app.on_left();
        app.on_left();
        assert_eq!(app.unbind.rarity, Rarity::Legendary);
    }

    #[test]
    fn test_unbind_rejects_upgraded() {
        let mut app = app();
        app.unbind.rarity = Rarity::Upgraded;
        assert!(matches!(
            app.unbind_result(),
            Err(InputError::Calc(CalcError::UnsupportedRarity { .. }))
        ));
    }

    #[test]
    fn test_upgrade_clamps_bad_input() {
        let mut app = app();
        app.upgrade.level = "abc".to_string();
        assert_eq!(app.upgrade_result().level, 1);
        app.upgrade.level = "950.5".to_string();
        assert_eq!(app.upgrade_result().level, 300);
    }

    #[test]
    fn test_result_json() {
        let mut app = app();
        app.set_tab(2);
        let json = app.result_json();
        assert!(json.contains("\"total_cost\": 1125"));

        app.unbind.level = "0".to_string();
        assert_eq!(app.result_json(), "level 0 is out of range, expected 1-300");
    }

    #[test]
    fn test_reset() {
        let mut app = app();
        app.duel.attacker = "1".to_string();
        app.reset();
        assert_eq!(app.duel.attacker, "200");
    }
}
