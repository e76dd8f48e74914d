use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Refresh,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
}

impl Keybind {
    pub const fn new(key: KeyEvent, action: Action) -> Self {
        Self { key, action }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && normalize(self.key.modifiers) == normalize(key.modifiers)
    }
}

/// Actions advertised in the status bar, in display order.
const HINTED: [(Action, &str); 3] = [
    (Action::Refresh, "refresh"),
    (Action::ScrollDown, "scroll"),
    (Action::Quit, "quit"),
];

// Terminals disagree on whether shifted characters carry SHIFT.
fn normalize(modifiers: KeyModifiers) -> KeyModifiers {
    modifiers.difference(KeyModifiers::SHIFT)
}

/// Resolves key presses to actions.
#[derive(Debug, Clone)]
pub struct Keymap {
    binds: Vec<Keybind>,
}

impl Default for Keymap {
    fn default() -> Self {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        Self {
            binds: vec![
                Keybind::new(key(KeyCode::Char('r')), Action::Refresh),
                Keybind::new(key(KeyCode::F(5)), Action::Refresh),
                Keybind::new(key(KeyCode::Up), Action::ScrollUp),
                Keybind::new(key(KeyCode::Char('k')), Action::ScrollUp),
                Keybind::new(key(KeyCode::Down), Action::ScrollDown),
                Keybind::new(key(KeyCode::Char('j')), Action::ScrollDown),
                Keybind::new(key(KeyCode::Home), Action::ScrollToTop),
                Keybind::new(key(KeyCode::End), Action::ScrollToBottom),
                Keybind::new(key(KeyCode::Char('q')), Action::Quit),
                Keybind::new(key(KeyCode::Esc), Action::Quit),
            ],
        }
    }
}

impl Keymap {
    /// Builds the default keymap with user overrides placed in front.
    /// Unparseable key specs are skipped and returned for reporting.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> (Self, Vec<String>) {
        let mut keymap = Self::default();
        let mut rejected = Vec::new();
        let mut custom = Vec::new();

        let mut specs: Vec<_> = overrides.iter().collect();
        specs.sort_by(|a, b| a.0.cmp(b.0));

        for (spec, action) in specs {
            match parse_key_spec(spec) {
                Some(key) => custom.push(Keybind::new(key, *action)),
                None => rejected.push(spec.clone()),
            }
        }

        custom.append(&mut keymap.binds);
        keymap.binds = custom;
        (keymap, rejected)
    }

    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        self.binds.iter().find(|b| b.matches(key)).map(|b| b.action)
    }

    /// Hints shown in the status bar, e.g. `r refresh`. Each hint names the
    /// first key that still triggers its action after overrides.
    #[must_use]
    pub fn hints(&self) -> Vec<String> {
        HINTED
            .iter()
            .filter_map(|(action, label)| {
                self.binds
                    .iter()
                    .find(|b| b.action == *action && self.resolve(&b.key) == Some(*action))
                    .map(|b| format!("{} {label}", describe_key(&b.key)))
            })
            .collect()
    }
}

/// Parses specs such as `r`, `F5`, `Ctrl+r`, `Alt+Enter` or `Esc`.
#[must_use]
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    let key = parts.pop().filter(|k| !k.is_empty())?;

    for part in parts {
        modifiers |= match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n = lower.strip_prefix('f')?.parse::<u8>().ok()?;
                    KeyCode::F(n)
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

fn describe_key(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{other:?}"),
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else if key.modifiers.contains(KeyModifiers::ALT) {
        format!("Alt+{base}")
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("r", KeyCode::Char('r'), KeyModifiers::NONE ; "plain_char")]
    #[test_case("Ctrl+r", KeyCode::Char('r'), KeyModifiers::CONTROL ; "ctrl_char")]
    #[test_case("alt+Enter", KeyCode::Enter, KeyModifiers::ALT ; "alt_enter")]
    #[test_case("F5", KeyCode::F(5), KeyModifiers::NONE ; "function_key")]
    #[test_case("Esc", KeyCode::Esc, KeyModifiers::NONE ; "escape")]
    fn test_parse_key_spec(spec: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key_spec(spec), Some(KeyEvent::new(code, modifiers)));
    }

    #[test_case("" ; "empty")]
    #[test_case("Hyper+r" ; "unknown_modifier")]
    #[test_case("Ctrl+" ; "missing_key")]
    #[test_case("banana" ; "unknown_name")]
    fn test_parse_key_spec_rejects(spec: &str) {
        assert_eq!(parse_key_spec(spec), None);
    }

    #[test]
    fn test_default_resolution() {
        let keymap = Keymap::default();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(keymap.resolve(&press(KeyCode::Char('r'))), Some(Action::Refresh));
        assert_eq!(keymap.resolve(&press(KeyCode::F(5))), Some(Action::Refresh));
        assert_eq!(keymap.resolve(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(keymap.resolve(&press(KeyCode::Down)), Some(Action::ScrollDown));
        assert_eq!(keymap.resolve(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("q".to_string(), Action::Refresh);
        overrides.insert("Nope+q".to_string(), Action::Quit);

        let (keymap, rejected) = Keymap::with_overrides(&overrides);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(keymap.resolve(&q), Some(Action::Refresh));
        assert_eq!(rejected, vec!["Nope+q".to_string()]);
    }

    #[test]
    fn test_default_hints() {
        let hints = Keymap::default().hints();
        assert_eq!(hints, vec!["r refresh", "↓ scroll", "q quit"]);
    }

    #[test]
    fn test_hints_follow_rebinding() {
        let mut overrides = HashMap::new();
        overrides.insert("r".to_string(), Action::Quit);
        overrides.insert("Ctrl+d".to_string(), Action::ScrollDown);

        let (keymap, _) = Keymap::with_overrides(&overrides);

        assert_eq!(keymap.hints(), vec!["F5 refresh", "Ctrl+d scroll", "r quit"]);
    }
}
