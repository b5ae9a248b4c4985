use super::action::Action;
use super::persistence::config_dir;
use super::state::AppMode;

use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

pub const CYCLE_THEME: &str = "cycle_theme";
pub const OPEN_THEME: &str = "open_theme";
pub const CYCLE_PADDING: &str = "cycle_padding";
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
    /// Action name -> key, e.g. `cycle_theme = "n"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

impl KeyConfig {
    /// Reads `~/.config/rayframe/config.toml`, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = config_dir().map(|dir| dir.join("config.toml")) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "ignoring key config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// The key bound to `action`, honoring custom overrides that parse.
    #[must_use]
    pub fn key_for(&self, action: &str, default: KeyCode) -> KeyEvent {
        let custom = self
            .custom
            .as_ref()
            .and_then(|custom| custom.get(action))
            .and_then(|spec| match parse_key(spec) {
                Ok(code) => Some(code),
                Err(err) => {
                    warn!(action, error = %err, "invalid key binding");
                    None
                }
            });
        key(custom.unwrap_or(default))
    }

    #[must_use]
    pub fn bindings(&self) -> KeyBindings {
        KeyBindings {
            cycle_theme: self.key_for(CYCLE_THEME, KeyCode::Char('c')),
            open_theme: self.key_for(OPEN_THEME, KeyCode::Char('t')),
            cycle_padding: self.key_for(CYCLE_PADDING, KeyCode::Char('p')),
            quit: self.key_for(QUIT, KeyCode::Char('q')),
        }
    }
}

/// Resolved keys for the configurable actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub cycle_theme: KeyEvent,
    pub open_theme: KeyEvent,
    pub cycle_padding: KeyEvent,
    pub quit: KeyEvent,
}

/// Accepts a single character or one of a few named keys.
pub fn parse_key(spec: &str) -> Result<KeyCode> {
    let mut chars = spec.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    Ok(match spec.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        _ => bail!("unknown key {spec:?}"),
    })
}

/// Short name of a key for on-screen hints.
#[must_use]
pub fn key_label(event: KeyEvent) -> String {
    match event.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyId(u64);

#[derive(Debug)]
pub struct KeyMap {
    pub bindings: KeyBindings,
    pub global: HashMap<KeyEvent, Action>,
    pub dropdown_mode: HashMap<KeyEvent, Action>,
    // Registered by mounted components, most recent first on lookup
    hotkeys: Vec<(HotkeyId, KeyEvent, Action)>,
    next_hotkey: u64,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let bindings = config.bindings();
        let mut global = HashMap::new();
        let mut dropdown_mode = HashMap::new();

        // --- Global / Normal Mode ---
        global.insert(bindings.quit, Action::Quit);
        global.insert(bindings.open_theme, Action::OpenThemeDropdown);
        global.insert(bindings.cycle_padding, Action::CyclePadding);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Dropdown Mode ---
        dropdown_mode.insert(key(KeyCode::Char('j')), Action::DropdownNext);
        dropdown_mode.insert(key(KeyCode::Down), Action::DropdownNext);
        dropdown_mode.insert(key(KeyCode::Tab), Action::DropdownNext);
        dropdown_mode.insert(key(KeyCode::Char('k')), Action::DropdownPrev);
        dropdown_mode.insert(key(KeyCode::Up), Action::DropdownPrev);
        dropdown_mode.insert(key(KeyCode::BackTab), Action::DropdownPrev);
        dropdown_mode.insert(key(KeyCode::Enter), Action::DropdownConfirm);
        dropdown_mode.insert(key(KeyCode::Char(' ')), Action::DropdownConfirm);
        dropdown_mode.insert(key(KeyCode::Esc), Action::CancelMode);
        dropdown_mode.insert(bindings.open_theme, Action::CancelMode);
        dropdown_mode.insert(bindings.quit, Action::CancelMode);

        Self {
            bindings,
            global,
            dropdown_mode,
            hotkeys: Vec::new(),
            next_hotkey: 0,
        }
    }

    /// Bind `key` to `action` until the returned id is unregistered.
    pub fn register(&mut self, key: KeyEvent, action: Action) -> HotkeyId {
        let id = HotkeyId(self.next_hotkey);
        self.next_hotkey += 1;
        self.hotkeys.push((id, normalize(key), action));
        id
    }

    pub fn unregister(&mut self, id: HotkeyId) -> bool {
        let before = self.hotkeys.len();
        self.hotkeys.retain(|(hid, _, _)| *hid != id);
        self.hotkeys.len() != before
    }

    /// Component hotkeys only fire in normal mode, ahead of the global map.
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = normalize(event);
        match mode {
            AppMode::ThemeDropdown => self.dropdown_mode.get(&event).cloned(),
            AppMode::Normal => self
                .hotkeys
                .iter()
                .rev()
                .find(|(_, k, _)| *k == event)
                .map(|(_, _, action)| action.clone())
                .or_else(|| self.global.get(&event).cloned()),
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

// Terminals disagree on whether an uppercase char carries SHIFT; compare without it.
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}
