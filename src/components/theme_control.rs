//! The theme picker shown in the editor's control bar.
//!
//! Partner themes are listed in their own group above the standard ones,
//! `c` cycles through every public theme, and activating one of the
//! designated partner themes forces the frame padding to
//! [`PARTNER_PADDING`].

use crate::app::action::Action;
use crate::app::keymap::{HotkeyId, KeyMap};
use crate::chrome::Chrome;
use crate::store::Store;
use crate::themes::{KeyedTheme, Registry, Theme, RABBIT, VERCEL};

use anyhow::{anyhow, Result};
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::dropdown::{DropdownRow, DropdownState};
use super::preview::Preview;

pub const PARTNER_PADDING: u16 = 64;
pub const PARTNERS_LABEL: &str = "Partners";
pub const TITLE: &str = "Theme";

/// Whether activating `theme` forces the padding.
#[must_use]
pub fn forces_padding(theme: &Theme) -> bool {
    theme.name == VERCEL.name || theme.name == RABBIT.name
}

/// The registry split into partner and standard themes, registry order kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeGroups {
    pub partner_themes: Vec<KeyedTheme>,
    pub themes: Vec<KeyedTheme>,
}

impl ThemeGroups {
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        registry
            .iter()
            .fold(Self::default(), |mut acc, keyed| {
                if keyed.theme.partner {
                    acc.partner_themes.push(keyed);
                } else {
                    acc.themes.push(keyed);
                }
                acc
            })
    }

    /// The partner group is only shown when a partner theme is public.
    #[must_use]
    pub fn has_public_partner(&self) -> bool {
        self.partner_themes.iter().any(|k| !k.theme.hidden)
    }
}

#[derive(Debug)]
pub struct ThemeControl {
    registry: Registry,
    groups: ThemeGroups,
    theme_rx: watch::Receiver<&'static Theme>,
    // Theme the padding effect last ran for
    effect_theme: &'static Theme,
    hotkey: Option<HotkeyId>,
    pub dropdown: Option<DropdownState>,
}

impl ThemeControl {
    /// Groups the registry, registers the cycle hotkey and runs the padding effect once.
    pub fn mount(
        registry: Registry,
        store: &Store,
        keymap: &mut KeyMap,
        cycle_key: KeyEvent,
    ) -> Self {
        let hotkey = keymap.register(cycle_key, Action::CycleTheme);
        let mut theme_rx = store.theme.subscribe();
        let current = *theme_rx.borrow_and_update();

        let control = Self {
            groups: ThemeGroups::from_registry(&registry),
            registry,
            theme_rx,
            effect_theme: current,
            hotkey: Some(hotkey),
            dropdown: None,
        };
        control.apply_padding_effect(store, current);
        control
    }

    pub fn unmount(&mut self, keymap: &mut KeyMap) {
        if let Some(id) = self.hotkey.take() {
            keymap.unregister(id);
        }
        self.dropdown = None;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.hotkey.is_some()
    }

    #[must_use]
    pub fn groups(&self) -> &ThemeGroups {
        &self.groups
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the padding effect if the current theme changed since the effect last ran.
    /// Rewriting the same theme does not count. Returns whether the effect fired.
    pub fn sync(&mut self, store: &Store) -> bool {
        if !self.theme_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let theme = *self.theme_rx.borrow_and_update();
        if theme.is(self.effect_theme) {
            return false;
        }
        self.effect_theme = theme;
        self.apply_padding_effect(store, theme);
        true
    }

    fn apply_padding_effect(&self, store: &Store, theme: &Theme) {
        if forces_padding(theme) {
            debug!(theme = theme.name, padding = PARTNER_PADDING, "forcing partner padding");
            store.padding.set(PARTNER_PADDING);
        }
    }

    /// Hotkey handler: the public theme after the current one, wrapping to the first.
    pub fn cycle(&self, store: &Store) -> Option<&'static Theme> {
        let public = self.registry.public_themes();
        let current = store.theme.get();
        let next = public
            .iter()
            .position(|t| t.is(current))
            .map_or(0, |i| i + 1);
        let theme = public.get(next).or_else(|| public.first()).copied()?;

        info!(from = current.name, to = theme.name, "cycling theme");
        store.theme.set(theme);
        Some(theme)
    }

    /// Writes the registry theme whose display name is `name`.
    pub fn select(&self, store: &Store, name: &str) -> Result<&'static Theme> {
        let theme = self.registry.find_by_name(name).ok_or_else(|| {
            warn!(theme = name, "selected theme is not in the registry");
            anyhow!("Unknown theme: {name}")
        })?;
        info!(theme = theme.name, "theme selected");
        store.theme.set(theme);
        Ok(theme)
    }

    /// Dropdown rows for the given current theme.
    #[must_use]
    pub fn rows(&self, current: &Theme) -> Vec<DropdownRow> {
        let mut rows = Vec::new();

        if self.groups.has_public_partner() {
            rows.push(DropdownRow::Label(PARTNERS_LABEL.to_string()));
            rows.extend(
                self.groups
                    .partner_themes
                    .iter()
                    .filter(|k| !k.theme.hidden || k.theme.is(current))
                    .map(|k| item(k.theme, Preview::for_partner(k.theme))),
            );
            rows.push(DropdownRow::Separator);
        }

        rows.extend(
            self.groups
                .themes
                .iter()
                .map(|k| item(k.theme, Preview::for_standard(k.theme))),
        );
        rows
    }

    pub fn open(&mut self, store: &Store) {
        let current = store.theme.get();
        self.dropdown = Some(DropdownState::new(
            self.rows(current),
            Some(current.name.to_string()),
        ));
    }

    pub fn close(&mut self) {
        self.dropdown = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.dropdown.is_some()
    }

    /// Commits the highlighted entry and closes the dropdown.
    pub fn confirm(&mut self, store: &Store) -> Option<Result<&'static Theme>> {
        let dropdown = self.dropdown.take()?;
        let value = dropdown.selected_value()?;
        Some(self.select(store, value))
    }
}

fn item(theme: &Theme, preview: Preview) -> DropdownRow {
    DropdownRow::Item {
        value: theme.name.to_string(),
        label: theme.name.to_string(),
        preview: preview.spans(),
    }
}

/// The collapsed control: title, preview of the current theme and its name.
pub struct ThemeControlView<'a> {
    pub theme: &'a Theme,
    pub chrome: &'a Chrome,
    pub open: bool,
}

impl Widget for ThemeControlView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let preview = if self.theme.partner {
            Preview::for_partner(self.theme)
        } else {
            Preview::for_standard(self.theme)
        };
        let value_style = if self.open {
            self.chrome.list_selected
        } else {
            self.chrome.control_value
        };

        let mut spans = vec![Span::styled(format!(" {TITLE} "), self.chrome.control_title)];
        spans.extend(preview.spans());
        spans.push(Span::styled(format!(" {} ", self.theme.name), value_style));
        spans.push(Span::styled(if self.open { "▴ " } else { "▾ " }, value_style));

        Paragraph::new(Line::from(spans))
            .style(self.chrome.header)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::KeyConfig;
    use crate::app::state::AppMode;
    use crate::themes::{registry::CANDY, Gradient, Rgb};
    use crossterm::event::{KeyCode, KeyModifiers};

    const G: Gradient = Gradient::new(Rgb(1, 2, 3), Rgb(4, 5, 6));

    // [A(standard), B(partner, hidden), C(partner)]
    static SMALL: &[(&str, Theme)] = &[
        ("a", Theme::standard("A", G)),
        ("b", Theme::partner("B", G).hidden()),
        ("c", Theme::partner("C", G)),
    ];

    static HIDDEN_PARTNERS: &[(&str, Theme)] = &[
        ("a", Theme::standard("A", G)),
        ("b", Theme::partner("B", G).hidden()),
        ("z", Theme::standard("Z", G).hidden()),
    ];

    static WITH_VERCEL: &[(&str, Theme)] =
        &[("vercel", VERCEL), ("rabbit", RABBIT), ("candy", CANDY)];

    fn c_key() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty())
    }

    fn mount(
        entries: &'static [(&'static str, Theme)],
        current: &str,
        padding: u16,
    ) -> (ThemeControl, Store, KeyMap) {
        let registry = Registry::new(entries).unwrap();
        let store = Store::new(registry.find_by_name(current).unwrap(), padding);
        let mut keymap = KeyMap::from_config(&KeyConfig::default());
        let control = ThemeControl::mount(registry, &store, &mut keymap, c_key());
        (control, store, keymap)
    }

    fn labels(rows: &[DropdownRow]) -> Vec<String> {
        rows.iter()
            .map(|r| match r {
                DropdownRow::Label(l) => format!("[{l}]"),
                DropdownRow::Separator => "---".to_string(),
                DropdownRow::Item { value, .. } => value.clone(),
            })
            .collect()
    }

    #[test]
    fn test_groups_keep_registry_keys() {
        let (control, _, _) = mount(SMALL, "A", 16);
        let groups = control.groups();
        let partner_keys: Vec<_> = groups.partner_themes.iter().map(|k| k.key).collect();
        let keys: Vec<_> = groups.themes.iter().map(|k| k.key).collect();
        assert_eq!(partner_keys, vec!["b", "c"]);
        assert_eq!(keys, vec!["a"]);
    }

    #[test]
    fn test_rows_small_registry() {
        let (control, store, _) = mount(SMALL, "A", 16);
        let rows = control.rows(store.theme.get());
        assert_eq!(labels(&rows), vec!["[Partners]", "C", "---", "A"]);
    }

    #[test]
    fn test_rows_include_hidden_current_partner() {
        let (control, store, _) = mount(SMALL, "B", 16);
        let rows = control.rows(store.theme.get());
        assert_eq!(labels(&rows), vec!["[Partners]", "B", "C", "---", "A"]);
    }

    #[test]
    fn test_partner_group_requires_public_partner() {
        // Even with a hidden partner as the current theme
        let (control, store, _) = mount(HIDDEN_PARTNERS, "B", 16);
        let rows = control.rows(store.theme.get());
        assert_eq!(labels(&rows), vec!["A", "Z"]);
    }

    #[test]
    fn test_standard_group_ignores_hidden_flag() {
        let (control, store, _) = mount(HIDDEN_PARTNERS, "A", 16);
        let rows = control.rows(store.theme.get());
        assert!(labels(&rows).contains(&"Z".to_string()));
    }

    #[test]
    fn test_builtin_rows_previews() {
        let registry = Registry::builtin();
        let store = Store::new(registry.default_theme(), 16);
        let mut keymap = KeyMap::from_config(&KeyConfig::default());
        let control = ThemeControl::mount(registry, &store, &mut keymap, c_key());
        let rows = control.rows(store.theme.get());

        let vercel = rows.iter().find(|r| r.value() == Some("Vercel")).unwrap();
        if let DropdownRow::Item { preview, .. } = vercel {
            assert_eq!(preview, &Preview::for_partner(&VERCEL).spans());
        }
        // Hidden partner stays out while not current
        assert!(!rows.iter().any(|r| r.value() == Some("Supabase")));
        // Hidden standard theme is still listed
        assert!(rows.iter().any(|r| r.value() == Some("Mono")));
    }

    #[test]
    fn test_cycle_uses_public_themes() {
        let (control, store, _) = mount(SMALL, "A", 16);
        assert_eq!(control.cycle(&store).map(|t| t.name), Some("C"));
        assert_eq!(store.theme.get().name, "C");
        // Wraps at the end
        assert_eq!(control.cycle(&store).map(|t| t.name), Some("A"));
    }

    #[test]
    fn test_cycle_from_hidden_goes_to_first_public() {
        let (control, store, _) = mount(SMALL, "B", 16);
        assert_eq!(control.cycle(&store).map(|t| t.name), Some("A"));
    }

    #[test]
    fn test_cycle_every_public_index() {
        let registry = Registry::builtin();
        let public = registry.public_themes();
        let store = Store::new(public[0], 16);
        let mut keymap = KeyMap::from_config(&KeyConfig::default());
        let control = ThemeControl::mount(registry, &store, &mut keymap, c_key());

        for i in 0..public.len() {
            store.theme.set(public[i]);
            control.cycle(&store);
            let expected = public[(i + 1) % public.len()];
            assert_eq!(store.theme.get().name, expected.name);
        }
    }

    #[test]
    fn test_select_every_public_theme() {
        let (control, store, _) = mount(WITH_VERCEL, "Candy", 16);
        for theme in control.registry().public_themes() {
            control.select(&store, theme.name).unwrap();
            assert!(store.theme.get().is(theme));
        }
    }

    #[test]
    fn test_select_unknown_leaves_theme() {
        let (control, store, _) = mount(SMALL, "A", 16);
        assert!(control.select(&store, "Nope").is_err());
        assert_eq!(store.theme.get().name, "A");
    }

    #[test]
    fn test_mount_applies_padding_for_designated_theme() {
        let (_, store, _) = mount(WITH_VERCEL, "Vercel", 16);
        assert_eq!(store.padding.get(), PARTNER_PADDING);

        let (_, store, _) = mount(WITH_VERCEL, "Candy", 16);
        assert_eq!(store.padding.get(), 16);
    }

    #[test]
    fn test_sync_runs_effect_on_change() {
        let (mut control, store, _) = mount(WITH_VERCEL, "Candy", 32);
        assert!(!control.sync(&store));

        control.select(&store, "Rabbit").unwrap();
        assert!(control.sync(&store));
        assert_eq!(store.padding.get(), PARTNER_PADDING);

        // Other themes leave padding alone
        store.padding.set(128);
        control.select(&store, "Candy").unwrap();
        assert!(control.sync(&store));
        assert_eq!(store.padding.get(), 128);
    }

    #[test]
    fn test_same_theme_rewrite_keeps_padding() {
        let (mut control, store, _) = mount(WITH_VERCEL, "Vercel", 64);
        store.padding.set(128);

        control.select(&store, "Vercel").unwrap();
        assert!(!control.sync(&store));
        assert_eq!(store.padding.get(), 128);
    }

    #[test]
    fn test_effect_writes_padding_already_at_target() {
        let (mut control, store, _) = mount(WITH_VERCEL, "Candy", 64);
        let mut padding_rx = store.padding.subscribe();

        control.select(&store, "Vercel").unwrap();
        assert!(control.sync(&store));
        // Already 64, still written
        assert!(padding_rx.has_changed().unwrap());
        assert_eq!(*padding_rx.borrow_and_update(), 64);
    }

    #[test]
    fn test_hotkey_registered_while_mounted() {
        let (mut control, _, mut keymap) = mount(SMALL, "A", 16);
        assert_eq!(
            keymap.get_action(c_key(), AppMode::Normal),
            Some(Action::CycleTheme)
        );

        control.unmount(&mut keymap);
        assert!(!control.is_mounted());
        assert_ne!(
            keymap.get_action(c_key(), AppMode::Normal),
            Some(Action::CycleTheme)
        );
    }

    #[test]
    fn test_open_and_confirm() {
        let (mut control, store, _) = mount(SMALL, "A", 16);
        control.open(&store);
        let dropdown = control.dropdown.as_mut().unwrap();
        assert_eq!(dropdown.selected_value(), Some("A"));
        dropdown.prev();
        assert_eq!(dropdown.selected_value(), Some("C"));

        let theme = control.confirm(&store).unwrap().unwrap();
        assert_eq!(theme.name, "C");
        assert!(!control.is_open());
        assert_eq!(store.theme.get().name, "C");
    }

    #[test]
    fn test_view_renders_name() {
        let chrome = Chrome::from_theme(&CANDY);
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        ThemeControlView {
            theme: &CANDY,
            chrome: &chrome,
            open: false,
        }
        .render(area, &mut buf);
        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.contains("Theme"));
        assert!(text.contains("Candy"));
        assert!(text.contains('▾'));
    }
}
