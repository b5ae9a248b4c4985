use super::keymap::{KeyConfig, KeyMap};
use super::persistence::Settings;
use crate::chrome::Chrome;
use crate::components::theme_control::ThemeControl;
use crate::store::Store;
use crate::themes::{Registry, Theme};

use std::time::{Duration, Instant};
use tokio::sync::watch;

/// How long a status message stays in the footer.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,        // Editing the frame
    ThemeDropdown, // Theme list open
}

#[derive(Debug)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<String>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Shared Editor State ---
    pub registry: Registry,
    pub store: Store,

    // --- Controls ---
    pub theme_control: ThemeControl,

    // --- Derived ---
    pub chrome: Chrome,
    theme_seen: watch::Receiver<&'static Theme>,
    padding_seen: watch::Receiver<u16>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: KeyMap,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Registry, settings: &Settings, config: &KeyConfig) -> Self {
        let (theme, padding) = settings.resolve(&registry);
        let store = Store::new(theme, padding);
        let mut keymap = KeyMap::from_config(config);
        let cycle_key = keymap.bindings.cycle_theme;
        let theme_control = ThemeControl::mount(registry, &store, &mut keymap, cycle_key);

        // Subscribed after the mount effect so startup writes are not treated as edits
        let theme_seen = store.theme.subscribe();
        let padding_seen = store.padding.subscribe();

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            chrome: Chrome::from_theme(store.theme.get()),
            registry,
            store,
            theme_control,
            theme_seen,
            padding_seen,
            frame_count: 0,
            keymap,
        }
    }

    pub fn current_theme(&self) -> &'static Theme {
        self.store.theme.get()
    }

    pub fn padding(&self) -> u16 {
        self.store.padding.get()
    }

    /// Snapshot of the store for persistence.
    pub fn settings(&self) -> Settings {
        let theme = self.current_theme();
        Settings {
            theme: self
                .registry
                .key_of(theme)
                .unwrap_or(theme.name)
                .to_string(),
            padding: self.padding(),
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }

    /// Runs control effects, then reports whether the store was written since the last call.
    pub fn sync_effects(&mut self) -> bool {
        self.theme_control.sync(&self.store);

        let theme_changed = self.theme_seen.has_changed().unwrap_or(false);
        let padding_changed = self.padding_seen.has_changed().unwrap_or(false);
        if theme_changed {
            let theme = *self.theme_seen.borrow_and_update();
            self.chrome = Chrome::from_theme(theme);
        }
        if padding_changed {
            let _ = self.padding_seen.borrow_and_update();
        }
        theme_changed || padding_changed
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Registry::builtin(),
            &Settings::default(),
            &KeyConfig::default(),
        )
    }
}
