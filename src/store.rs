use crate::themes::{Registry, Theme};
use tokio::sync::watch;

pub const PADDING_OPTIONS: [u16; 4] = [16, 32, 64, 128];
pub const DEFAULT_PADDING: u16 = 64;

/// A single observable value.
///
/// Every `set` notifies subscribers, including writes of an equal value.
#[derive(Debug)]
pub struct Atom<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Atom<T> {
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// The returned receiver starts out having seen the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

/// Editor state shared between controls.
#[derive(Debug)]
pub struct Store {
    pub theme: Atom<&'static Theme>,
    pub padding: Atom<u16>,
}

impl Store {
    pub fn new(theme: &'static Theme, padding: u16) -> Self {
        Self {
            theme: Atom::new(theme),
            padding: Atom::new(padding),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Registry::builtin().default_theme(), DEFAULT_PADDING)
    }
}

/// The padding option after `current`, wrapping around. Unknown values restart at the first option.
#[must_use]
pub fn next_padding(current: u16) -> u16 {
    let next = PADDING_OPTIONS
        .iter()
        .position(|p| *p == current)
        .map_or(0, |i| i + 1);
    PADDING_OPTIONS
        .get(next)
        .copied()
        .unwrap_or(PADDING_OPTIONS[0])
}
