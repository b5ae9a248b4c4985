use anyhow::{bail, Result};

pub mod color;
pub mod registry;

pub use color::{Gradient, Rgb};
pub use registry::{RABBIT, THEMES, VERCEL};

/// Key of the theme used when no settings have been saved yet.
pub const DEFAULT_THEME_KEY: &str = "candy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub partner: bool,
    pub hidden: bool,
    pub background: Gradient,
}

impl Theme {
    #[must_use]
    pub const fn standard(name: &'static str, background: Gradient) -> Self {
        Self {
            name,
            partner: false,
            hidden: false,
            background,
        }
    }

    #[must_use]
    pub const fn partner(name: &'static str, background: Gradient) -> Self {
        Self {
            name,
            partner: true,
            hidden: false,
            background,
        }
    }

    /// Exclude this theme from the public cycle and from the partner listing.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Themes are identified by display name.
    #[must_use]
    pub fn is(&self, other: &Theme) -> bool {
        self.name == other.name
    }
}

/// A theme annotated with its registry key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedTheme {
    pub key: &'static str,
    pub theme: &'static Theme,
}

/// Ordered, immutable mapping from key to theme.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    entries: &'static [(&'static str, Theme)],
}

impl Registry {
    pub fn new(entries: &'static [(&'static str, Theme)]) -> Result<Self> {
        if entries.is_empty() {
            bail!("theme registry is empty");
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self { entries: THEMES }
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyedTheme> + '_ {
        self.entries
            .iter()
            .map(|(key, theme)| KeyedTheme { key: *key, theme })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static Theme> {
        self.entries
            .iter()
            .find(|(_, theme)| theme.name == name)
            .map(|(_, theme)| theme)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&'static Theme> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, theme)| theme)
    }

    pub fn key_of(&self, theme: &Theme) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, t)| t.is(theme))
            .map(|(key, _)| *key)
    }

    /// Non-hidden themes in registry order. Recomputed on each call.
    pub fn public_themes(&self) -> Vec<&'static Theme> {
        self.entries
            .iter()
            .map(|(_, theme)| theme)
            .filter(|theme| !theme.hidden)
            .collect()
    }

    /// The default key if present, else the first public theme, else the first entry.
    #[must_use]
    pub fn default_theme(&self) -> &'static Theme {
        let entries = self.entries;
        self.find_by_key(DEFAULT_THEME_KEY)
            .or_else(|| entries.iter().map(|(_, t)| t).find(|t| !t.hidden))
            .unwrap_or(&entries[0].1)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NO_PUBLIC: &[(&str, Theme)] = &[(
        "ghost",
        Theme::standard("Ghost", Gradient::new(Rgb(0, 0, 0), Rgb(1, 1, 1))).hidden(),
    )];

    #[test]
    fn test_builtin_lookups() {
        let registry = Registry::builtin();
        assert_eq!(registry.find_by_name("Vercel"), Some(&VERCEL));
        assert_eq!(registry.find_by_key("rabbit"), Some(&RABBIT));
        assert_eq!(registry.key_of(&VERCEL), Some("vercel"));
        assert!(registry.find_by_name("vercel").is_none());
        assert!(registry.find_by_key("nope").is_none());
    }

    #[test]
    fn test_public_themes_skip_hidden() {
        let registry = Registry::builtin();
        let public = registry.public_themes();
        assert!(public.iter().all(|t| !t.hidden));
        assert!(!public.iter().any(|t| t.name == "Supabase"));
        assert_eq!(public.len(), registry.iter().filter(|k| !k.theme.hidden).count());
    }

    #[test]
    fn test_names_are_unique() {
        let registry = Registry::builtin();
        let mut names: Vec<_> = registry.iter().map(|k| k.theme.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_default_theme() {
        assert_eq!(Registry::builtin().default_theme().name, "Candy");
        // Falls back to the first entry when nothing is public
        let registry = Registry::new(NO_PUBLIC).unwrap();
        assert_eq!(registry.default_theme().name, "Ghost");
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(Registry::new(&[]).is_err());
    }
}
