use crate::config::THEME_KEY;
use crate::error::PageError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Class added next to a component's own class names.
    pub fn class(self) -> Option<&'static str> {
        self.is_dark().then_some("dark")
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// String key/value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

pub struct ThemeStore<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, or light when nothing usable is stored.
    pub fn load(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(&value).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("reading theme preference: {err}");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), PageError> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flips `current`, persists the result and returns it. A failed write
    /// still returns the new theme so the page keeps reacting.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(err) = self.save(next) {
            log::warn!("persisting theme preference: {err}");
        }
        log::debug!("theme switched to {}", next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
        fn get(&self, key: &str) -> Result<Option<String>, PageError> {
            (**self).get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
            (**self).set(key, value)
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, PageError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PageError> {
            Err(PageError::Storage("denied".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PageError> {
            Err(PageError::Storage("denied".into()))
        }
    }

    #[test]
    fn missing_preference_defaults_to_light() {
        let store = ThemeStore::new(MemoryStore::default());
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn toggled_theme_survives_reinitialisation() {
        let backing = MemoryStore::default();
        let first = ThemeStore::new(&backing);
        let next = first.toggle(first.load());
        assert_eq!(next, Theme::Dark);
        assert_eq!(backing.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let reopened = ThemeStore::new(&backing);
        assert_eq!(reopened.load(), Theme::Dark);
        let back = reopened.toggle(reopened.load());
        assert_eq!(ThemeStore::new(&backing).load(), back);
        assert_eq!(back, Theme::Light);
    }

    #[test]
    fn unrecognised_stored_value_reads_as_light() {
        let backing = MemoryStore::default();
        backing.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeStore::new(&backing).load(), Theme::Light);
    }

    #[test]
    fn storage_failures_do_not_block_toggling() {
        let store = ThemeStore::new(BrokenStore);
        assert_eq!(store.load(), Theme::Light);
        assert_eq!(store.toggle(Theme::Light), Theme::Dark);
    }

    #[test]
    fn labels_describe_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Dark.class(), Some("dark"));
        assert_eq!(Theme::Light.class(), None);
    }
}
