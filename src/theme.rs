use log::warn;
use web_sys::window;

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Stored preference, dark when nothing usable is stored.
    pub fn load(store: &impl KeyValueStore) -> Theme {
        store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(Theme::Dark)
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn save(self, store: &impl KeyValueStore) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            warn!("Could not persist theme: {}", e);
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[test]
    fn defaults_to_dark_without_a_stored_preference() {
        let store = MemoryStorage::default();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn toggle_persists_across_reload() {
        let store = MemoryStorage::default();
        let theme = Theme::load(&store).toggled();
        theme.save(&store);

        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_dark() {
        let store = MemoryStorage::default();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
