use crate::utils::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than "dark" reads as light.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            log::warn!("could not persist theme: {}", e);
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon for the toggle button
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn test_defaults_to_light() {
        let store = MemoryStorage::new();
        assert_eq!(Theme::load(&store), Theme::Light);
        store.set(THEME_KEY, "purple").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStorage::new();
        let theme = Theme::load(&store).toggled();
        theme.persist(&store);

        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(theme.icon_class(), "fas fa-sun");
    }
}
