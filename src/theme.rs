use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
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

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Only the exact string `"dark"` restores dark mode; anything else that
    /// was stored under the key means the user picked light.
    pub fn from_stored(value: &str) -> Self {
        if value == Theme::Dark.as_str() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't write to storage: {0}")]
    Write(String),
}

pub trait ThemePersistence: Send + Sync {
    fn load(&self) -> Result<Option<String>, PersistError>;
    fn save(&self, value: &str) -> Result<(), PersistError>;
}

#[derive(Debug, Default)]
pub struct MemoryPersistence {
    value: Mutex<Option<String>>,
}

impl MemoryPersistence {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }

    pub fn value(&self) -> Option<String> {
        lock(&self.value).clone()
    }
}

impl ThemePersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), PersistError> {
        *lock(&self.value) = Some(value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call so the type stays
/// `Send + Sync`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePersistence;

#[cfg(feature = "hydrate")]
impl LocalStoragePersistence {
    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(PersistError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl ThemePersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Option<String>, PersistError> {
        Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| PersistError::Unavailable)
    }

    fn save(&self, value: &str) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(STORAGE_KEY, value)
            .map_err(|e| PersistError::Write(format!("{e:?}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(Theme) + Send + Sync>;

struct StoreInner {
    theme: Theme,
    persistence: Option<Box<dyn ThemePersistence>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Clones share state. If the backend fails once the store drops it and
/// stays in memory for the rest of the session.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("ThemeStore")
            .field("theme", &inner.theme)
            .field("persistent", &inner.persistence.is_some())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ThemeStore {
    pub fn new(persistence: impl ThemePersistence + 'static) -> Self {
        let (theme, persistence) = match persistence.load() {
            Ok(saved) => (
                saved.as_deref().map(Theme::from_stored).unwrap_or_default(),
                Some(Box::new(persistence) as Box<dyn ThemePersistence>),
            ),
            Err(e) => {
                log::warn!("theme preference won't persist: {e}");
                (Theme::default(), None)
            }
        };
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                theme,
                persistence,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn in_memory(theme: Theme) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                theme,
                persistence: None,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn theme(&self) -> Theme {
        lock(&self.inner).theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn is_persistent(&self) -> bool {
        lock(&self.inner).persistence.is_some()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    pub fn set_theme(&self, theme: Theme) {
        let listeners = {
            let mut inner = lock(&self.inner);
            inner.theme = theme;
            if let Some(persistence) = &inner.persistence {
                if let Err(e) = persistence.save(theme.as_str()) {
                    log::warn!("theme preference won't persist: {e}");
                    inner.persistence = None;
                }
            }
            inner
                .listeners
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect::<Vec<_>>()
        };
        // listeners may read the store, so call them unlocked
        for listener in listeners {
            listener(theme);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(Theme) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = lock(&self.inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        lock(&self.inner).listeners.retain(|(lid, _)| *lid != id);
    }
}

// A panicking listener can't leave the state half-written, so poisoning is
// safe to ignore.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl ThemePersistence for BrokenStorage {
        fn load(&self) -> Result<Option<String>, PersistError> {
            Err(PersistError::Unavailable)
        }

        fn save(&self, _: &str) -> Result<(), PersistError> {
            Err(PersistError::Unavailable)
        }
    }

    struct ReadOnlyStorage;

    impl ThemePersistence for ReadOnlyStorage {
        fn load(&self) -> Result<Option<String>, PersistError> {
            Ok(Some("light".to_string()))
        }

        fn save(&self, _: &str) -> Result<(), PersistError> {
            Err(PersistError::Write("QuotaExceededError".to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct SharedStorage(Arc<MemoryPersistence>);

    impl ThemePersistence for SharedStorage {
        fn load(&self) -> Result<Option<String>, PersistError> {
            self.0.load()
        }

        fn save(&self, value: &str) -> Result<(), PersistError> {
            self.0.save(value)
        }
    }

    #[test]
    fn test_defaults_to_dark() {
        let store = ThemeStore::new(MemoryPersistence::default());
        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.is_dark());
        assert!(store.is_persistent());
    }

    #[test]
    fn test_restores_saved_preference() {
        assert_eq!(ThemeStore::new(MemoryPersistence::with_value("light")).theme(), Theme::Light);
        assert_eq!(ThemeStore::new(MemoryPersistence::with_value("dark")).theme(), Theme::Dark);
        // anything but "dark" was written by choosing light
        assert_eq!(ThemeStore::new(MemoryPersistence::with_value("sepia")).theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        let storage = SharedStorage::default();
        let store = ThemeStore::new(storage.clone());

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.0.value().as_deref(), Some("light"));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(storage.0.value().as_deref(), Some(store.theme().as_str()));
    }

    #[test]
    fn test_set_theme_persists_explicit_value() {
        let storage = SharedStorage::default();
        let store = ThemeStore::new(storage.clone());
        store.set_theme(Theme::Light);
        store.set_theme(Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.0.value().as_deref(), Some("light"));
    }

    #[test]
    fn test_unavailable_storage_falls_back_to_memory() {
        let store = ThemeStore::new(BrokenStorage);
        assert_eq!(store.theme(), Theme::Dark);
        assert!(!store.is_persistent());
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_failed_write_keeps_state_in_memory() {
        let store = ThemeStore::new(ReadOnlyStorage);
        assert_eq!(store.theme(), Theme::Light);
        assert!(store.is_persistent());

        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert!(!store.is_persistent());
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let store = ThemeStore::in_memory(Theme::Dark);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |t| sink.lock().unwrap().push(t));
        store.toggle();
        store.set_theme(Theme::Dark);
        store.unsubscribe(id);
        store.toggle();

        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn test_subscriber_can_read_store() {
        let store = ThemeStore::in_memory(Theme::Dark);
        let observed = Arc::new(Mutex::new(None));

        let reader = store.clone();
        let sink = Arc::clone(&observed);
        store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.is_dark()));
        store.toggle();

        assert_eq!(*observed.lock().unwrap(), Some(false));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
