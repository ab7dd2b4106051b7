//! Persistence seam for the theme preference.

use crate::error::ThemeError;

/// Key-value slot holding the raw preference string.
///
/// Implementations own their key; the resolver only reads and writes the
/// single value. Absence (`Ok(None)`) is a normal state.
pub trait PreferenceStore {
    /// Read the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StoreUnavailable`] when the backing store cannot
    /// be reached.
    fn load(&self) -> Result<Option<String>, ThemeError>;

    /// Overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::StoreUnavailable`] when the write is refused
    /// (storage disabled, quota exceeded).
    fn save(&mut self, value: &str) -> Result<(), ThemeError>;
}

/// Process-local store. Used natively and as a stand-in for storage in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `value`, as if written by an earlier page load.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` slot under a fixed key.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .ok_or_else(|| ThemeError::StoreUnavailable("no window".to_owned()))?
            .local_storage()
            .map_err(|e| ThemeError::StoreUnavailable(format!("{e:?}")))?
            .ok_or_else(|| ThemeError::StoreUnavailable("localStorage disabled".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| ThemeError::StoreUnavailable(format!("{e:?}")))
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(&self.key, value)
            .map_err(|e| ThemeError::StoreUnavailable(format!("{e:?}")))
    }
}
