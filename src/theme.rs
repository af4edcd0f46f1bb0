//! Light/dark preference: one persisted key, one writer, applied document-wide.

#[cfg(test)]
use std::collections::HashMap;
use std::fmt;

use crate::telemetry::{log_event, LogLevel};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
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

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StorageError {
    Unavailable,
    ReadFailed,
    WriteFailed,
}

impl StorageError {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::ReadFailed => "read_failed",
            Self::WriteFailed => "write_failed",
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preference storage {}", self.as_str().replace('_', " "))
    }
}

impl std::error::Error for StorageError {}

/// Durable key-value storage local to the client.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Whatever paints the preference onto the page.
pub trait ThemeSurface {
    fn paint(&mut self, theme: Theme);
}

#[cfg(test)]
#[derive(Default, Debug)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Holds the current preference and the storage it is persisted to.
///
/// When storage fails at any point the store drops it and keeps the preference in
/// memory for the rest of the session.
pub struct ThemeStore<S, P> {
    storage: Option<S>,
    surface: P,
    current: Theme,
    applied: Option<Theme>,
}

impl<S: PreferenceStorage, P: ThemeSurface> ThemeStore<S, P> {
    pub fn load(storage: Result<S, StorageError>, surface: P) -> Self {
        let storage = match storage {
            Ok(storage) => Some(storage),
            Err(error) => {
                report_storage_error("theme_storage_unavailable", error);
                None
            }
        };

        let mut store = Self {
            storage,
            surface,
            current: Theme::default(),
            applied: None,
        };
        store.current = store.read_persisted().unwrap_or_default();
        store
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    #[cfg(test)]
    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Paints `theme` unless it is already the painted value.
    pub fn apply(&mut self, theme: Theme) {
        if self.applied == Some(theme) {
            return;
        }

        self.surface.paint(theme);
        self.applied = Some(theme);
    }

    pub fn apply_current(&mut self) {
        self.apply(self.current);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.current = next;
        self.persist(next);
        self.apply(next);
        next
    }

    fn read_persisted(&mut self) -> Option<Theme> {
        let storage = self.storage.as_ref()?;
        match storage.read(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(error) => {
                report_storage_error("theme_read_failed", error);
                self.storage = None;
                None
            }
        }
    }

    fn persist(&mut self, theme: Theme) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };

        if let Err(error) = storage.write(THEME_KEY, theme.as_str()) {
            report_storage_error("theme_write_failed", error);
            self.storage = None;
        }
    }
}

fn report_storage_error(event: &str, error: StorageError) {
    log_event(
        LogLevel::Info,
        event,
        serde_json::json!({ "reason": error.as_str(), "fallback": "memory" }),
    );
}
