//! Durable session settings.
//!
//! Two values survive restarts: the selected language code and whether the
//! guided tutorial was finished. Both are read once at startup and written on
//! change through a [`SettingsStore`].

use crate::lang::Lang;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings could not be encoded: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Empty means unset.
    pub selected_language_code: String,
    pub has_completed_tutorial: bool,
}

impl Settings {
    /// The persisted language. Unknown or empty codes read as unset.
    pub fn language(&self) -> Option<Lang> {
        let code = self.selected_language_code.trim();
        if code.is_empty() {
            return None;
        }
        let lang = Lang::from_code(code);
        if lang.is_none() {
            warn!(code, "ignoring unsupported persisted language");
        }
        lang
    }

    pub fn set_language(&mut self, lang: Lang) {
        self.selected_language_code = lang.code().to_owned();
    }
}

pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Result<Settings, StoreError>;
    fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}

/// Settings kept in a JSON file. A missing or unreadable-as-JSON file reads
/// as defaults; only I/O failures are errors on load.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Settings, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "corrupt settings file, using defaults"
                    );
                    Ok(Settings::default())
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(self.io_err(e)),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        // atomic replace
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// Settings kept in memory, for hosts without storage and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Mutex<Settings>,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    pub fn snapshot(&self) -> Settings {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        Ok(())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Settings, StoreError> {
        (**self).load()
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        (**self).save(settings)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn load(&self) -> Result<Settings, StoreError> {
        (**self).load()
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        (**self).save(settings)
    }
}
