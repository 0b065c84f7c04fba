use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::display::MarkerPolicy;
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    Zh,
    Pinyin,
    En,
    Es,
}

/// Which text columns the views show. At least one is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePreferences {
    pub zh: bool,
    pub pinyin: bool,
    pub en: bool,
    pub es: bool,
}

impl Default for LanguagePreferences {
    fn default() -> Self {
        Self {
            zh: true,
            pinyin: false,
            en: true,
            es: false,
        }
    }
}

impl LanguagePreferences {
    pub fn is_enabled(&self, language: Language) -> bool {
        match language {
            Language::Zh => self.zh,
            Language::Pinyin => self.pinyin,
            Language::En => self.en,
            Language::Es => self.es,
        }
    }

    pub fn enabled_count(&self) -> usize {
        [self.zh, self.pinyin, self.en, self.es]
            .iter()
            .filter(|&&on| on)
            .count()
    }

    pub fn set(&mut self, language: Language, enabled: bool) -> Result<()> {
        if !enabled && self.is_enabled(language) && self.enabled_count() == 1 {
            bail!("At least one language must stay selected");
        }

        let slot = match language {
            Language::Zh => &mut self.zh,
            Language::Pinyin => &mut self.pinyin,
            Language::En => &mut self.en,
            Language::Es => &mut self.es,
        };
        *slot = enabled;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserSettings {
    #[serde(default)]
    languages: LanguagePreferences,
    #[serde(default)]
    marker_policy: MarkerPolicy,
}

fn repair_languages(data: &mut UserSettings) {
    if data.languages.enabled_count() == 0 {
        log_warn!("Stored settings had no language selected; restoring defaults");
        data.languages = LanguagePreferences::default();
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let mut data: UserSettings = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                    log_warn!(
                        "Ignoring malformed settings at {}: {}",
                        path.display(),
                        err
                    );
                    UserSettings::default()
                }),
                Err(err) => {
                    log_warn!("Could not read settings at {}: {}", path.display(), err);
                    UserSettings::default()
                }
            }
        } else {
            UserSettings::default()
        };

        repair_languages(&mut data);
        log_info!("Loaded settings from {}", path.display());

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn languages(&self) -> LanguagePreferences {
        self.read().languages
    }

    pub fn set_language(&self, language: Language, enabled: bool) -> Result<LanguagePreferences> {
        let mut guard = self.write();
        let mut updated = guard.languages;
        updated.set(language, enabled)?;
        guard.languages = updated;
        self.persist(&guard)?;
        Ok(updated)
    }

    pub fn marker_policy(&self) -> MarkerPolicy {
        self.read().marker_policy
    }

    pub fn update_marker_policy(&self, policy: MarkerPolicy) -> Result<()> {
        {
            let mut guard = self.write();
            guard.marker_policy = policy;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

impl SettingsStore {
    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let mut data: UserSettings = serde_json::from_str(&contents)?;
        repair_languages(&mut data);
        *self.write() = data;
        Ok(())
    }
}
