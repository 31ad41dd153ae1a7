use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    currency::{CurrencyCode, LocaleConfig, MoneyFormatter},
    errors::LedgerError,
    ledger::Period,
    utils::{app_data_dir, config_file_in},
};

const TMP_SUFFIX: &str = "tmp";

/// User preferences. The ledger itself is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub default_period: Period,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "es-ES".into(),
            currency: "EUR".into(),
            default_period: Period::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 4] = ["locale", "currency", "default_period", "ui_color"];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn money_formatter(&self) -> MoneyFormatter {
        MoneyFormatter::new(
            CurrencyCode::new(self.currency.as_str()),
            LocaleConfig::from_tag(&self.locale),
        )
    }

    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        let value = value.trim();
        match key {
            "locale" => {
                let locale = LocaleConfig::parse_tag(value).ok_or_else(|| {
                    LedgerError::Config(format!(
                        "unsupported locale `{}` (expected es-ES or en-US)",
                        value
                    ))
                })?;
                self.locale = locale.language_tag;
            }
            "currency" => {
                if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(LedgerError::Config(format!(
                        "`{}` is not a three-letter currency code",
                        value
                    )));
                }
                self.currency = value.to_ascii_uppercase();
            }
            "default_period" => {
                self.default_period = value
                    .parse()
                    .map_err(|err: crate::ledger::ParsePeriodError| {
                        LedgerError::Config(err.to_string())
                    })?;
            }
            "ui_color" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    other => {
                        return Err(LedgerError::Config(format!(
                            "`{}` is not a valid switch (use on/off)",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        debug!(key, value, "preference updated");
        Ok(())
    }
}

/// Loads and saves [`Config`] as JSON under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored preferences; a missing file yields defaults.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            info!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
