//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// User preferences changed from the settings menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "lenient_theme")]
    pub theme: ThemeKind,
    #[serde(default)]
    pub round_buttons: bool,
    /// Free-form percentage text, parsed on use.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: String,
    /// Flash the pressed key.
    #[serde(default = "default_true")]
    pub vibration: bool,
    #[serde(default, deserialize_with = "lenient_language")]
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            round_buttons: false,
            tax_rate: default_tax_rate(),
            vibration: true,
            language: Language::default(),
        }
    }
}

impl Settings {
    /// The tax rate as a number, falling back to 10 when the text does not
    /// parse.
    pub fn tax_rate_value(&self) -> BigDecimal {
        BigDecimal::from_str(self.tax_rate.trim()).unwrap_or_else(|_| BigDecimal::from(10))
    }
}

/// Completed-computation history settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Append completed computations to daily files.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_history_dir")]
    pub log_dir: String,
    /// In-memory cap; the oldest entries are dropped first.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_history_dir(),
            max_entries: default_max_entries(),
        }
    }
}

/// Diagnostic tracing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"skincalc=debug"`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeKind {
    Macaron,
    CottonCandy,
    Unicorn,
    Sherbet,
    PeachMilk,
    Pistachio,
    Lavender,
    #[default]
    Indigo,
    Pink,
    Teal,
    Orange,
    Brown,
    Green,
    Grey,
    Miku,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 15] = [
        ThemeKind::Macaron,
        ThemeKind::CottonCandy,
        ThemeKind::Unicorn,
        ThemeKind::Sherbet,
        ThemeKind::PeachMilk,
        ThemeKind::Pistachio,
        ThemeKind::Lavender,
        ThemeKind::Indigo,
        ThemeKind::Pink,
        ThemeKind::Teal,
        ThemeKind::Orange,
        ThemeKind::Brown,
        ThemeKind::Green,
        ThemeKind::Grey,
        ThemeKind::Miku,
    ];

    /// Name as stored in the config file.
    pub fn key(self) -> &'static str {
        match self {
            ThemeKind::Macaron => "MACARON",
            ThemeKind::CottonCandy => "COTTON_CANDY",
            ThemeKind::Unicorn => "UNICORN",
            ThemeKind::Sherbet => "SHERBET",
            ThemeKind::PeachMilk => "PEACH_MILK",
            ThemeKind::Pistachio => "PISTACHIO",
            ThemeKind::Lavender => "LAVENDER",
            ThemeKind::Indigo => "INDIGO",
            ThemeKind::Pink => "PINK",
            ThemeKind::Teal => "TEAL",
            ThemeKind::Orange => "ORANGE",
            ThemeKind::Brown => "BROWN",
            ThemeKind::Green => "GREEN",
            ThemeKind::Grey => "GREY",
            ThemeKind::Miku => "MIKU",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn is_pastel(self) -> bool {
        matches!(
            self,
            ThemeKind::Macaron
                | ThemeKind::CottonCandy
                | ThemeKind::Unicorn
                | ThemeKind::Sherbet
                | ThemeKind::PeachMilk
                | ThemeKind::Pistachio
                | ThemeKind::Lavender
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
    Es,
    De,
    Ru,
    Zh,
    Ko,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Ja,
        Language::En,
        Language::Es,
        Language::De,
        Language::Ru,
        Language::Zh,
        Language::Ko,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Ru => "ru",
            Language::Zh => "zh",
            Language::Ko => "ko",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ja => "日本語",
            Language::En => "English",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::Ru => "Русский",
            Language::Zh => "中文",
            Language::Ko => "한국어",
        }
    }
}

// Unknown names fall back to the default instead of rejecting the file.
fn lenient_theme<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ThemeKind, D::Error> {
    let key = String::deserialize(deserializer)?;
    Ok(ThemeKind::from_key(&key).unwrap_or_default())
}

fn lenient_language<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Language, D::Error> {
    let code = String::deserialize(deserializer)?;
    Ok(Language::from_code(&code).unwrap_or_default())
}

fn default_true() -> bool {
    true
}
fn default_tax_rate() -> String {
    "10".to_string()
}
fn default_history_dir() -> String {
    "~/.local/share/skincalc/history".to_string()
}
fn default_max_entries() -> usize {
    1000
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.settings.theme, ThemeKind::Indigo);
        assert_eq!(cfg.settings.language, Language::Ja);
        assert_eq!(cfg.settings.tax_rate, "10");
        assert!(cfg.settings.vibration);
        assert!(!cfg.settings.round_buttons);
        assert!(!cfg.history.enabled);
        assert_eq!(cfg.history.max_entries, 1000);
        assert_eq!(cfg.diagnostics.level, "info");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: AppConfig = toml::from_str("[settings]\ntheme = \"MIKU\"\n").unwrap();
        assert_eq!(cfg.settings.theme, ThemeKind::Miku);
        assert_eq!(cfg.settings.tax_rate, "10");
        assert!(cfg.settings.vibration);
        assert_eq!(cfg.history, HistoryConfig::default());
    }

    #[test]
    fn test_unknown_theme_and_language_fall_back() {
        let cfg: AppConfig =
            toml::from_str("[settings]\ntheme = \"NEON\"\nlanguage = \"xx\"\n").unwrap();
        assert_eq!(cfg.settings.theme, ThemeKind::Indigo);
        assert_eq!(cfg.settings.language, Language::Ja);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut cfg = AppConfig::default();
        cfg.settings.theme = ThemeKind::CottonCandy;
        cfg.settings.language = Language::Ko;
        cfg.settings.tax_rate = "8".into();
        cfg.settings.vibration = false;
        cfg.settings.round_buttons = true;
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("COTTON_CANDY"));
        assert!(text.contains("\"ko\""));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_tax_rate_value_fallback() {
        let mut settings = Settings::default();
        assert_eq!(settings.tax_rate_value(), BigDecimal::from(10));
        settings.tax_rate = " 8.5 ".into();
        assert_eq!(settings.tax_rate_value(), BigDecimal::from_str("8.5").unwrap());
        settings.tax_rate = "abc".into();
        assert_eq!(settings.tax_rate_value(), BigDecimal::from(10));
        settings.tax_rate = String::new();
        assert_eq!(settings.tax_rate_value(), BigDecimal::from(10));
    }

    #[test]
    fn test_theme_keys() {
        for theme in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_key(theme.key()), Some(theme));
        }
        assert!(ThemeKind::Lavender.is_pastel());
        assert!(!ThemeKind::Grey.is_pastel());
    }
}
