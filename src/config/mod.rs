use serde::{de::Deserializer, Deserialize, Serialize};
use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, config_dir_in, config_file_in, ensure_dir};
use crate::errors::BudgetError;

const TMP_SUFFIX: &str = "tmp";

/// User preferences. Cosmetic only: none of these change ledger behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_page_title")]
    pub page_title: String,
    #[serde(default = "Config::default_page_icon")]
    pub page_icon: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_true")]
    pub show_welcome: bool,
    #[serde(default = "Config::default_true")]
    pub auto_refresh: bool,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_title: Self::default_page_title(),
            page_icon: Self::default_page_icon(),
            layout: Layout::default(),
            theme: Theme::default(),
            show_welcome: true,
            auto_refresh: true,
            ui_color_enabled: true,
            accessibility: AccessibilitySettings::default(),
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &[
    "page_title",
    "page_icon",
    "layout",
    "theme",
    "show_welcome",
    "auto_refresh",
    "ui_color_enabled",
    "plain_output",
    "high_contrast",
];

impl Config {
    pub fn default_page_title() -> String {
        "Budget Planner".into()
    }

    pub fn default_page_icon() -> String {
        "💸".into()
    }

    fn default_true() -> bool {
        true
    }

    /// Applies a `config set <key> <value>` pair.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        match key {
            "page_title" => self.page_title = value.trim().to_string(),
            "page_icon" => self.page_icon = value.trim().to_string(),
            "layout" => self.layout = Layout::parse(value)?,
            "theme" => self.theme = Theme::parse(value)?,
            "show_welcome" => self.show_welcome = parse_bool(key, value)?,
            "auto_refresh" => self.auto_refresh = parse_bool(key, value)?,
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(key, value)?,
            "plain_output" => self.accessibility.plain_output = parse_bool(key, value)?,
            "high_contrast" => self.accessibility.high_contrast = parse_bool(key, value)?,
            other => {
                return Err(BudgetError::InvalidInput(format!(
                    "unknown config key `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page_title", self.page_title.clone()),
            ("page_icon", self.page_icon.clone()),
            ("layout", self.layout.to_string()),
            ("theme", self.theme.to_string()),
            ("show_welcome", self.show_welcome.to_string()),
            ("auto_refresh", self.auto_refresh.to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("plain_output", self.accessibility.plain_output.to_string()),
            ("high_contrast", self.accessibility.high_contrast.to_string()),
        ]
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, BudgetError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(BudgetError::InvalidInput(format!(
            "`{}` expects true/false, got `{}`",
            key, other
        ))),
    }
}

/// Page width preset; decides how much room the chart bars get.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Wide,
    Centered,
}

impl Layout {
    pub fn parse(value: &str) -> Result<Self, BudgetError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "centered" | "centred" => Ok(Layout::Centered),
            other => Err(BudgetError::InvalidInput(format!(
                "unknown layout `{}` (expected wide or centered)",
                other
            ))),
        }
    }

    pub fn chart_width(&self) -> usize {
        match self {
            Layout::Wide => 40,
            Layout::Centered => 24,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Wide => f.write_str("wide"),
            Layout::Centered => f.write_str("centered"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    pub fn parse(value: &str) -> Result<Self, BudgetError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Theme::Plain),
            "iconic" => Ok(Theme::Iconic),
            other => Err(BudgetError::InvalidInput(format!(
                "unknown theme `{}` (expected iconic or plain)",
                other
            ))),
        }
    }

    /// Lenient mapping for files on disk; anything unrecognised falls back to the default.
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }

    pub fn use_icons(&self) -> bool {
        matches!(self, Theme::Iconic)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|v| Theme::from_str(&v))
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&config_dir_in(&base))?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "config saved");
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

fn write_atomic(path: &Path, data: &str) -> Result<(), BudgetError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
