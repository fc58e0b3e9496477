//! Configuration module for `reactionviz`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in string values
const DIR_VARIABLE: &str = "$REACTION_VIZ";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Reaction dataset to load
    #[serde(default)]
    pub data_file: String,
    /// Directory for rendered output files
    #[serde(default)]
    pub out_dir: String,
}

/// Rendering configuration
///
/// Missing fields take the values of [`RenderConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas height (CSS length)
    pub height: String,
    /// Canvas width (CSS length)
    pub width: String,
    /// Page background color
    pub bgcolor: String,
    /// Label color
    pub font_color: String,
    /// `forceAtlas2Based` gravitational constant
    pub gravity: f64,
    /// `forceAtlas2Based` central gravity
    pub central_gravity: f64,
    /// Edge rest length
    pub spring_length: f64,
    /// Edge rest length for the single-reactant viewer
    pub simplified_spring_length: f64,
    /// Edge stiffness
    pub spring_strength: f64,
    /// Open the rendered page in the default browser
    pub open_browser: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            height: "800px".to_string(),
            width: "100%".to_string(),
            bgcolor: "#f8f9fa".to_string(),
            font_color: "#343a40".to_string(),
            gravity: -50.0,
            central_gravity: 0.01,
            spring_length: 150.0,
            simplified_spring_length: 200.0,
            spring_strength: 0.08,
            open_browser: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Rendering settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override dataset path
    pub data_file: Option<String>,
    /// Override output directory
    pub out_dir: Option<String>,
    /// Override browser opening
    pub open_browser: Option<bool>,
}

fn parse_f64(key: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl Config {
    /// Get the `$REACTION_VIZ` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/reactionviz`
    /// - macOS: `~/Library/Application Support/reactionviz`
    /// - Windows: `%APPDATA%\reactionviz`
    #[must_use]
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("reactionviz")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_config_dir`](Self::get_config_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; render numbers already fall back to their defaults during
    /// deserialization.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        let mut fill = |target: &mut String, default: &str| {
            if target.is_empty() && !default.is_empty() {
                default.clone_into(target);
                changed = true;
            }
        };

        fill(&mut self.logging.level, &defaults.logging.level);
        fill(&mut self.logging.file, &defaults.logging.file);
        fill(&mut self.paths.data_file, &defaults.paths.data_file);
        fill(&mut self.paths.out_dir, &defaults.paths.out_dir);
        fill(&mut self.render.height, &defaults.render.height);
        fill(&mut self.render.width, &defaults.render.width);
        fill(&mut self.render.bgcolor, &defaults.render.bgcolor);
        fill(&mut self.render.font_color, &defaults.render.font_color);

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not touched. Only
    /// `Some` values replace config values.
    ///
    /// # Examples
    ///
    /// ```
    /// use reaction_network::config::{Config, ConfigOverrides};
    ///
    /// let mut config = Config::from_defaults();
    /// config.apply_overrides(&ConfigOverrides {
    ///     level: Some("error".to_string()),
    ///     ..Default::default()
    /// });
    /// assert_eq!(config.logging.level, "error");
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
        if let Some(open_browser) = overrides.open_browser {
            self.render.open_browser = open_browser;
        }
    }

    /// Copy of this config with CLI overrides applied
    ///
    /// Leaves `self` untouched, so the stored config can still be edited and
    /// saved without picking up values meant for a single run.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut config = self.clone();
        config.apply_overrides(overrides);
        config
    }

    /// Expand `$REACTION_VIZ` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_config_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$REACTION_VIZ` in path values. Missing fields use their serde
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: `DefaultCLIConfigDebug.toml`
    /// - Release: `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from
    ///   defaults, and save it back when something was added.
    /// - First run: create the config directory and save the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save();
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_file`, `out_dir`,
    /// `height`, `width`, `bgcolor`, `font_color`, `gravity`,
    /// `central_gravity`, `spring_length`, `simplified_spring_length`,
    /// `spring_strength`, `open_browser`. Dashes are accepted in place of
    /// underscores.
    ///
    /// # Returns
    /// `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone(),
            "file" => self.logging.file.clone(),
            "verbose" => self.logging.verbose.to_string(),
            "data_file" => self.paths.data_file.clone(),
            "out_dir" => self.paths.out_dir.clone(),
            "height" => self.render.height.clone(),
            "width" => self.render.width.clone(),
            "bgcolor" => self.render.bgcolor.clone(),
            "font_color" => self.render.font_color.clone(),
            "gravity" => self.render.gravity.to_string(),
            "central_gravity" => self.render.central_gravity.to_string(),
            "spring_length" => self.render.spring_length.to_string(),
            "simplified_spring_length" => self.render.simplified_spring_length.to_string(),
            "spring_strength" => self.render.spring_strength.to_string(),
            "open_browser" => self.render.open_browser.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed for that key (e.g. `"maybe"` for `verbose`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "data_file" => self.paths.data_file = value.to_string(),
            "out_dir" => self.paths.out_dir = value.to_string(),
            "height" => self.render.height = value.to_string(),
            "width" => self.render.width = value.to_string(),
            "bgcolor" => self.render.bgcolor = value.to_string(),
            "font_color" => self.render.font_color = value.to_string(),
            "gravity" => self.render.gravity = parse_f64(key, value)?,
            "central_gravity" => self.render.central_gravity = parse_f64(key, value)?,
            "spring_length" => self.render.spring_length = parse_f64(key, value)?,
            "simplified_spring_length" => {
                self.render.simplified_spring_length = parse_f64(key, value)?;
            }
            "spring_strength" => self.render.spring_strength = parse_f64(key, value)?,
            "open_browser" => self.render.open_browser = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let default_value = defaults
            .get(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        self.set(key, &default_value)
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        let render = &self.render;
        writeln!(f, "\n[render]")?;
        writeln!(f, "  height = \"{}\"", render.height)?;
        writeln!(f, "  width = \"{}\"", render.width)?;
        writeln!(f, "  bgcolor = \"{}\"", render.bgcolor)?;
        writeln!(f, "  font_color = \"{}\"", render.font_color)?;
        writeln!(f, "  gravity = {}", render.gravity)?;
        writeln!(f, "  central_gravity = {}", render.central_gravity)?;
        writeln!(f, "  spring_length = {}", render.spring_length)?;
        writeln!(
            f,
            "  simplified_spring_length = {}",
            render.simplified_spring_length
        )?;
        writeln!(f, "  spring_strength = {}", render.spring_strength)?;
        writeln!(f, "  open_browser = {}", render.open_browser)?;

        Ok(())
    }
}
