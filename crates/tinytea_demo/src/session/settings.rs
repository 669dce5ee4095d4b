use anyhow::Context;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tinytea_cipher::TeaKey;
use tinytea_padding::{DEFAULT_MAX_INPUT_LEN, TruncationPolicy};
use tinytea_serde::hex::as_words;

/// Largest number of messages the single-keystroke menu can address.
pub const MAX_MENU_OPTIONS: usize = 9;

/// Demo session configuration.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// 128-bit key used for every block, written as four hex words.
    #[serde(with = "as_words")]
    pub key: TeaKey,

    /// Maximum number of message bytes copied before padding.
    pub max_input_len: usize,

    /// What to do with messages longer than `max_input_len`.
    pub truncation: TruncationPolicy,

    /// Spread block transforms over the compute task pool.
    pub parallel: bool,

    /// Number of blocks handed to each task when `parallel` is enabled.
    pub blocks_per_task: usize,

    /// Messages offered by the menu, option 1 first.
    pub messages: Vec<String>,

    /// How the message is selected.
    pub menu: MenuSettings,
}

/// Errors found while validating loaded settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The menu needs between 1 and 9 messages.
    #[error("expected between 1 and {MAX_MENU_OPTIONS} messages, found {count}")]
    MessageCount {
        /// Number of configured messages.
        count: usize,
    },

    /// The default option does not name a configured message.
    #[error("default option {option} is outside 1..={count}")]
    DefaultOption {
        /// The configured default option.
        option: usize,
        /// Number of configured messages.
        count: usize,
    },

    /// Parallel work needs at least one block per task.
    #[error("blocks_per_task must be at least 1")]
    BlocksPerTask,
}

/// Location of the demo configuration file.
///
/// Defaults to `TeaDemoSettings.toml` in the working directory when the host
/// app does not insert one.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct SettingsFile(pub PathBuf);

impl Default for SettingsFile {
    fn default() -> Self {
        Self(PathBuf::from(Settings::PATH))
    }
}

impl Settings {
    /// Path to the configuration file.
    const PATH: &'static str = "TeaDemoSettings.toml";

    /// Returns the message for a 1-based menu option.
    pub fn message(&self, option: usize) -> Option<&str> {
        option
            .checked_sub(1)
            .and_then(|index| self.messages.get(index))
            .map(String::as_str)
    }

    /// Checks the values the session relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let count = self.messages.len();

        if count == 0 || count > MAX_MENU_OPTIONS {
            return Err(SettingsError::MessageCount { count });
        }

        if self.message(self.menu.default_option).is_none() {
            return Err(SettingsError::DefaultOption {
                option: self.menu.default_option,
                count,
            });
        }

        if self.blocks_per_task == 0 {
            return Err(SettingsError::BlocksPerTask);
        }

        Ok(())
    }

    /// Tries to load the settings, or creates the file with default settings if it doesn't exist.
    pub(crate) fn load_or_default() -> anyhow::Result<Self> {
        Self::load_or_default_from(Path::new(Self::PATH))
    }

    pub(crate) fn load_or_default_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            info!(
                "Configuration file '{}' found, attempting to load.",
                path.display()
            );

            Self::load(path)
        } else {
            warn!(
                "Configuration file '{}' not found. Creating default configuration.",
                path.display()
            );

            Self::create(path)
        }
    }

    /// Tries to load and validate the settings from the file.
    fn load(path: &Path) -> anyhow::Result<Self> {
        debug!("Attempting to read configuration from '{}'", path.display());

        let config_str =
            fs::read_to_string(path).context("Failed to read the configuration file")?;

        info!("Successfully read configuration file '{}'", path.display());

        let settings: Self = toml::from_str(&config_str)
            .context("Failed to parse the configuration file as TOML")?;

        settings
            .validate()
            .context("The configuration file contains invalid values")?;

        trace!("Loaded settings: {:?}", settings);

        Ok(settings)
    }

    /// Creates the configuration file with default settings, then loads it back.
    fn create(path: &Path) -> anyhow::Result<Self> {
        info!("Creating default configuration file '{}'", path.display());

        let default_config = Self::default();

        debug!("Serializing default configuration to TOML format");

        let config_str: String = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        let mut file = File::create(path).context("Failed to create the configuration file")?;

        debug!("Writing default configuration to file");

        file.write_all(config_str.as_bytes())
            .context("Failed to write the default configuration to the file")?;

        info!(
            "Default configuration written to '{}'. Reloading from file.",
            path.display()
        );

        Self::load(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key: [0x12345678, 0x9ABCDEF0, 0xFEDCBA98, 0x76543210],
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            truncation: TruncationPolicy::Silent,
            parallel: false,
            blocks_per_task: 4,
            messages: vec![
                "HOLA1234".to_owned(),
                "Mensaje de prueba para TEA".to_owned(),
                "Este es un mensaje de prueba muy largo".to_owned(),
                "Texto".to_owned(),
            ],
            menu: MenuSettings::default(),
        }
    }
}

/// Configuration for picking the demo message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuSettings {
    /// Prompt on standard input; otherwise `default_option` is used directly.
    pub interactive: bool,

    /// Option used when the prompt is skipped, answered with Enter, or closed.
    pub default_option: usize,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            interactive: true,
            default_option: 1,
        }
    }
}
