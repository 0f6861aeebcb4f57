use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub mod logging;

pub use commands::CommandsConfig;
pub use cooldown::CooldownConfig;
pub use logging::LoggingConfig;
pub use messages::MessagesConfig;
pub use permissions::PermissionsConfig;
pub use sound::SoundConfig;

mod commands;
mod cooldown;
mod messages;
mod permissions;
mod sound;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Couldn't parse config at {path:?}. Reason: {message}. This is probably caused by a config update, just delete the old config and start again")]
    Parse { path: PathBuf, message: String },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything the brewing plugin can be tuned with. Every section falls back to
/// its defaults, so a partial file is always valid.
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
#[serde(default)]
pub struct ChemistryConfig {
    pub cooldown: CooldownConfig,
    pub permissions: PermissionsConfig,
    pub messages: MessagesConfig,
    pub sound: SoundConfig,
    pub commands: CommandsConfig,
    pub logging: LoggingConfig,
}

pub trait LoadTomlConfiguration {
    fn load(data_folder: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = data_folder.join(Self::file_name());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(&path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {}", err),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn file_name() -> &'static str;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadTomlConfiguration for ChemistryConfig {
    fn file_name() -> &'static str {
        "config.toml"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.permissions.use_station.trim().is_empty()
            || self.permissions.reload.trim().is_empty()
        {
            return Err(ConfigError::Invalid(
                "permission nodes must not be empty".to_string(),
            ));
        }
        if !(0.0..=10.0).contains(&self.sound.volume) {
            return Err(ConfigError::Invalid(format!(
                "sound volume must be between 0 and 10, got {}",
                self.sound.volume
            )));
        }
        Ok(())
    }
}
