use chemistry_config::ConfigError;
use chemistry_inventory::InventoryError;
use chemistry_registry::RecipeLoadError;
use log::log;
use std::fmt::Display;

/// Errors which never reach the host. They are logged at their own severity and
/// the interaction that caused them is abandoned.
pub trait ChemistryError: Send + std::error::Error + Display {
    fn log(&self) {
        log!(self.severity(), "{}", self.to_string());
    }

    fn severity(&self) -> log::Level;
}

impl<ErrorType: ChemistryError + 'static> From<ErrorType> for Box<dyn ChemistryError> {
    fn from(error: ErrorType) -> Self {
        Box::new(error)
    }
}

impl ChemistryError for InventoryError {
    fn severity(&self) -> log::Level {
        match self {
            Self::InvalidSlot(_) | Self::InvalidClick { .. } => log::Level::Warn,
            Self::MissingInputs => log::Level::Debug,
        }
    }
}

impl ChemistryError for RecipeLoadError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}

impl ChemistryError for ConfigError {
    fn severity(&self) -> log::Level {
        match self {
            Self::Read { .. } | Self::Parse { .. } => log::Level::Error,
            Self::Invalid(_) => log::Level::Warn,
        }
    }
}
