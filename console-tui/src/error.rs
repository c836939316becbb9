use thiserror::Error;

use crate::settings::SettingsError;

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Data(#[from] console_lib::Error),
    #[error("invalid keybind '{combo}': {source}")]
    Keybind {
        combo: &'static str,
        #[source]
        source: console_widgets::keybinds::KeybindError,
    },
}
