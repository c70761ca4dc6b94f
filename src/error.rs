use crate::params::ParamErrors;
use crate::settings::SettingsError;
use thiserror::Error;

/// Top-level error type for the beacon-params library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("invalid game parameters: {0}")]
    Params(#[from] ParamErrors),

    #[error("parameter context requires settings")]
    MissingSettings,
}
