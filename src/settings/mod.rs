//! Global defaults and the files they are read from.

mod defaults;
mod error;
mod load;

pub use defaults::{ModeDefaults, Settings};
pub use error::SettingsError;
pub use load::{load_lang, load_settings};
