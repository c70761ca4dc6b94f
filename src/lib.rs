pub mod context;
mod error;
pub mod lang;
pub mod params;
pub mod settings;

pub use context::ParamContext;
pub use error::Error;
pub use lang::{Lang, Messages};
pub use params::{GameMode, Goal, ParamError, ParamErrors, ParamParser, ParamSet, ResolvedParams};
pub use settings::{load_lang, load_settings, ModeDefaults, Settings, SettingsError};
