//! Game parameter sets and the token parser that builds them.

mod error;
mod parser;
mod set;
mod types;

pub use error::{ParamError, ParamErrors};
pub use parser::ParamParser;
pub use set::{ParamSet, ResolvedParams};
pub use types::{GameMode, Goal};
