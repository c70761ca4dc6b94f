//! Explicit context for parsing and resolving game parameters.

use crate::lang::Lang;
use crate::params::{ParamParser, ParamSet, ResolvedParams};
use crate::settings::Settings;
use crate::Error;

/// Global defaults and message templates shared by every game instance.
///
/// Pass a reference wherever parameters are parsed or resolved; nothing in
/// this crate reads settings from global state.
///
/// ## Example
///
/// ```no_run
/// use beacon_params::{load_lang, load_settings, ParamContext};
///
/// let ctx = ParamContext::builder()
///     .with_settings(load_settings("config/settings.toml")?)
///     .with_lang(load_lang("config/lang.toml")?)
///     .build()?;
///
/// let params = ctx.parse(&["teams:4", "goal:links"])?;
/// let resolved = ctx.resolve(&params);
/// # Ok::<(), beacon_params::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParamContext {
    settings: Settings,
    lang: Lang,
}

impl ParamContext {
    pub fn builder() -> ParamContextBuilder {
        ParamContextBuilder::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    /// Parses `key:value` tokens using this context's messages.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParamSet, Error> {
        Ok(ParamParser::new(&self.lang).parse(tokens)?)
    }

    /// Applies this context's defaults to every unset field of `params`.
    pub fn resolve(&self, params: &ParamSet) -> ResolvedParams {
        params.resolve(&self.settings)
    }
}

/// Builder for constructing a [`ParamContext`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ParamContextBuilder {
    settings: Option<Settings>,
    lang: Option<Lang>,
}

impl ParamContextBuilder {
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Builds the context. Without a [`Lang`], the default templates are used.
    pub fn build(self) -> Result<ParamContext, Error> {
        Ok(ParamContext {
            settings: self.settings.ok_or(Error::MissingSettings)?,
            lang: self.lang.unwrap_or_default(),
        })
    }
}
