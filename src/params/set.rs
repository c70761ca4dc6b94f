//! Per-game parameter overrides and their default resolution.

use serde::{Deserialize, Serialize};

use super::parser::ParamParser;
use super::types::{GameMode, Goal};
use super::ParamErrors;
use crate::lang::Messages;
use crate::settings::Settings;

/// Parameters for a single game instance.
///
/// Every field is optional. Getters take the global [`Settings`] and fall back
/// to them when a field is unset; `goal`, `goal_value`, `countdown` and
/// `score_types` pick the strategy or minigame defaults according to the
/// resolved game mode, so overriding only the mode moves all four.
///
/// Setters store their argument as-is. Validation happens in [`ParamParser`].
///
/// ## Example
///
/// ```
/// use beacon_params::{GameMode, Lang, ParamSet, Settings};
///
/// let settings = Settings::default();
/// let params = ParamSet::parse(&["gamemode:minigame", "teams:3"], &Lang::default())?;
///
/// assert_eq!(params.game_mode(&settings), GameMode::Minigame);
/// assert_eq!(params.teams(&settings), 3);
/// assert_eq!(params.goal(&settings), settings.minigame.goal);
/// # Ok::<(), beacon_params::ParamErrors>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    game_mode: Option<GameMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    teams: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal: Option<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal_value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    countdown: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    score_types: Option<Vec<Goal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distribution: Option<f64>,
}

/// Every parameter with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParams {
    pub game_mode: GameMode,
    pub size: i64,
    pub teams: u8,
    pub goal: Goal,
    pub goal_value: u64,
    pub countdown: i64,
    pub score_types: Vec<Goal>,
    pub distribution: f64,
}

impl ParamSet {
    /// Creates a parameter set with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `key:value` tokens. See [`ParamParser::parse`].
    pub fn parse<S: AsRef<str>>(tokens: &[S], messages: &dyn Messages) -> Result<Self, ParamErrors> {
        ParamParser::new(messages).parse(tokens)
    }

    /// Returns true when no field has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn game_mode(&self, settings: &Settings) -> GameMode {
        self.game_mode.unwrap_or(settings.game_mode)
    }

    pub fn size(&self, settings: &Settings) -> i64 {
        self.size.unwrap_or(settings.size)
    }

    pub fn teams(&self, settings: &Settings) -> u8 {
        self.teams.unwrap_or(settings.teams)
    }

    pub fn goal(&self, settings: &Settings) -> Goal {
        self.goal
            .unwrap_or_else(|| settings.for_mode(self.game_mode(settings)).goal)
    }

    pub fn goal_value(&self, settings: &Settings) -> u64 {
        self.goal_value
            .unwrap_or_else(|| settings.for_mode(self.game_mode(settings)).goal_value)
    }

    /// Countdown in seconds; zero means unlimited.
    pub fn countdown(&self, settings: &Settings) -> i64 {
        self.countdown
            .unwrap_or_else(|| settings.for_mode(self.game_mode(settings)).countdown)
    }

    pub fn score_types<'a>(&'a self, settings: &'a Settings) -> &'a [Goal] {
        match &self.score_types {
            Some(types) => types,
            None => &settings.for_mode(self.game_mode(settings)).score_types,
        }
    }

    pub fn distribution(&self, settings: &Settings) -> f64 {
        self.distribution.unwrap_or(settings.distribution)
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.game_mode = Some(mode);
    }

    pub fn set_size(&mut self, size: i64) {
        self.size = Some(size);
    }

    pub fn set_teams(&mut self, teams: u8) {
        self.teams = Some(teams);
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = Some(goal);
    }

    pub fn set_goal_value(&mut self, goal_value: u64) {
        self.goal_value = Some(goal_value);
    }

    pub fn set_countdown(&mut self, seconds: i64) {
        self.countdown = Some(seconds);
    }

    pub fn set_score_types(&mut self, score_types: Vec<Goal>) {
        self.score_types = Some(score_types);
    }

    pub fn set_distribution(&mut self, distribution: f64) {
        self.distribution = Some(distribution);
    }

    /// Resolves every field against `settings`.
    pub fn resolve(&self, settings: &Settings) -> ResolvedParams {
        ResolvedParams {
            game_mode: self.game_mode(settings),
            size: self.size(settings),
            teams: self.teams(settings),
            goal: self.goal(settings),
            goal_value: self.goal_value(settings),
            countdown: self.countdown(settings),
            score_types: self.score_types(settings).to_vec(),
            distribution: self.distribution(settings),
        }
    }

    /// Renders the set fields as `key:value` tokens.
    ///
    /// An empty score type list has no token form and is left out. Apart from
    /// that, parsing the result gives back an equal set unless the goal is
    /// [`Goal::Time`] or the distribution is outside the accepted range.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if let Some(mode) = self.game_mode {
            tokens.push(format!("gamemode:{}", mode));
        }
        if let Some(size) = self.size {
            tokens.push(format!("size:{}", size));
        }
        if let Some(teams) = self.teams {
            tokens.push(format!("teams:{}", teams));
        }
        if let Some(goal) = self.goal {
            tokens.push(format!("goal:{}", goal));
        }
        if let Some(goal_value) = self.goal_value {
            tokens.push(format!("goalvalue:{}", goal_value));
        }
        if let Some(countdown) = self.countdown {
            tokens.push(format!("countdown:{}", countdown));
        }
        if let Some(types) = self.score_types.as_ref().filter(|t| !t.is_empty()) {
            let joined: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
            tokens.push(format!("scoretypes:{}", joined.join("-")));
        }
        if let Some(distribution) = self.distribution {
            tokens.push(format!("distribution:{}", distribution));
        }
        tokens
    }
}
