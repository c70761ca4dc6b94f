//! Enumerations shared by parameter sets and settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which flavour of game an instance runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Strategy,
    Minigame,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Strategy, GameMode::Minigame];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Strategy => "strategy",
            GameMode::Minigame => "minigame",
        }
    }

    /// Matches a token value case-insensitively.
    pub fn from_token(token: &str) -> Option<GameMode> {
        Self::ALL
            .into_iter()
            .find(|mode| token.eq_ignore_ascii_case(mode.as_str()))
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A win condition, also used to name the score kinds a game tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Area,
    Beacons,
    Time,
    Triangles,
    Links,
}

impl Goal {
    /// Goals that can be named in a `goal:` or `scoretypes:` token.
    ///
    /// `Time` is only reachable through settings or a setter.
    pub const PARSEABLE: [Goal; 4] = [Goal::Area, Goal::Beacons, Goal::Triangles, Goal::Links];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Area => "area",
            Goal::Beacons => "beacons",
            Goal::Time => "time",
            Goal::Triangles => "triangles",
            Goal::Links => "links",
        }
    }

    /// Matches a token value case-insensitively against [`Goal::PARSEABLE`].
    pub fn from_token(token: &str) -> Option<Goal> {
        Self::PARSEABLE
            .into_iter()
            .find(|goal| token.eq_ignore_ascii_case(goal.as_str()))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
