//! Token parser for `key:value` game parameters.

use tracing::debug;

use super::error::{ParamError, ParamErrors};
use super::set::ParamSet;
use super::types::{GameMode, Goal};
use crate::lang::Messages;

const GOAL_NAMES: &str = "area, beacons, triangles, links";
const TEAMS_BOUND: &str = "between 2 and 14";
const DISTRIBUTION_BOUND: &str = "between 0.01 and 0.99";

/// Builds a [`ParamSet`] from `key:value` tokens.
///
/// Recognized keys (case-insensitive): `gamemode`, `size`, `teams`, `goal`,
/// `goalvalue`, `countdown`, `scoretypes`, `distribution`. Tokens are applied
/// in order, so a later valid token for a key replaces an earlier one.
///
/// Bad tokens do not stop the pass. Every error is collected and the parse
/// fails once at the end, so the caller sees all problems together and never
/// gets a partially applied set.
#[derive(Clone, Copy)]
pub struct ParamParser<'a> {
    messages: &'a dyn Messages,
}

/// Result of one pass before the success/failure decision.
#[derive(Debug, Default)]
pub(crate) struct Draft {
    pub params: ParamSet,
    pub errors: Vec<ParamError>,
}

impl<'a> ParamParser<'a> {
    pub fn new(messages: &'a dyn Messages) -> Self {
        Self { messages }
    }

    /// Parses `tokens`, returning every collected error on failure.
    ///
    /// An empty token list succeeds with an empty set.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParamSet, ParamErrors> {
        let draft = self.run(tokens);
        match ParamErrors::from_vec(draft.errors) {
            Some(errors) => {
                debug!(errors = errors.len(), "rejected game parameters");
                Err(errors)
            }
            None => Ok(draft.params),
        }
    }

    pub(crate) fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Draft {
        let mut draft = Draft::default();
        for token in tokens {
            self.apply(token.as_ref(), &mut draft);
        }
        draft
    }

    fn apply(&self, token: &str, draft: &mut Draft) {
        let (key, value) = match token.split_once(':') {
            Some((key, value)) if !value.is_empty() => (key, value),
            _ => {
                debug!(token, "malformed parameter");
                draft.errors.push(ParamError::MalformedPair {
                    token: token.to_string(),
                    message: self.messages.malformed_pair(token),
                });
                return;
            }
        };

        let params = &mut draft.params;
        let result = match key.to_lowercase().as_str() {
            "gamemode" => parse_game_mode(value).map(|mode| params.set_game_mode(mode)),
            "size" => parse_int("size", value).map(|size| params.set_size(size)),
            "teams" => parse_teams(value).map(|teams| params.set_teams(teams)),
            "goal" => parse_goal(value).map(|goal| params.set_goal(goal)),
            "goalvalue" => parse_goal_value(value).map(|v| params.set_goal_value(v)),
            "countdown" => parse_int("countdown", value).map(|secs| params.set_countdown(secs)),
            "scoretypes" => {
                let (types, errors) = parse_score_types(value);
                if !types.is_empty() {
                    params.set_score_types(types);
                }
                draft.errors.extend(errors);
                Ok(())
            }
            "distribution" => {
                // Out-of-range values are stored as well as reported.
                let (stored, result) = parse_distribution(value);
                if let Some(distribution) = stored {
                    params.set_distribution(distribution);
                }
                result
            }
            _ => Err(ParamError::UnknownParameter {
                name: key.to_string(),
                message: self.messages.unknown_parameter(key),
            }),
        };

        match result {
            Ok(()) => debug!(key, value, "applied parameter"),
            Err(error) => {
                debug!(key, value, %error, "rejected parameter");
                draft.errors.push(error);
            }
        }
    }
}

fn parse_game_mode(value: &str) -> Result<GameMode, ParamError> {
    GameMode::from_token(value).ok_or_else(|| ParamError::InvalidEnumValue {
        key: "gamemode",
        value: value.to_string(),
        expected: "strategy, minigame",
    })
}

fn parse_goal(value: &str) -> Result<Goal, ParamError> {
    Goal::from_token(value).ok_or_else(|| ParamError::InvalidEnumValue {
        key: "goal",
        value: value.to_string(),
        expected: GOAL_NAMES,
    })
}

fn parse_int(key: &'static str, value: &str) -> Result<i64, ParamError> {
    value.parse().map_err(|_| ParamError::NotANumber {
        key,
        value: value.to_string(),
    })
}

fn parse_teams(value: &str) -> Result<u8, ParamError> {
    let teams = parse_int("teams", value)?;
    match u8::try_from(teams) {
        Ok(teams) if (2..=14).contains(&teams) => Ok(teams),
        _ => Err(ParamError::OutOfRange {
            key: "teams",
            value: teams.to_string(),
            bound: TEAMS_BOUND,
        }),
    }
}

fn parse_goal_value(value: &str) -> Result<u64, ParamError> {
    let goal_value = parse_int("goalvalue", value)?;
    u64::try_from(goal_value).map_err(|_| ParamError::OutOfRange {
        key: "goalvalue",
        value: goal_value.to_string(),
        bound: "zero or greater",
    })
}

/// Returns the valid goals in order and one error per rejected entry.
fn parse_score_types(value: &str) -> (Vec<Goal>, Vec<ParamError>) {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let names: Vec<&str> = stripped.split('-').collect();
    if names.iter().all(|name| name.is_empty()) {
        return (Vec::new(), vec![ParamError::EmptyList { key: "scoretypes" }]);
    }

    let mut types = Vec::with_capacity(names.len());
    let mut errors = Vec::new();
    for name in names {
        match Goal::from_token(name) {
            Some(goal) => types.push(goal),
            None => errors.push(ParamError::InvalidEnumValue {
                key: "scoretypes",
                value: name.to_string(),
                expected: GOAL_NAMES,
            }),
        }
    }
    (types, errors)
}

/// Returns the value to store, if it parsed at all, and the validation result.
fn parse_distribution(value: &str) -> (Option<f64>, Result<(), ParamError>) {
    let distribution = match value.parse::<f64>() {
        Ok(d) if d.is_finite() => d,
        _ => {
            return (
                None,
                Err(ParamError::NotANumber {
                    key: "distribution",
                    value: value.to_string(),
                }),
            )
        }
    };

    if distribution == 0.0 || !(0.01..=0.99).contains(&distribution) {
        let error = ParamError::OutOfRange {
            key: "distribution",
            value: distribution.to_string(),
            bound: DISTRIBUTION_BOUND,
        };
        return (Some(distribution), Err(error));
    }
    (Some(distribution), Ok(()))
}
