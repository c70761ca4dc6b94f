use serde::{Deserialize, Serialize};

use super::SettingsError;
use crate::params::{GameMode, Goal};

/// Global defaults used when a parameter set leaves a field unset.
///
/// Deserializes from TOML shaped like:
///
/// ```toml
/// game_mode = "strategy"
/// size = 2000
/// teams = 2
/// distribution = 0.03
///
/// [strategy]
/// goal = "area"
/// goal_value = 0
/// countdown = 0
/// score_types = ["area", "beacons", "links", "triangles"]
///
/// [minigame]
/// goal = "beacons"
/// countdown = 600
/// ```
///
/// Every key is optional. A missing key keeps its value from
/// [`Settings::default`], and inside `[strategy]` and `[minigame]` it keeps
/// that mode's own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingsOverrides")]
pub struct Settings {
    pub game_mode: GameMode,
    pub size: i64,
    pub teams: u8,
    pub distribution: f64,
    pub strategy: ModeDefaults,
    pub minigame: ModeDefaults,
}

/// Defaults that differ between strategy and minigame games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeDefaults {
    pub goal: Goal,
    pub goal_value: u64,
    pub countdown: i64,
    pub score_types: Vec<Goal>,
}

/// The keys a settings file actually sets.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsOverrides {
    game_mode: Option<GameMode>,
    size: Option<i64>,
    teams: Option<u8>,
    distribution: Option<f64>,
    #[serde(default)]
    strategy: ModeOverrides,
    #[serde(default)]
    minigame: ModeOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModeOverrides {
    goal: Option<Goal>,
    goal_value: Option<u64>,
    countdown: Option<i64>,
    score_types: Option<Vec<Goal>>,
}

impl ModeOverrides {
    fn apply(self, base: ModeDefaults) -> ModeDefaults {
        ModeDefaults {
            goal: self.goal.unwrap_or(base.goal),
            goal_value: self.goal_value.unwrap_or(base.goal_value),
            countdown: self.countdown.unwrap_or(base.countdown),
            score_types: self.score_types.unwrap_or(base.score_types),
        }
    }
}

impl From<SettingsOverrides> for Settings {
    fn from(overrides: SettingsOverrides) -> Self {
        let base = Settings::default();
        Self {
            game_mode: overrides.game_mode.unwrap_or(base.game_mode),
            size: overrides.size.unwrap_or(base.size),
            teams: overrides.teams.unwrap_or(base.teams),
            distribution: overrides.distribution.unwrap_or(base.distribution),
            strategy: overrides.strategy.apply(base.strategy),
            minigame: overrides.minigame.apply(base.minigame),
        }
    }
}

impl ModeDefaults {
    pub fn strategy() -> Self {
        Self {
            goal: Goal::Area,
            goal_value: 0,
            countdown: 0,
            score_types: vec![Goal::Area, Goal::Beacons, Goal::Links, Goal::Triangles],
        }
    }

    pub fn minigame() -> Self {
        Self {
            goal: Goal::Beacons,
            goal_value: 0,
            countdown: 600,
            score_types: vec![Goal::Beacons, Goal::Links, Goal::Triangles],
        }
    }

    fn validate(&self, section: &str) -> Result<(), SettingsError> {
        if self.countdown < 0 {
            return Err(SettingsError::InvalidDefault {
                field: format!("{}.countdown", section),
                reason: "must be zero or greater".into(),
            });
        }
        if self.score_types.is_empty() {
            return Err(SettingsError::InvalidDefault {
                field: format!("{}.score_types", section),
                reason: "must list at least one goal".into(),
            });
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_mode: GameMode::Strategy,
            size: 2000,
            teams: 2,
            distribution: 0.03,
            strategy: ModeDefaults::strategy(),
            minigame: ModeDefaults::minigame(),
        }
    }
}

impl Settings {
    /// Selects the defaults for `mode`.
    pub fn for_mode(&self, mode: GameMode) -> &ModeDefaults {
        match mode {
            GameMode::Strategy => &self.strategy,
            GameMode::Minigame => &self.minigame,
        }
    }

    /// Checks the defaults against the domains the token parser enforces.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.size <= 0 {
            return Err(SettingsError::InvalidDefault {
                field: "size".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(2..=14).contains(&self.teams) {
            return Err(SettingsError::InvalidDefault {
                field: "teams".into(),
                reason: "must be between 2 and 14".into(),
            });
        }
        if !(0.01..=0.99).contains(&self.distribution) {
            return Err(SettingsError::InvalidDefault {
                field: "distribution".into(),
                reason: "must be between 0.01 and 0.99".into(),
            });
        }
        self.strategy.validate("strategy")?;
        self.minigame.validate("minigame")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_for_mode_selects_section() {
        let settings = Settings::default();
        assert_eq!(settings.for_mode(GameMode::Strategy).goal, Goal::Area);
        assert_eq!(settings.for_mode(GameMode::Minigame).goal, Goal::Beacons);
        assert_eq!(settings.for_mode(GameMode::Minigame).countdown, 600);
    }

    #[test]
    fn test_partial_section_keeps_mode_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            teams = 4

            [minigame]
            goal = "links"
            score_types = ["links"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.teams, 4);
        assert_eq!(settings.size, 2000);
        assert_eq!(settings.minigame.goal, Goal::Links);
        assert_eq!(settings.minigame.countdown, 600);
        assert_eq!(settings.strategy, ModeDefaults::strategy());
    }

    #[test]
    fn test_section_with_only_countdown() {
        let settings: Settings = toml::from_str("[minigame]\ncountdown = 300\n").unwrap();

        assert_eq!(settings.minigame.countdown, 300);
        assert_eq!(settings.minigame.goal, Goal::Beacons);
        assert_eq!(settings.minigame.score_types, ModeDefaults::minigame().score_types);
    }

    #[test]
    fn test_documented_layout_parses() {
        let settings: Settings = toml::from_str(
            r#"
            game_mode = "strategy"
            size = 2000
            teams = 2
            distribution = 0.03

            [strategy]
            goal = "area"
            goal_value = 0
            countdown = 0
            score_types = ["area", "beacons", "links", "triangles"]

            [minigame]
            goal = "beacons"
            countdown = 600
            "#,
        )
        .unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = toml::from_str::<Settings>("[minigame]\ncountdwn = 300\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_defaults_read_back() {
        let text = toml::to_string(&Settings::default()).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, Settings::default());
    }

    #[test]
    fn test_validate_rejects_team_count() {
        let settings = Settings {
            teams: 15,
            ..Settings::default()
        };
        let result = settings.validate();
        assert!(
            matches!(result, Err(SettingsError::InvalidDefault { ref field, .. }) if field == "teams")
        );
    }

    #[test]
    fn test_validate_rejects_empty_score_types() {
        let mut settings = Settings::default();
        settings.minigame.score_types.clear();
        let result = settings.validate();
        assert!(
            matches!(result, Err(SettingsError::InvalidDefault { ref field, .. }) if field == "minigame.score_types")
        );
    }
}
