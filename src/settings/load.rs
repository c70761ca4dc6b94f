use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use super::{Settings, SettingsError};
use crate::lang::Lang;

/// Reads global defaults from a TOML file and validates them.
///
/// Keys the file leaves out keep their [`Settings::default`] values.
///
/// ```no_run
/// let settings = beacon_params::settings::load_settings("config/settings.toml")?;
/// # Ok::<(), beacon_params::SettingsError>(())
/// ```
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    let settings: Settings = read_toml(path.as_ref())?;
    settings.validate()?;
    info!(
        path = %path.as_ref().display(),
        game_mode = %settings.game_mode,
        teams = settings.teams,
        "loaded game settings"
    );
    Ok(settings)
}

/// Reads message templates from a TOML file.
///
/// Templates the file leaves out keep their [`Lang::default`] text.
pub fn load_lang(path: impl AsRef<Path>) -> Result<Lang, SettingsError> {
    read_toml(path.as_ref())
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, SettingsError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{GameMode, Goal};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_partial_settings() {
        let file = toml_file(
            r#"
            game_mode = "minigame"
            teams = 6

            [minigame]
            countdown = 120
            "#,
        );

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.game_mode, GameMode::Minigame);
        assert_eq!(settings.teams, 6);
        assert_eq!(settings.minigame.countdown, 120);
        assert_eq!(settings.minigame.goal, Goal::Beacons);
        assert_eq!(settings.size, Settings::default().size);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_settings("/nonexistent/settings.toml");
        assert!(matches!(
            result,
            Err(SettingsError::Read { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_load_rejects_invalid_default() {
        let file = toml_file("teams = 1\n");
        let result = load_settings(file.path());
        assert!(matches!(result, Err(SettingsError::InvalidDefault { .. })));
    }

    #[test]
    fn test_load_bad_game_mode() {
        let file = toml_file("game_mode = \"solo\"\n");
        let result = load_settings(file.path());
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_load_lang() {
        let file = toml_file("malformed_pair = \"Use key:value\"\n");
        let lang = load_lang(file.path()).unwrap();

        assert_eq!(lang.malformed_pair, "Use key:value");
        assert_eq!(lang.unknown_parameter, Lang::default().unknown_parameter);
    }
}
