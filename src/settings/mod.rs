use std::{fs, io, path::PathBuf, time::Duration};

use crossterm::style::{Color, ContentStyle};
use labcore::{algorithms::Algorithm, traversal::MoveMode};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazePreset {
    pub title: String,
    pub rows: i32,
    pub columns: i32,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub normal: Color,
    pub player: Color,
    pub goal: Color,
    pub text: Color,
}

impl ColorScheme {
    fn style(color: Color) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(color),
            ..Default::default()
        }
    }

    pub fn normals(&self) -> ContentStyle {
        Self::style(self.normal)
    }

    pub fn players(&self) -> ContentStyle {
        Self::style(self.player)
    }

    pub fn goals(&self) -> ContentStyle {
        Self::style(self.goal)
    }

    pub fn texts(&self) -> ContentStyle {
        Self::style(self.text)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            normal: Color::White,
            player: Color::White,
            goal: Color::White,
            text: Color::White,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub default_algorithm: Option<Algorithm>,
    #[serde(default)]
    pub animate_generation: Option<bool>,
    #[serde(default)]
    pub step_delay_ms: Option<u64>,
    #[serde(default)]
    pub move_mode: Option<MoveMode>,
    #[serde(default)]
    pub mazes: Option<Vec<MazePreset>>,
}

impl Settings {
    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    pub fn get_default_algorithm(&self) -> Algorithm {
        self.default_algorithm.unwrap_or_default()
    }

    pub fn get_animate_generation(&self) -> bool {
        self.animate_generation.unwrap_or(true)
    }

    pub fn get_step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms.unwrap_or(15))
    }

    pub fn get_move_mode(&self) -> MoveMode {
        self.move_mode.unwrap_or_default()
    }

    pub fn get_mazes(&self) -> Vec<MazePreset> {
        match &self.mazes {
            Some(mazes) if !mazes.is_empty() => mazes.clone(),
            _ => Self::builtin().mazes.unwrap_or_default(),
        }
    }

    /// Index of the preset marked as default, or the first one.
    pub fn default_maze_index(&self) -> usize {
        self.get_mazes()
            .iter()
            .position(|maze| maze.default)
            .unwrap_or(0)
    }

    pub fn default_path() -> Result<PathBuf, GameError> {
        let dir = dirs::preference_dir().ok_or(GameError::NoConfigDir)?;
        Ok(dir.join("labyrinth").join("settings.ron"))
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn parse(text: &str) -> Result<Self, GameError> {
        Ok(Self::options().from_str(text)?)
    }

    /// Settings embedded in the binary.
    pub fn builtin() -> Self {
        Self::parse(DEFAULT_SETTINGS).unwrap_or_default()
    }

    /// Reads settings from `path`, writing the default file there first if it does not exist.
    pub fn load(path: PathBuf) -> Result<Self, GameError> {
        match fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Loading settings from {:?}", path);
                Self::parse(&text)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {:?}", path);
                Self::write_default(&path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites `path` with the default settings file.
    pub fn reset(path: PathBuf) -> Result<Self, GameError> {
        Self::write_default(&path)?;
        Self::parse(DEFAULT_SETTINGS)
    }

    fn write_default(path: &PathBuf) -> Result<(), GameError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses() {
        let settings = Settings::parse(DEFAULT_SETTINGS).unwrap();

        assert_eq!(settings.get_default_algorithm(), Algorithm::FrontierGrowth);
        assert_eq!(settings.get_move_mode(), MoveMode::Single);
        assert!(settings.get_animate_generation());
        assert_eq!(settings.get_color_scheme().player, Color::Green);

        let sizes: Vec<_> = settings.get_mazes().iter().map(|m| m.rows).collect();
        assert_eq!(sizes, vec![5, 10, 15, 20, 30, 50, 70]);
        assert_eq!(settings.default_maze_index(), 1);
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::parse("(move_mode: Corridor)").unwrap();

        assert_eq!(settings.get_move_mode(), MoveMode::Corridor);
        assert_eq!(settings.get_default_algorithm(), Algorithm::FrontierGrowth);
        assert_eq!(settings.get_step_delay(), Duration::from_millis(15));
        assert_eq!(settings.get_mazes().len(), 7);
        assert_eq!(settings.get_color_scheme(), ColorScheme::default());
    }

    #[test]
    fn algorithm_is_read() {
        let settings = Settings::parse("(default_algorithm: DepthFirstSearch)").unwrap();
        assert_eq!(settings.get_default_algorithm(), Algorithm::DepthFirstSearch);
    }

    #[test]
    fn broken_file_is_an_error() {
        assert!(matches!(
            Settings::parse("(move_mode: Sideways)"),
            Err(GameError::SettingsRead(_))
        ));
    }

    #[test]
    fn load_writes_default_file() {
        let dir = std::env::temp_dir().join(format!("labyrinth-settings-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_dir_all(&dir);

        let settings = Settings::load(path.clone()).unwrap();
        assert_eq!(settings, Settings::builtin());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        fs::write(&path, "(step_delay_ms: 0)").unwrap();
        assert_eq!(Settings::load(path.clone()).unwrap().get_step_delay(), Duration::ZERO);

        Settings::reset(path.clone()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_file_is_kept() {
        let dir = std::env::temp_dir().join(format!("labyrinth-broken-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let contents = b"// caf\xe9\n(step_delay_ms: 99, move_mode: Straight)";
        fs::write(&path, contents).unwrap();

        assert!(matches!(Settings::load(path.clone()), Err(GameError::Io(_))));
        assert_eq!(fs::read(&path).unwrap(), contents);

        let _ = fs::remove_dir_all(&dir);
    }
}
