use labcore::MazeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Terminal error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("Cannot read settings; {0}")]
    SettingsRead(#[from] ron::error::SpannedError),
    #[error("Cannot set logger; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("No preference directory available")]
    NoConfigDir,
    #[error("Quit")]
    Quit,
    #[error("NewGame")]
    NewGame,
}
