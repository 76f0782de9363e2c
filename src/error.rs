use std::path::PathBuf;

/// Errors that can occur when describing a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("run length must be at least 2, got {0}")]
    RunTooShort(usize),

    #[error("run length {run_length} does not fit on a {size}x{size} grid")]
    RunExceedsGrid { size: usize, run_length: usize },

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("board is {actual}x{actual} but the grid is {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },

    #[error("both players own a complete line")]
    BothPlayersWin,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("unknown game mode '{0}' (expected 'single' or 'two')")]
    UnknownMode(String),
}
