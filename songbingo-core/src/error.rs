use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    // Data integrity errors
    #[error("Unknown song id {id}: no song with this id exists in the songbook")]
    InvalidSongId { id: String },

    #[error("Duplicate song id {id} in songbook: song ids must be unique")]
    DuplicateSongId { id: String },

    // Songbook errors
    #[error("Failed to parse songbook: {0}")]
    SongbookParseError(#[from] serde_json::Error),

    // Configuration errors
    #[error("Failed to parse config file: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
