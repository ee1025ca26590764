use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ThreatSearchError {
    #[error("Failed to open database at '{}': {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query '{name}' failed: {source}")]
    Query {
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Unknown query category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ThreatSearchError> = std::result::Result<T, E>;
