use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("unknown selection mode '{0}' (expected rectangle, polygon or lasso)")]
    UnknownSelectionMode(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
