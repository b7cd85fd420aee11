use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathFindError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("target is not a valid JSON literal")]
    Target(#[source] serde_json::Error),
}
