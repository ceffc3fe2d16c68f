use std::path::PathBuf;

/// Errors raised while loading posting documents
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid JSON posting: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid YAML posting: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("{} contains no postings", path.display())]
  Empty { path: PathBuf },
}
