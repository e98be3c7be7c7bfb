use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to download feed from `{url}`: {source}")]
  Fetch {
    url: String,
    #[source]
    source: Box<ureq::Error>,
  },
  #[error("minimum size threshold must be at least 1")]
  InvalidThreshold,
  #[error("malformed feed: {0}")]
  MalformedFeed(String),
  #[error("failed to parse feed: {source}")]
  Parse {
    #[from]
    source: quick_xml::Error,
  },
  #[error("failed to read feed body from `{url}`: {source}")]
  ReadBody {
    url: String,
    #[source]
    source: io::Error,
  },
  #[error("failed to serialize feed: {0}")]
  Serialize(String),
  #[error("failed to write feed to `{}`: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl Error {
  /// Process exit status for a run that failed with this error.
  #[must_use]
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::Fetch { .. } | Self::ReadBody { .. } => 2,
      Self::MalformedFeed(_) | Self::Parse { .. } => 3,
      Self::Serialize(_) | Self::Write { .. } => 4,
      Self::InvalidThreshold => 64,
    }
  }
}
