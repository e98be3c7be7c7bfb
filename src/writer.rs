use super::*;

/// Replaces the output file atomically: bytes go to a temporary file in the
/// same directory which is then renamed over the target.
#[derive(Debug, Clone)]
pub struct FeedWriter {
  path: PathBuf,
}

impl FeedWriter {
  fn error(&self, source: io::Error) -> Error {
    Error::Write {
      path: self.path.clone(),
      source,
    }
  }

  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn write(&self, xml: &[u8]) -> Result {
    let directory = self
      .path
      .parent()
      .filter(|parent| !parent.as_os_str().is_empty())
      .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::NamedTempFile::new_in(directory)
      .map_err(|source| self.error(source))?;

    file.write_all(xml).map_err(|source| self.error(source))?;

    file
      .as_file()
      .sync_all()
      .map_err(|source| self.error(source))?;

    file
      .persist(&self.path)
      .map_err(|error| self.error(error.error))?;

    Ok(())
  }
}
