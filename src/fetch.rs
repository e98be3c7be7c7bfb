use super::*;

const USER_AGENT: &str =
  "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const HEADERS: [(&str, &str); 3] = [
  ("Accept", "text/xml,application/xml;q=0.9,*/*;q=0.8"),
  ("Accept-Language", "cs-CZ,cs;q=0.9,en;q=0.8"),
  ("Cache-Control", "no-cache"),
];

/// Source of raw feed bytes.
pub trait Fetch {
  fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Downloads feeds with a single blocking GET, without timeout or retry.
pub struct HttpFetcher {
  agent: ureq::Agent,
}

impl Default for HttpFetcher {
  fn default() -> Self {
    Self::new()
  }
}

impl HttpFetcher {
  #[must_use]
  pub fn new() -> Self {
    Self {
      agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
    }
  }
}

impl Fetch for HttpFetcher {
  fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
    let request = HEADERS
      .iter()
      .fold(self.agent.request_url("GET", url), |request, (name, value)| {
        request.set(name, value)
      });

    let response = request.call().map_err(|source| Error::Fetch {
      url: url.to_string(),
      source: Box::new(source),
    })?;

    let mut body = Vec::new();

    response
      .into_reader()
      .read_to_end(&mut body)
      .map_err(|source| Error::ReadBody {
        url: url.to_string(),
        source,
      })?;

    Ok(body)
  }
}
