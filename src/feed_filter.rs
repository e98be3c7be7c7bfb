use super::*;

/// A parsed feed that can be filtered in place and serialized back.
pub struct FeedFilter {
  document: Document,
  options: FilterOptions,
}

impl FeedFilter {
  /// Parses `xml` and checks `options`.
  pub fn new(xml: &[u8], options: FilterOptions) -> Result<Self> {
    options.validate()?;

    Ok(Self {
      document: Document::parse(xml)?,
      options,
    })
  }

  /// Removes every item of every group below the size threshold.
  ///
  /// Groups are computed in full before anything is detached.
  pub fn filter(&mut self) -> Result<FilterReport> {
    let context = Context::new(&mut self.document, &self.options);

    Ok(Pipeline::with_default_stages(context).run()?.into_report())
  }

  pub fn to_xml(&self) -> Result<Vec<u8>> {
    self.document.to_xml()
  }
}
