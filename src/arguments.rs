use super::*;

#[derive(Parser)]
#[command(name = "feed-filter")]
#[command(
  about = "Remove products with too few sizes in stock from an XML feed",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    default_value_t = CountingPolicy::InStock,
    help = "What a group's size counts: `in-stock` or `all-members`"
  )]
  counting: CountingPolicy,
  #[arg(
    long,
    default_value_t = KeylessItems::Keep,
    help = "Items lacking both a group id and an id: `keep` or `remove`"
  )]
  keyless: KeylessItems,
  #[arg(
    long,
    default_value_t = DEFAULT_MIN_SIZES,
    help = "Minimum number of sizes a product group needs to stay in the feed"
  )]
  min_sizes: usize,
  #[arg(
    long,
    short,
    value_name = "FILE",
    default_value = "products_filtered.xml",
    help = "Where to write the filtered feed"
  )]
  output: PathBuf,
  #[arg(long, value_name = "FILE", help = "Also write the run report as JSON")]
  report: Option<PathBuf>,
  #[arg(long, env = "FEED_URL", help = "URL of the product feed to download")]
  url: Url,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let options = FilterOptions::builder()
      .counting(self.counting)
      .keyless(self.keyless)
      .min_sizes(self.min_sizes)
      .build();

    let report = feed_filter::run(
      &HttpFetcher::new(),
      &self.url,
      &FeedWriter::new(&self.output),
      options,
    )?;

    info!("{report}");

    if let Some(path) = self.report {
      fs::write(&path, serde_json::to_string_pretty(&report)?)
        .with_context(|| {
          format!("failed to write report to `{}`", path.display())
        })?;
    }

    Ok(())
  }
}
