use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  feed_filter::{
    CountingPolicy, Error, FeedWriter, FilterOptions, HttpFetcher, KeylessItems,
    DEFAULT_MIN_SIZES,
  },
  log::info,
  std::{fs, path::PathBuf, process},
  url::Url,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .format_timestamp(None)
  .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(error.downcast_ref::<Error>().map_or(1, Error::exit_code));
  }
}
