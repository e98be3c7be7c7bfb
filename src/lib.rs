use {
  context::Context,
  document::{Document, Removal},
  ego_tree::{NodeId, NodeRef, Tree},
  grouping::Grouping,
  log::{debug, info, warn},
  node::{Element, XmlNode},
  pipeline::Pipeline,
  plan::FilterPlan,
  quick_xml::{
    events::{
      BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event,
    },
    name::ResolveResult,
    NsReader, Writer,
  },
  serde::{Deserialize, Serialize},
  stage::{GroupItemsStage, PlanRemovalsStage, RemoveItemsStage, Stage},
  std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    io::{self, Read, Write},
    mem,
    path::{Path, PathBuf},
    str::FromStr,
  },
  tag::resolve_text,
};

pub use crate::{
  error::Error,
  feed_filter::FeedFilter,
  fetch::{Fetch, HttpFetcher},
  options::{
    CountingPolicy, FilterOptions, FilterOptionsBuilder, KeylessItems,
    DEFAULT_MIN_SIZES, GOOGLE_NAMESPACE,
  },
  report::FilterReport,
  tag::TagName,
  writer::FeedWriter,
};

pub use url::Url;

mod context;
mod document;
mod error;
mod feed_filter;
mod fetch;
mod grouping;
mod node;
mod options;
mod parser;
mod pipeline;
mod plan;
mod report;
mod serializer;
mod stage;
mod tag;
mod writer;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Fetches the feed at `url`, filters it and writes the result with `writer`.
///
/// The first failure aborts the run; nothing is written unless every earlier
/// step succeeded.
pub fn run(
  fetcher: &impl Fetch,
  url: &Url,
  writer: &FeedWriter,
  options: FilterOptions,
) -> Result<FilterReport> {
  info!("downloading feed from {url}");

  let xml = fetcher.fetch(url)?;

  info!("parsing {} bytes of XML", xml.len());

  let mut filter = FeedFilter::new(&xml, options)?;

  let report = filter.filter()?;

  info!("writing filtered feed to `{}`", writer.path().display());

  writer.write(&filter.to_xml()?)?;

  Ok(report)
}
