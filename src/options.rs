use super::*;

pub const DEFAULT_MIN_SIZES: usize = 3;

/// Namespace of Google Merchant product attributes (`g:` fields).
pub const GOOGLE_NAMESPACE: &str = "http://base.google.com/ns/1.0";

/// What a group's size is measured by before comparing it with the
/// threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountingPolicy {
  /// Every member, in stock or not.
  AllMembers,
  /// Members whose availability reads "in stock".
  #[default]
  InStock,
}

impl Display for CountingPolicy {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::AllMembers => "all-members",
      Self::InStock => "in-stock",
    })
  }
}

impl FromStr for CountingPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "all-members" => Ok(Self::AllMembers),
      "in-stock" => Ok(Self::InStock),
      _ => Err(format!(
        "unknown counting policy `{s}` (expected `in-stock` or `all-members`)"
      )),
    }
  }
}

/// Treatment of items with neither a group id nor an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeylessItems {
  #[default]
  Keep,
  Remove,
}

impl Display for KeylessItems {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Keep => "keep",
      Self::Remove => "remove",
    })
  }
}

impl FromStr for KeylessItems {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "keep" => Ok(Self::Keep),
      "remove" => Ok(Self::Remove),
      _ => Err(format!(
        "unknown keyless policy `{s}` (expected `keep` or `remove`)"
      )),
    }
  }
}

#[derive(Debug, Clone)]
pub struct FilterOptions {
  pub availability_tags: Vec<TagName>,
  pub channel_tag: TagName,
  pub counting: CountingPolicy,
  pub group_id_tags: Vec<TagName>,
  pub id_tags: Vec<TagName>,
  pub item_tag: TagName,
  pub keyless: KeylessItems,
  pub min_sizes: usize,
}

impl Default for FilterOptions {
  fn default() -> Self {
    Self {
      availability_tags: merchant_field("availability"),
      channel_tag: TagName::from("channel"),
      counting: CountingPolicy::default(),
      group_id_tags: merchant_field("item_group_id"),
      id_tags: merchant_field("id"),
      item_tag: TagName::from("item"),
      keyless: KeylessItems::default(),
      min_sizes: DEFAULT_MIN_SIZES,
    }
  }
}

impl FilterOptions {
  #[must_use]
  pub fn builder() -> FilterOptionsBuilder {
    FilterOptionsBuilder::default()
  }

  pub(crate) fn validate(&self) -> Result {
    if self.min_sizes == 0 {
      return Err(Error::InvalidThreshold);
    }

    Ok(())
  }
}

/// Namespaced, prefixed and bare spellings of a merchant field, in lookup
/// order.
fn merchant_field(name: &str) -> Vec<TagName> {
  vec![
    TagName::Expanded {
      local_name: name.to_string(),
      namespace: GOOGLE_NAMESPACE.to_string(),
    },
    TagName::Prefixed(format!("g:{name}")),
    TagName::Local(name.to_string()),
  ]
}

fn tag_names<I, S>(tags: I) -> Vec<TagName>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  tags
    .into_iter()
    .map(|tag| TagName::from(tag.as_ref()))
    .collect()
}

#[derive(Default)]
pub struct FilterOptionsBuilder {
  inner: FilterOptions,
}

impl FilterOptionsBuilder {
  #[must_use]
  pub fn availability_tags<I, S>(self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      inner: FilterOptions {
        availability_tags: tag_names(tags),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> FilterOptions {
    self.inner
  }

  #[must_use]
  pub fn channel_tag(self, tag: &str) -> Self {
    Self {
      inner: FilterOptions {
        channel_tag: TagName::from(tag),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn counting(self, counting: CountingPolicy) -> Self {
    Self {
      inner: FilterOptions {
        counting,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn group_id_tags<I, S>(self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      inner: FilterOptions {
        group_id_tags: tag_names(tags),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn id_tags<I, S>(self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      inner: FilterOptions {
        id_tags: tag_names(tags),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn item_tag(self, tag: &str) -> Self {
    Self {
      inner: FilterOptions {
        item_tag: TagName::from(tag),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn keyless(self, keyless: KeylessItems) -> Self {
    Self {
      inner: FilterOptions {
        keyless,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn min_sizes(self, min_sizes: usize) -> Self {
    Self {
      inner: FilterOptions {
        min_sizes,
        ..self.inner
      },
    }
  }
}
