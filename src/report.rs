use super::*;

/// Counts gathered while filtering a feed.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct FilterReport {
  pub items_found: usize,
  pub keyless_items: usize,
  pub kept_groups: usize,
  pub removed_groups: usize,
  pub removed_items: usize,
}

impl Display for FilterReport {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} items, kept {} groups, removed {} groups ({} items)",
      self.items_found,
      self.kept_groups,
      self.removed_groups,
      self.removed_items
    )
  }
}
