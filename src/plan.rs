use super::*;

/// Outcome of applying the size threshold to every group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FilterPlan {
  pub(crate) dropped_groups: usize,
  pub(crate) kept_groups: usize,
  /// Every member of every dropped group, plus keyless items when those are
  /// being removed.
  pub(crate) removals: Vec<NodeId>,
}

impl FilterPlan {
  pub(crate) fn new(grouping: &Grouping, options: &FilterOptions) -> Self {
    let mut plan = Self::default();

    for group in &grouping.groups {
      let size = group.size(options.counting);

      if size < options.min_sizes {
        debug!(
          "dropping group `{}` ({size} of {} below {})",
          group.key,
          group.members.len(),
          options.min_sizes
        );

        plan.dropped_groups += 1;
        plan.removals.extend(group.members.iter().copied());
      } else {
        plan.kept_groups += 1;
      }
    }

    if options.keyless == KeylessItems::Remove {
      plan.removals.extend(grouping.keyless.iter().copied());
    }

    plan
  }
}
