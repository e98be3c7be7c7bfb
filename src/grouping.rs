use super::*;

const IN_STOCK: &str = "in stock";

/// Variants sharing one group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Group {
  pub(crate) in_stock: usize,
  pub(crate) key: String,
  pub(crate) members: Vec<NodeId>,
}

impl Group {
  fn new(key: String) -> Self {
    Self {
      in_stock: 0,
      key,
      members: Vec::new(),
    }
  }

  pub(crate) fn size(&self, counting: CountingPolicy) -> usize {
    match counting {
      CountingPolicy::AllMembers => self.members.len(),
      CountingPolicy::InStock => self.in_stock,
    }
  }
}

/// Items of a document partitioned by group key.
#[derive(Debug, Clone, Default)]
pub(crate) struct Grouping {
  /// Groups in the order their first member appears.
  pub(crate) groups: Vec<Group>,
  pub(crate) items_found: usize,
  /// Items with neither a group id nor an id.
  pub(crate) keyless: Vec<NodeId>,
}

impl Grouping {
  pub(crate) fn collect(document: &Document, options: &FilterOptions) -> Self {
    let mut grouping = Self::default();

    let mut positions = HashMap::new();

    for id in document.items(&options.item_tag) {
      let Some(item) = document.node(id) else {
        continue;
      };

      grouping.items_found += 1;

      let Some(key) = resolve_text(item, &options.group_id_tags)
        .or_else(|| resolve_text(item, &options.id_tags))
      else {
        grouping.keyless.push(id);
        continue;
      };

      let position = match positions.get(&key) {
        Some(&position) => position,
        None => {
          grouping.groups.push(Group::new(key.clone()));
          positions.insert(key, grouping.groups.len() - 1);
          grouping.groups.len() - 1
        }
      };

      let group = &mut grouping.groups[position];

      group.members.push(id);

      if is_in_stock(item, options) {
        group.in_stock += 1;
      }
    }

    grouping
  }

  #[cfg(test)]
  pub(crate) fn group(&self, key: &str) -> Option<&Group> {
    self.groups.iter().find(|group| group.key == key)
  }
}

fn is_in_stock(item: NodeRef<'_, XmlNode>, options: &FilterOptions) -> bool {
  resolve_text(item, &options.availability_tags)
    .is_some_and(|availability| availability.to_lowercase().contains(IN_STOCK))
}
