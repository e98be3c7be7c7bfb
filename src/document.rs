use super::*;

/// How a removal request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
  /// The node was no longer attached to the document.
  Absent,
  /// Detached from the channel element.
  FromChannel,
  /// Detached from a parent other than the channel.
  FromParent,
}

pub(crate) struct Document {
  tree: Tree<XmlNode>,
}

impl Document {
  /// First element below the root element matching `tag`.
  pub(crate) fn channel(&self, tag: &TagName) -> Option<NodeId> {
    self.matching(tag).next()
  }

  fn is_attached(&self, id: NodeId) -> bool {
    let root = self.tree.root().id();

    self.tree.get(id).is_some_and(|node| {
      node.id() == root
        || node.ancestors().any(|ancestor| ancestor.id() == root)
    })
  }

  /// Every element below the root element matching `tag`, in document order.
  pub(crate) fn items(&self, tag: &TagName) -> Vec<NodeId> {
    self.matching(tag).collect()
  }

  fn matching<'a>(
    &'a self,
    tag: &'a TagName,
  ) -> impl Iterator<Item = NodeId> + 'a {
    self
      .root_element()
      .into_iter()
      .flat_map(|root| root.descendants().skip(1))
      .filter(move |node| {
        node
          .value()
          .as_element()
          .is_some_and(|element| tag.matches(element))
      })
      .map(|node| node.id())
  }

  pub(crate) fn node(&self, id: NodeId) -> Option<NodeRef<'_, XmlNode>> {
    self.tree.get(id)
  }

  pub(crate) fn parse(xml: &[u8]) -> Result<Self> {
    Ok(Self {
      tree: parser::parse(xml)?,
    })
  }

  /// Detaches `id` from the document.
  ///
  /// Nodes whose parent is `channel` take the direct path; any other
  /// attached node is detached from wherever it actually sits. Nodes already
  /// detached are left alone.
  pub(crate) fn remove(
    &mut self,
    id: NodeId,
    channel: Option<NodeId>,
  ) -> Removal {
    let Some(parent) = self
      .tree
      .get(id)
      .and_then(|node| node.parent())
      .map(|parent| parent.id())
    else {
      return Removal::Absent;
    };

    let removal = if Some(parent) == channel && self.is_attached(parent) {
      Removal::FromChannel
    } else if self.is_attached(parent) {
      Removal::FromParent
    } else {
      return Removal::Absent;
    };

    if let Some(mut node) = self.tree.get_mut(id) {
      node.detach();
    }

    removal
  }

  pub(crate) fn root_element(&self) -> Option<NodeRef<'_, XmlNode>> {
    self
      .tree
      .root()
      .children()
      .find(|node| matches!(node.value(), XmlNode::Element(_)))
  }

  pub(crate) fn to_xml(&self) -> Result<Vec<u8>> {
    serializer::serialize(&self.tree)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const FEED: &str = r#"<rss><channel>
    <item><id>1</id></item>
    <item><id>2</id></item>
    <group><item><id>3</id></item></group>
    <item><id>4</id></item>
  </channel></rss>"#;

  fn ids(document: &Document) -> Vec<String> {
    document
      .items(&TagName::from("item"))
      .into_iter()
      .filter_map(|id| document.node(id))
      .filter_map(|item| resolve_text(item, &[TagName::from("id")]))
      .collect()
  }

  #[test]
  fn finds_channel_below_root() {
    let document = Document::parse(FEED.as_bytes()).unwrap();

    let channel = document.channel(&TagName::from("channel")).unwrap();

    assert_eq!(
      document.node(channel).unwrap().parent().map(|node| node.id()),
      document.root_element().map(|node| node.id())
    );
  }

  #[test]
  fn root_is_not_its_own_channel() {
    let document = Document::parse(b"<channel><item/></channel>").unwrap();

    assert_eq!(document.channel(&TagName::from("channel")), None);
    assert_eq!(document.items(&TagName::from("item")).len(), 1);
  }

  #[test]
  fn finds_nested_items_in_document_order() {
    let document = Document::parse(FEED.as_bytes()).unwrap();

    assert_eq!(ids(&document), vec!["1", "2", "3", "4"]);
  }

  #[test]
  fn removes_from_channel() {
    let mut document = Document::parse(FEED.as_bytes()).unwrap();

    let channel = document.channel(&TagName::from("channel"));
    let items = document.items(&TagName::from("item"));

    assert_eq!(document.remove(items[1], channel), Removal::FromChannel);
    assert_eq!(ids(&document), vec!["1", "3", "4"]);
  }

  #[test]
  fn falls_back_to_actual_parent() {
    let mut document = Document::parse(FEED.as_bytes()).unwrap();

    let channel = document.channel(&TagName::from("channel"));
    let items = document.items(&TagName::from("item"));

    assert_eq!(document.remove(items[2], channel), Removal::FromParent);
    assert_eq!(ids(&document), vec!["1", "2", "4"]);
  }

  #[test]
  fn removes_without_channel() {
    let mut document = Document::parse(FEED.as_bytes()).unwrap();

    let items = document.items(&TagName::from("item"));

    assert_eq!(document.remove(items[0], None), Removal::FromParent);
    assert_eq!(ids(&document), vec!["2", "3", "4"]);
  }

  #[test]
  fn second_removal_is_a_no_op() {
    let mut document = Document::parse(FEED.as_bytes()).unwrap();

    let channel = document.channel(&TagName::from("channel"));
    let items = document.items(&TagName::from("item"));

    assert_eq!(document.remove(items[0], channel), Removal::FromChannel);
    assert_eq!(document.remove(items[0], channel), Removal::Absent);
    assert_eq!(ids(&document), vec!["2", "3", "4"]);
  }

  #[test]
  fn items_inside_removed_subtree_are_absent() {
    let mut document = Document::parse(FEED.as_bytes()).unwrap();

    let channel = document.channel(&TagName::from("channel"));
    let items = document.items(&TagName::from("item"));

    let group = document.node(items[2]).unwrap().parent().unwrap().id();

    assert_eq!(document.remove(group, channel), Removal::FromChannel);
    assert_eq!(document.remove(items[2], channel), Removal::Absent);
    assert_eq!(ids(&document), vec!["1", "2", "4"]);
  }
}
