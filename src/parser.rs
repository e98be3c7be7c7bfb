use super::*;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Builds a document tree from raw feed bytes, resolving namespace prefixes
/// as elements are opened.
pub(crate) fn parse(xml: &[u8]) -> Result<Tree<XmlNode>> {
  let xml = xml.strip_prefix(UTF8_BOM).unwrap_or(xml);

  let mut reader = NsReader::from_reader(xml);

  let mut tree = Tree::new(XmlNode::Document);

  let mut open = vec![tree.root().id()];

  let mut has_root = false;

  loop {
    let (resolved, event) = reader.read_resolved_event()?;

    let namespace = match resolved {
      ResolveResult::Bound(namespace) => {
        Some(String::from_utf8_lossy(namespace.as_ref()).into_owned())
      }
      _ => None,
    };

    match event {
      Event::Start(start) => {
        claim_root(&open, &mut has_root)?;
        let element = Element::from_start(&start, namespace)?;
        let id = append(&mut tree, &open, XmlNode::Element(element))?;
        open.push(id);
      }
      Event::Empty(start) => {
        claim_root(&open, &mut has_root)?;
        let element = Element::from_start(&start, namespace)?;
        append(&mut tree, &open, XmlNode::Element(element))?;
      }
      Event::End(_) => {
        if open.len() <= 1 {
          return Err(Error::MalformedFeed("unexpected closing tag".into()));
        }

        open.pop();
      }
      Event::Text(text) => {
        let text = text.unescape()?;

        if open.len() > 1 {
          append(&mut tree, &open, XmlNode::Text(text.into_owned()))?;
        } else if !text.trim().is_empty() {
          return Err(Error::MalformedFeed(
            "text outside the root element".into(),
          ));
        }
      }
      Event::CData(cdata) => {
        if open.len() == 1 {
          return Err(Error::MalformedFeed(
            "CDATA outside the root element".into(),
          ));
        }

        let text = String::from_utf8_lossy(&cdata).into_owned();
        append(&mut tree, &open, XmlNode::CData(text))?;
      }
      Event::Comment(comment) => {
        let text = String::from_utf8_lossy(&comment).into_owned();
        append(&mut tree, &open, XmlNode::Comment(text))?;
      }
      Event::PI(instruction) => {
        let text = String::from_utf8_lossy(&instruction).into_owned();
        append(&mut tree, &open, XmlNode::ProcessingInstruction(text))?;
      }
      Event::DocType(doctype) => {
        let text = String::from_utf8_lossy(&doctype).into_owned();
        append(&mut tree, &open, XmlNode::Doctype(text))?;
      }
      Event::Eof => break,
      _ => {}
    }
  }

  if open.len() > 1 {
    return Err(Error::MalformedFeed("unclosed element at end of input".into()));
  }

  if !has_root {
    return Err(Error::MalformedFeed("missing root element".into()));
  }

  Ok(tree)
}

fn append(
  tree: &mut Tree<XmlNode>,
  open: &[NodeId],
  node: XmlNode,
) -> Result<NodeId> {
  let mut parent = open
    .last()
    .and_then(|&id| tree.get_mut(id))
    .ok_or_else(|| Error::MalformedFeed("lost track of open element".into()))?;

  Ok(parent.append(node).id())
}

fn claim_root(open: &[NodeId], has_root: &mut bool) -> Result {
  if open.len() > 1 {
    return Ok(());
  }

  if mem::replace(has_root, true) {
    return Err(Error::MalformedFeed("more than one root element".into()));
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn root_element(tree: &Tree<XmlNode>) -> &Element {
    tree
      .root()
      .children()
      .find_map(|node| node.value().as_element())
      .unwrap()
  }

  #[test]
  fn resolves_namespaces_and_keeps_names_as_written() {
    let tree = parse(
      br#"<rss xmlns:g="http://base.google.com/ns/1.0" version="2.0"><g:id>1</g:id></rss>"#,
    )
    .unwrap();

    let root = tree.root().first_child().unwrap();

    let Some(XmlNode::Element(id)) =
      root.first_child().map(|node| node.value().clone())
    else {
      panic!("expected an element");
    };

    assert_eq!(id.name, "g:id");
    assert_eq!(id.local_name, "id");
    assert_eq!(id.namespace.as_deref(), Some("http://base.google.com/ns/1.0"));

    assert_eq!(
      root_element(&tree).attributes,
      vec![
        ("xmlns:g".to_string(), "http://base.google.com/ns/1.0".to_string()),
        ("version".to_string(), "2.0".to_string()),
      ]
    );
  }

  #[test]
  fn undeclared_prefix_has_no_namespace() {
    let tree = parse(b"<rss><g:id>1</g:id></rss>").unwrap();

    let id = tree
      .root()
      .descendants()
      .filter_map(|node| node.value().as_element())
      .find(|element| element.local_name == "id")
      .unwrap();

    assert_eq!(id.name, "g:id");
    assert_eq!(id.namespace, None);
  }

  #[test]
  fn unescapes_text_and_attributes() {
    let tree =
      parse(br#"<rss title="A &amp; B"><t>Boots &lt;41&gt;</t></rss>"#).unwrap();

    assert_eq!(
      root_element(&tree).attributes,
      vec![("title".to_string(), "A & B".to_string())]
    );

    let text = tree
      .root()
      .descendants()
      .find_map(|node| match node.value() {
        XmlNode::Text(text) => Some(text.clone()),
        _ => None,
      })
      .unwrap();

    assert_eq!(text, "Boots <41>");
  }

  #[test]
  fn skips_byte_order_mark_and_declaration() {
    let tree =
      parse(b"\xEF\xBB\xBF<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rss/>")
        .unwrap();

    assert_eq!(tree.root().children().count(), 1);
    assert_eq!(root_element(&tree).name, "rss");
  }

  #[test]
  fn rejects_mismatched_tags() {
    assert!(matches!(
      parse(b"<rss><channel></rss>"),
      Err(Error::Parse { .. } | Error::MalformedFeed(_))
    ));
  }

  #[test]
  fn rejects_unclosed_root() {
    assert!(matches!(
      parse(b"<rss><channel></channel>"),
      Err(Error::Parse { .. } | Error::MalformedFeed(_))
    ));
  }

  #[test]
  fn rejects_missing_root() {
    assert!(matches!(
      parse(b"<?xml version=\"1.0\"?>\n<!-- empty -->"),
      Err(Error::MalformedFeed(_))
    ));
  }

  #[test]
  fn rejects_second_root() {
    assert!(matches!(
      parse(b"<rss/><rss/>"),
      Err(Error::MalformedFeed(_))
    ));
  }

  #[test]
  fn rejects_text_outside_root() {
    assert!(matches!(
      parse(b"<rss/>trailing"),
      Err(Error::MalformedFeed(_))
    ));
  }
}
