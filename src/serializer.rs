use super::*;

/// Writes the tree as UTF-8 XML with a declaration and two-space indentation.
pub(crate) fn serialize(tree: &Tree<XmlNode>) -> Result<Vec<u8>> {
  let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

  write(
    &mut writer,
    Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
  )?;

  for child in tree.root().children() {
    write_node(&mut writer, child)?;
  }

  Ok(writer.into_inner())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result {
  writer
    .write_event(event)
    .map_err(|error| Error::Serialize(error.to_string()))
}

fn write_node(
  writer: &mut Writer<Vec<u8>>,
  node: NodeRef<'_, XmlNode>,
) -> Result {
  match node.value() {
    XmlNode::CData(text) => write(writer, Event::CData(BytesCData::new(text))),
    XmlNode::Comment(text) => {
      write(writer, Event::Comment(BytesText::from_escaped(text)))
    }
    XmlNode::Doctype(text) => {
      write(writer, Event::DocType(BytesText::from_escaped(text)))
    }
    XmlNode::Document => Ok(()),
    XmlNode::Element(element) => write_element(writer, node, element),
    XmlNode::ProcessingInstruction(text) => {
      write(writer, Event::PI(BytesPI::new(text)))
    }
    XmlNode::Text(text) => write(writer, Event::Text(BytesText::new(text))),
  }
}

fn write_element(
  writer: &mut Writer<Vec<u8>>,
  node: NodeRef<'_, XmlNode>,
  element: &Element,
) -> Result {
  let mut start = BytesStart::new(element.name.as_str());

  for (key, value) in &element.attributes {
    start.push_attribute((key.as_str(), value.as_str()));
  }

  if !node.has_children() {
    return write(writer, Event::Empty(start));
  }

  write(writer, Event::Start(start))?;

  let indented = node
    .children()
    .any(|child| matches!(child.value(), XmlNode::Element(_)));

  for child in node.children() {
    if indented && child.value().is_blank_text() {
      continue;
    }

    write_node(writer, child)?;
  }

  write(writer, Event::End(BytesEnd::new(element.name.as_str())))
}
