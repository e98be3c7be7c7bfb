use super::*;

/// A node in the feed's document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum XmlNode {
  CData(String),
  Comment(String),
  Doctype(String),
  /// Synthetic root holding the prolog and the root element.
  Document,
  Element(Element),
  ProcessingInstruction(String),
  Text(String),
}

impl XmlNode {
  pub(crate) fn as_element(&self) -> Option<&Element> {
    match self {
      Self::Element(element) => Some(element),
      _ => None,
    }
  }

  pub(crate) fn is_blank_text(&self) -> bool {
    matches!(self, Self::Text(text) if text.trim().is_empty())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
  /// Attributes as written, unescaped, namespace declarations included.
  pub(crate) attributes: Vec<(String, String)>,
  pub(crate) local_name: String,
  /// Qualified name as written in the source, prefix included.
  pub(crate) name: String,
  /// Namespace URI the prefix resolved to, if it was declared.
  pub(crate) namespace: Option<String>,
}

impl Element {
  pub(crate) fn from_start(
    start: &BytesStart<'_>,
    namespace: Option<String>,
  ) -> Result<Self> {
    let attributes = start
      .attributes()
      .map(|attribute| {
        let attribute = attribute.map_err(quick_xml::Error::from)?;

        Ok((
          String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
          attribute.unescape_value()?.into_owned(),
        ))
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(Self {
      attributes,
      local_name: String::from_utf8_lossy(start.local_name().as_ref())
        .into_owned(),
      name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
      namespace,
    })
  }
}

/// Concatenated direct text and CDATA content of `node`.
pub(crate) fn own_text(node: NodeRef<'_, XmlNode>) -> String {
  node
    .children()
    .filter_map(|child| match child.value() {
      XmlNode::CData(text) | XmlNode::Text(text) => Some(text.as_str()),
      _ => None,
    })
    .collect()
}
