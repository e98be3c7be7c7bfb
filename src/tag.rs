use {super::*, crate::node::own_text};

/// One accepted spelling of a logical feed field.
///
/// Parsed from the strings used in configuration:
///
/// - `{uri}local` matches an element in namespace `uri`, whatever prefix the
///   feed bound to it.
/// - `prefix:local` matches the qualified name literally, which covers feeds
///   that use a prefix without declaring it.
/// - `local` matches an unprefixed element outside any namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagName {
  Expanded {
    local_name: String,
    namespace: String,
  },
  Local(String),
  Prefixed(String),
}

impl TagName {
  pub(crate) fn matches(&self, element: &Element) -> bool {
    match self {
      Self::Expanded {
        local_name,
        namespace,
      } => {
        element.namespace.as_deref() == Some(namespace.as_str())
          && element.local_name == *local_name
      }
      Self::Local(name) => {
        element.namespace.is_none() && element.name == *name
      }
      Self::Prefixed(name) => element.name == *name,
    }
  }
}

impl From<&str> for TagName {
  fn from(value: &str) -> Self {
    if let Some((namespace, local_name)) = value
      .strip_prefix('{')
      .and_then(|rest| rest.split_once('}'))
    {
      return Self::Expanded {
        local_name: local_name.to_string(),
        namespace: namespace.to_string(),
      };
    }

    if value.contains(':') {
      Self::Prefixed(value.to_string())
    } else {
      Self::Local(value.to_string())
    }
  }
}

impl Display for TagName {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Expanded {
        local_name,
        namespace,
      } => write!(f, "{{{namespace}}}{local_name}"),
      Self::Local(name) | Self::Prefixed(name) => write!(f, "{name}"),
    }
  }
}

/// Returns the trimmed text of the first child of `item` matching one of
/// `candidates`, trying candidates in order.
///
/// Children whose text is empty or whitespace only are skipped as if absent.
pub(crate) fn resolve_text(
  item: NodeRef<'_, XmlNode>,
  candidates: &[TagName],
) -> Option<String> {
  candidates.iter().find_map(|candidate| {
    item
      .children()
      .filter(|child| {
        child
          .value()
          .as_element()
          .is_some_and(|element| candidate.matches(element))
      })
      .find_map(|child| {
        let text = own_text(child);
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
      })
  })
}
