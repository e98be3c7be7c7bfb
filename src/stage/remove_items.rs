use super::*;

pub struct RemoveItemsStage;

impl Stage for RemoveItemsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let plan = context.take_plan();

    let channel = context
      .document()
      .channel(&context.options().channel_tag);

    if channel.is_none() && !plan.removals.is_empty() {
      warn!("no channel element found, removing items from their own parents");
    }

    let document = context.document_mut();

    let mut removed = 0;

    for id in plan.removals {
      match document.remove(id, channel) {
        Removal::Absent => debug!("item {id:?} already gone, skipping"),
        Removal::FromChannel => removed += 1,
        Removal::FromParent => {
          debug!("item {id:?} sat outside the channel, removed from its parent");
          removed += 1;
        }
      }
    }

    info!("removed {removed} items");

    context.report_mut().removed_items = removed;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn run_stages(
    xml: &[u8],
    options: &FilterOptions,
  ) -> (Document, FilterReport) {
    let mut document = Document::parse(xml).unwrap();

    let context = Context::new(&mut document, options);

    let report = Pipeline::with_default_stages(context)
      .run()
      .unwrap()
      .into_report();

    (document, report)
  }

  fn surviving_ids(document: &Document) -> Vec<String> {
    document
      .items(&TagName::from("item"))
      .into_iter()
      .filter_map(|id| document.node(id))
      .filter_map(|item| resolve_text(item, &[TagName::from("id")]))
      .collect()
  }

  #[test]
  fn removes_planned_items() {
    let (document, report) = run_stages(
      br#"<rss><channel>
        <item><id>1</id><item_group_id>A</item_group_id><availability>in stock</availability></item>
        <item><id>2</id><item_group_id>B</item_group_id><availability>out of stock</availability></item>
        <item><id>3</id><item_group_id>A</item_group_id><availability>out of stock</availability></item>
      </channel></rss>"#,
      &FilterOptions::builder().min_sizes(1).build(),
    );

    assert_eq!(surviving_ids(&document), vec!["1", "3"]);
    assert_eq!(report.removed_items, 1);
  }

  #[test]
  fn removes_items_outside_the_channel() {
    let (document, report) = run_stages(
      br#"<rss><channel>
        <item><id>1</id><availability>in stock</availability></item>
      </channel>
      <extra><item><id>2</id></item></extra></rss>"#,
      &FilterOptions::builder().min_sizes(1).build(),
    );

    assert_eq!(surviving_ids(&document), vec!["1"]);
    assert_eq!(report.removed_items, 1);
  }

  #[test]
  fn removes_items_without_any_channel() {
    let (document, report) = run_stages(
      br#"<feed><item><id>1</id></item><item><id>2</id><availability>in stock</availability></item></feed>"#,
      &FilterOptions::builder().min_sizes(1).build(),
    );

    assert_eq!(surviving_ids(&document), vec!["2"]);
    assert_eq!(report.removed_items, 1);
  }

  #[test]
  fn removes_keyless_items_when_asked() {
    let (document, report) = run_stages(
      br#"<rss><channel>
        <item><title>no key</title></item>
        <item><id>1</id></item>
      </channel></rss>"#,
      &FilterOptions::builder().keyless(KeylessItems::Remove).build(),
    );

    assert!(surviving_ids(&document).is_empty());
    assert_eq!(report.removed_items, 2);
    assert_eq!(report.keyless_items, 1);
  }
}
