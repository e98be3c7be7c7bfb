use super::*;

pub struct GroupItemsStage;

impl Stage for GroupItemsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let grouping = Grouping::collect(context.document(), context.options());

    info!(
      "found {} items in {} groups",
      grouping.items_found,
      grouping.groups.len()
    );

    if !grouping.keyless.is_empty() {
      warn!(
        "{} items have neither a group id nor an id",
        grouping.keyless.len()
      );
    }

    let report = context.report_mut();

    report.items_found = grouping.items_found;
    report.keyless_items = grouping.keyless.len();

    context.set_grouping(grouping);

    Ok(())
  }
}
