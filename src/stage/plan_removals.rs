use super::*;

pub struct PlanRemovalsStage;

impl Stage for PlanRemovalsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let options = context.options();

    let plan = FilterPlan::new(context.grouping(), options);

    info!(
      "keeping {} groups, dropping {} groups with fewer than {} ({})",
      plan.kept_groups, plan.dropped_groups, options.min_sizes, options.counting
    );

    let report = context.report_mut();

    report.kept_groups = plan.kept_groups;
    report.removed_groups = plan.dropped_groups;

    context.set_plan(plan);

    Ok(())
  }
}
