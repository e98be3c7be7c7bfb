use super::*;

mod group_items;
mod plan_removals;
mod remove_items;

pub use {
  group_items::GroupItemsStage, plan_removals::PlanRemovalsStage,
  remove_items::RemoveItemsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
