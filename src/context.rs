use super::*;

pub(crate) struct Context<'a> {
  document: &'a mut Document,
  grouping: Grouping,
  options: &'a FilterOptions,
  plan: FilterPlan,
  report: FilterReport,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&self) -> &Document {
    &*self.document
  }

  pub(crate) fn document_mut(&mut self) -> &mut Document {
    &mut *self.document
  }

  pub(crate) fn grouping(&self) -> &Grouping {
    &self.grouping
  }

  pub(crate) fn into_report(self) -> FilterReport {
    self.report
  }

  pub(crate) fn new(
    document: &'a mut Document,
    options: &'a FilterOptions,
  ) -> Self {
    Self {
      document,
      grouping: Grouping::default(),
      options,
      plan: FilterPlan::default(),
      report: FilterReport::default(),
    }
  }

  pub(crate) fn options(&self) -> &'a FilterOptions {
    self.options
  }

  pub(crate) fn report_mut(&mut self) -> &mut FilterReport {
    &mut self.report
  }

  pub(crate) fn set_grouping(&mut self, grouping: Grouping) {
    self.grouping = grouping;
  }

  pub(crate) fn set_plan(&mut self, plan: FilterPlan) {
    self.plan = plan;
  }

  pub(crate) fn take_plan(&mut self) -> FilterPlan {
    mem::take(&mut self.plan)
  }
}
