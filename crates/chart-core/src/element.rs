// File: crates/chart-core/src/element.rs
// Summary: Host lifecycle for the chart: extract on connect, render once layout width is known.

use std::sync::Arc;

use crate::chart::{Chart, RenderPlan};
use crate::diagnostics::Diagnostics;
use crate::error::PlanError;
use crate::record::{extract, AttributeBag, Record};

/// What to do when the host reports a width after the first render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Render on the first layout only; later widths are recorded but ignored.
    #[default]
    Once,
    /// Re-render whenever the measured width changes.
    EveryLayout,
}

/// One mounted chart. Owns its records and the last plan it produced.
pub struct ChartElement {
    records: Vec<Record>,
    text: Option<String>,
    chart: Chart,
    policy: ResizePolicy,
    width: Option<f64>,
    plan: Option<RenderPlan>,
}

impl ChartElement {
    /// Markup tag the element is registered under.
    pub const TAG: &'static str = "tc-multiple-bar-chart";

    /// Attach to a container: read the container's `text` attribute, extract
    /// records from `children`, and hand them to `diagnostics` when present.
    pub fn connect<C, I>(container: &C, children: I, diagnostics: Option<Arc<dyn Diagnostics>>) -> Self
    where
        C: AttributeBag + ?Sized,
        I: IntoIterator,
        I::Item: AttributeBag,
    {
        let records = extract(children);
        if let Some(d) = diagnostics.as_deref() {
            d.trace(Self::TAG, &records);
        }
        Self::from_records(records, container.attribute("text").map(str::to_string))
    }

    /// Mount with records that were already extracted (e.g. component props).
    pub fn from_records(records: Vec<Record>, text: Option<String>) -> Self {
        Self { records, text, chart: Chart::new(), policy: ResizePolicy::default(), width: None, plan: None }
    }

    pub fn with_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_chart(mut self, chart: Chart) -> Self {
        self.chart = chart;
        self
    }

    /// Report the host's measured width. Returns the new plan when this call
    /// rendered, `None` when the policy skipped it.
    pub fn on_layout(&mut self, width: f64) -> Result<Option<&RenderPlan>, PlanError> {
        let previous = self.width.replace(width);
        let due = match (self.policy, &self.plan) {
            (_, None) => true,
            (ResizePolicy::Once, Some(_)) => false,
            (ResizePolicy::EveryLayout, Some(_)) => previous != Some(width),
        };
        if !due {
            log::trace!("{}: layout width {width} ignored", Self::TAG);
            return Ok(None);
        }
        let plan = self.chart.plan(&self.records, width)?;
        let plan = self.plan.insert(plan);
        Ok(Some(&*plan))
    }

    pub fn records(&self) -> &[Record] { &self.records }

    /// The container's `text` attribute; kept but not drawn.
    pub fn text(&self) -> Option<&str> { self.text.as_deref() }

    pub fn plan(&self) -> Option<&RenderPlan> { self.plan.as_ref() }

    /// Last width the host reported.
    pub fn measured_width(&self) -> Option<f64> { self.width }

    pub fn policy(&self) -> ResizePolicy { self.policy }
}
