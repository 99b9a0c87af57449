//! Reactive binding between controls and chart aggregations.
//!
//! The source dashboard wired controls to charts through callback
//! registration on a global app object. Here the wiring is an explicit,
//! static dependency map from control identity to chart slot, so the graph
//! is inspectable and testable without any UI runtime. A control change
//! synchronously re-invokes only the aggregations bound to that control;
//! one change produces at most one recomputation per dependent chart.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::controls::{ControlId, ControlRegistry, ControlState, PayloadRange, SiteSelection};
use crate::routes::payload_scatter::PayloadScatterChart;
use crate::routes::site_summary::SiteSummaryChart;
use crate::services;
use crate::store::DatasetStore;

/// Named chart region of the page that an aggregation output targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartSlot {
    SuccessPie,
    PayloadScatter,
}

/// Renderer-agnostic output of one aggregation invocation, created fresh
/// every time; no identity across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChartDescription {
    Pie(SiteSummaryChart),
    Scatter(PayloadScatterChart),
}

/// One freshly rendered chart for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub slot: ChartSlot,
    pub chart: ChartDescription,
}

/// A user edit of one control's value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    SiteSelector(SiteSelection),
    PayloadRange(PayloadRange),
}

impl ControlChange {
    pub fn control_id(&self) -> ControlId {
        match self {
            ControlChange::SiteSelector(_) => ControlId::SiteSelector,
            ControlChange::PayloadRange(_) => ControlId::PayloadRange,
        }
    }
}

/// The dependency map: which control triggers which chart slot.
///
/// The payload scatter is bound only to the payload-range control; a site
/// change never recomputes it. This preserves the source system's wiring.
const BINDINGS: &[(ControlId, ChartSlot)] = &[
    (ControlId::SiteSelector, ChartSlot::SuccessPie),
    (ControlId::PayloadRange, ChartSlot::PayloadScatter),
];

/// Slot order used for the initial full render.
const ALL_SLOTS: &[ChartSlot] = &[ChartSlot::SuccessPie, ChartSlot::PayloadScatter];

/// The dashboard: dataset store, control registry, and current control
/// state, plus the binding logic that maps control changes to chart
/// updates.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: Arc<DatasetStore>,
    registry: ControlRegistry,
    state: ControlState,
}

impl Dashboard {
    /// Build the dashboard over a loaded dataset. The control registry is
    /// derived from the data; the state starts at the default selection.
    pub fn new(store: Arc<DatasetStore>, payload_ceiling: f64) -> Self {
        let registry = ControlRegistry::from_store(&store, payload_ceiling);
        let state = registry.default_state();
        Self {
            store,
            registry,
            state,
        }
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Number of records in the underlying dataset.
    pub fn record_count(&self) -> usize {
        self.store.records().len()
    }

    /// Chart slots bound to a control.
    pub fn dependents(control: ControlId) -> impl Iterator<Item = ChartSlot> {
        BINDINGS
            .iter()
            .filter(move |(id, _)| *id == control)
            .map(|(_, slot)| *slot)
    }

    /// Invoke the aggregation behind one chart slot with the current state.
    pub fn render(&self, slot: ChartSlot) -> ChartUpdate {
        let chart = match slot {
            ChartSlot::SuccessPie => ChartDescription::Pie(services::site_success_summary(
                &self.state.site,
                self.store.records(),
            )),
            ChartSlot::PayloadScatter => ChartDescription::Scatter(
                services::payload_outcome_scatter(&self.state.payload, self.store.records()),
            ),
        };
        ChartUpdate { slot, chart }
    }

    /// Initial render: invoke every bound aggregation once with the default
    /// state to populate all chart slots.
    pub fn render_all(&self) -> Vec<ChartUpdate> {
        ALL_SLOTS.iter().map(|slot| self.render(*slot)).collect()
    }

    /// Apply one control change and return the updates for the chart slots
    /// bound to that control, nothing else.
    ///
    /// Payload ranges clamp into the configured domain. An unknown site is
    /// accepted as-is: the aggregation is total and renders it as an empty
    /// chart, so a manipulated request degrades instead of failing.
    pub fn apply(&mut self, change: ControlChange) -> Vec<ChartUpdate> {
        let control = change.control_id();
        match change {
            ControlChange::SiteSelector(site) => {
                debug!("site selector changed to {:?}", site);
                self.state.site = site;
            }
            ControlChange::PayloadRange(range) => {
                let clamped = range.clamped(self.registry.payload_domain);
                debug!("payload range changed to [{}, {}]", clamped.low, clamped.high);
                self.state.payload = clamped;
            }
        }

        Self::dependents(control)
            .map(|slot| self.render(slot))
            .collect()
    }
}
