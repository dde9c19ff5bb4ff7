//! Controller state.

use serde::{Deserialize, Serialize};
use shitsukan_types::{AssembledConfig, ConfigurationRecord, LeafId, ParameterValue};
use strum::{Display, EnumString};

use crate::options::ControllerOptions;

/// Monotonic selection generation.
///
/// Bumped on every transition that invalidates in-flight fetches (a new
/// selection or a reset). A fetch result is applied only if it carries the
/// current generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Where the controller is in its selection lifecycle.
///
/// ```text
/// Empty ──select──▶ Loading ──resolved──▶ Loaded ──edit──▶ Loaded
///                    │   ▲                  │
///                    │   └─────select───────┘
///                    └──failed──▶ Unavailable ──select──▶ Loading
/// any ──empty path──▶ Empty
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Empty,
    /// A leaf is selected and its fetch is in flight.
    Loading,
    /// The selected leaf's record is loaded.
    Loaded,
    /// The current leaf's fetch failed; no record for it is available.
    Unavailable,
}

/// State of one controller instance.
///
/// Created once per mount, re-seeded on reset, otherwise updated in place by
/// [`Controller`](crate::Controller) transitions.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    pub(crate) phase: Phase,
    pub(crate) visible: bool,
    pub(crate) loaded_record: Option<ConfigurationRecord>,
    pub(crate) leaf_id: Option<LeafId>,
    pub(crate) parameter_values: Vec<ParameterValue>,
    pub(crate) last_emitted: AssembledConfig,
    pub(crate) options: ControllerOptions,
    pub(crate) generation: Generation,
}

impl ControllerState {
    pub(crate) fn with_options(options: ControllerOptions) -> Self {
        Self { options, ..Default::default() }
    }

    /// Back to defaults. Options survive; the generation moves forward so
    /// that fetches issued before the reset are discarded.
    pub(crate) fn reset(&mut self) {
        let options = std::mem::take(&mut self.options);
        let generation = self.generation.next();
        *self = Self { options, generation, ..Default::default() };
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the advanced parameter panel is shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Last successfully loaded record. During a reload this is the previous
    /// leaf's record until the new one arrives.
    pub fn loaded_record(&self) -> Option<&ConfigurationRecord> {
        self.loaded_record.as_ref()
    }

    pub fn leaf_id(&self) -> Option<&LeafId> {
        self.leaf_id.as_ref()
    }

    pub fn parameter_values(&self) -> &[ParameterValue] {
        &self.parameter_values
    }

    /// The most recently emitted (or reset) configuration.
    pub fn last_emitted(&self) -> &AssembledConfig {
        &self.last_emitted
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }
}
