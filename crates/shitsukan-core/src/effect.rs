//! Side effects requested by controller transitions, and the events the
//! owning application observes.

use serde::Serialize;
use shitsukan_types::{AssembledConfig, LeafId, SelectionPath};

use crate::options::FetchQuery;
use crate::state::Generation;

/// One texture record fetch for the host to perform.
///
/// The result must be handed back to
/// [`Controller::fetch_resolved`](crate::Controller::fetch_resolved) together
/// with `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: Generation,
    pub leaf_id: LeafId,
    /// Endpoint path; `leaf_id` is appended as the last segment.
    pub endpoint: String,
    pub query: FetchQuery,
}

/// What the owning application receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ControllerEvent {
    /// A complete, current configuration.
    Config(AssembledConfig),
    /// The record for `leaf_id` could not be fetched or decoded.
    FetchFailed { leaf_id: LeafId, reason: String },
}

impl ControllerEvent {
    pub fn config(&self) -> Option<&AssembledConfig> {
        match self {
            Self::Config(config) => Some(config),
            Self::FetchFailed { .. } => None,
        }
    }

    pub fn leaf_id(&self) -> Option<&LeafId> {
        match self {
            Self::Config(config) => config.leaf_id.as_ref(),
            Self::FetchFailed { leaf_id, .. } => Some(leaf_id),
        }
    }
}

/// A side effect produced by a transition, in the order it must be performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Forward a user selection to the selector's own change handler.
    NotifySelector(SelectionPath),
    /// Issue a fetch.
    Fetch(FetchRequest),
    /// Report to the owning application.
    Emit(ControllerEvent),
}
