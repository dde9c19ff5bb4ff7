//! Controller error types.

use shitsukan_types::LeafId;
use thiserror::Error;

/// A transition the controller refused. State is unchanged when returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Parameter edit arrived while no record is loaded.
    #[error("no texture record loaded; parameter edit rejected")]
    NoRecordLoaded,

    /// The current leaf's fetch failed; the loaded record belongs to an
    /// earlier leaf and cannot be edited under this one.
    #[error("texture record unavailable for {leaf}; parameter edit rejected")]
    RecordUnavailable { leaf: String },

    /// Edited value names a parameter the loaded record does not declare.
    #[error("parameter '{id}' is not declared by the loaded record for {leaf}")]
    UnknownParameter { id: String, leaf: String },
}

impl ControllerError {
    pub(crate) fn unknown_parameter(id: &str, leaf: Option<&LeafId>) -> Self {
        Self::UnknownParameter { id: id.to_string(), leaf: leaf_label(leaf) }
    }

    pub(crate) fn record_unavailable(leaf: Option<&LeafId>) -> Self {
        Self::RecordUnavailable { leaf: leaf_label(leaf) }
    }
}

fn leaf_label(leaf: Option<&LeafId>) -> String {
    leaf.map(LeafId::to_string).unwrap_or_else(|| "<none>".to_string())
}
