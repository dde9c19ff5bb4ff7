//! The assembled, render-ready configuration handed to the owning application.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parameter::{ParameterSchema, ParameterValue};
use crate::selection::LeafId;

/// Complete snapshot of the current texture configuration.
///
/// A pure projection of controller state with no identity of its own. It is
/// recomputed on every change and always delivered whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledConfig {
    /// Reference to the uploaded main texture, supplied by the owner.
    pub main_texture: String,
    pub shader_name: String,
    /// Parameter schemas of the loaded record, in declaration order.
    pub parameters: Vec<ParameterSchema>,
    pub main_texture_name: String,
    /// Leaf that was active when this snapshot was assembled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_id: Option<LeafId>,
    /// Current parameter values, in schema order.
    pub parameter_values: Vec<ParameterValue>,
}

impl AssembledConfig {
    /// Current value of a parameter by id.
    pub fn value_of(&self, id: &str) -> Option<&Value> {
        self.parameter_values.iter().find(|p| p.id == id).map(|p| &p.value)
    }

    /// Whether this is the empty (nothing loaded) snapshot.
    pub fn is_empty(&self) -> bool {
        self.leaf_id.is_none() && self.parameters.is_empty()
    }
}
