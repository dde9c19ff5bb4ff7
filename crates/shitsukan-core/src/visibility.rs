//! Show/hide of the advanced parameter panel.

use serde::Serialize;

use crate::state::ControllerState;

/// Flip panel visibility. Returns whether anything changed: without a
/// selected leaf this is a no-op.
pub(crate) fn toggle(state: &mut ControllerState) -> bool {
    if state.leaf_id.is_none() {
        return false;
    }
    state.visible = !state.visible;
    true
}

/// How the advanced-settings toggle should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleAffordance {
    /// Grayed out when there is no leaf to configure.
    pub enabled: bool,
    /// Panel currently shown ("collapse" rather than "advanced settings").
    pub expanded: bool,
}

impl ToggleAffordance {
    pub fn of(state: &ControllerState) -> Self {
        Self {
            enabled: state.leaf_id.is_some(),
            expanded: state.visible,
        }
    }
}
