//! Projection of controller state into the assembled configuration.

use shitsukan_types::AssembledConfig;

use crate::state::ControllerState;

/// Combine the loaded record, the active leaf, and the current parameter
/// values into one snapshot.
///
/// Without a loaded record the record fields are empty; the leaf and values
/// are still carried as they are.
pub fn assemble(state: &ControllerState) -> AssembledConfig {
    let (shader_name, parameters, main_texture_name) = match &state.loaded_record {
        Some(record) => (
            record.shader_name.clone(),
            record.parameters.clone(),
            record.main_texture_name.clone(),
        ),
        None => (String::new(), Vec::new(), String::new()),
    };

    AssembledConfig {
        main_texture: state.options.main_texture_reference.clone(),
        shader_name,
        parameters,
        main_texture_name,
        leaf_id: state.leaf_id.clone(),
        parameter_values: state.parameter_values.clone(),
    }
}
