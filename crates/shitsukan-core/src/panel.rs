//! What the parameter panel and the selector display are given.

use indexmap::IndexMap;
use serde::Serialize;
use shitsukan_types::{AssembledConfig, ParameterSchema};

use crate::state::ControllerState;

/// Configuration handed to the parameter-editing panel.
///
/// The panel edits the values in `render_params` and reports the full edited
/// list back through [`Controller::parameters_edited`](crate::Controller::parameters_edited).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelConfig {
    pub visible: bool,
    /// Schemas of the loaded record (empty before the first load).
    pub parameter_schemas: Vec<ParameterSchema>,
    /// The last emitted configuration.
    pub render_params: AssembledConfig,
    pub show_render_preview: bool,
    pub show_groups: bool,
    pub show_advanced_settings_guide: bool,
}

/// Schemas sharing a group label. `label` is `None` for ungrouped schemas.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGroup<'a> {
    pub label: Option<&'a str>,
    pub schemas: Vec<&'a ParameterSchema>,
}

impl PanelConfig {
    pub fn of(state: &ControllerState) -> Self {
        let options = &state.options;
        Self {
            visible: state.visible,
            parameter_schemas: state
                .loaded_record
                .as_ref()
                .map(|r| r.parameters.clone())
                .unwrap_or_default(),
            render_params: state.last_emitted.clone(),
            show_render_preview: options.show_render_preview,
            show_groups: options.show_groups,
            show_advanced_settings_guide: options.show_advanced_settings_guide,
        }
    }

    /// Schemas bucketed by group label, groups in first-seen order.
    ///
    /// With grouping off, everything lands in a single unlabeled group.
    pub fn groups(&self) -> Vec<ParameterGroup<'_>> {
        if !self.show_groups {
            if self.parameter_schemas.is_empty() {
                return Vec::new();
            }
            return vec![ParameterGroup {
                label: None,
                schemas: self.parameter_schemas.iter().collect(),
            }];
        }

        let mut buckets: IndexMap<Option<&str>, Vec<&ParameterSchema>> = IndexMap::new();
        for schema in &self.parameter_schemas {
            buckets.entry(schema.group.as_deref()).or_default().push(schema);
        }
        buckets
            .into_iter()
            .map(|(label, schemas)| ParameterGroup { label, schemas })
            .collect()
    }
}

/// Collapsed display text of the selector: the last label of the chosen
/// path, or empty when nothing is chosen.
pub fn display_label(labels: &[String]) -> &str {
    labels.last().map(String::as_str).unwrap_or("")
}
