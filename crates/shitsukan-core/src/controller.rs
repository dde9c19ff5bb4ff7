//! The selection → fetch → defaults → assemble → emit state machine.
//!
//! [`Controller`] holds one [`ControllerState`] and exposes one method per
//! event. Each method commits the state change first and then returns the
//! effects the host must perform, in order. The host owns all I/O: it issues
//! the fetches, feeds results back through [`Controller::fetch_resolved`],
//! and passes [`Effect::Emit`] events to its [`ChangeEmitter`](crate::ChangeEmitter).
//!
//! # Race handling
//!
//! Fetches are never cancelled. Every fetch carries the [`Generation`] that
//! was current when it was issued; selecting again or resetting moves the
//! generation forward, and a result for an older generation is discarded. The
//! latest selection therefore wins no matter which response lands last.

use shitsukan_types::{ConfigurationRecord, LeafId, ParameterValue, SelectionPath};
use tracing::{debug, error, info, warn};

use crate::assemble::assemble;
use crate::defaults::derive_defaults;
use crate::effect::{ControllerEvent, Effect, FetchRequest};
use crate::error::ControllerError;
use crate::options::{ControllerOptions, FetchQuery, OptionsPatch};
use crate::panel::PanelConfig;
use crate::state::{ControllerState, Generation, Phase};
use crate::visibility::{self, ToggleAffordance};

/// Selection supplied by the owner at mount.
///
/// `value` is the controlled selection and wins whenever it is present, even
/// when empty; `default_value` only applies when no `value` is given.
#[derive(Debug, Clone, Default)]
pub struct InitialSelection {
    pub value: Option<SelectionPath>,
    pub default_value: Option<SelectionPath>,
}

impl InitialSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn value(path: SelectionPath) -> Self {
        Self { value: Some(path), default_value: None }
    }

    pub fn default_value(path: SelectionPath) -> Self {
        Self { value: None, default_value: Some(path) }
    }

    fn resolve(self) -> Option<SelectionPath> {
        self.value.or(self.default_value)
    }
}

/// Reducer over [`ControllerState`].
#[derive(Debug, Clone)]
pub struct Controller {
    state: ControllerState,
}

impl Controller {
    /// Create a controller, merging `options` with defaults. If an initial
    /// selection is present its record is fetched right away.
    pub fn mount(options: &OptionsPatch, initial: InitialSelection) -> (Self, Vec<Effect>) {
        let mut controller = Self {
            state: ControllerState::with_options(ControllerOptions::merged(options)),
        };

        let effects = match initial.resolve().and_then(|path| path.leaf()) {
            Some(leaf) => {
                info!(leaf = %leaf, "mounting with initial selection");
                let query = controller.state.options.api_query.mount_query();
                vec![Effect::Fetch(controller.begin_fetch(leaf, query))]
            }
            None => {
                debug!("mounting with no selection");
                Vec::new()
            }
        };

        (controller, effects)
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// The user picked `path` in the selector.
    ///
    /// An empty path resets everything and emits nothing. Otherwise the path
    /// is forwarded to the selector's own handler and exactly one fetch is
    /// issued for its leaf, even if the leaf is unchanged.
    pub fn selection_changed(&mut self, path: SelectionPath) -> Vec<Effect> {
        let Some(leaf) = path.leaf() else {
            self.reset();
            return Vec::new();
        };

        debug!(leaf = %leaf, path = %path, "selection changed");
        let query = self.state.options.api_query.selection_query();
        let fetch = self.begin_fetch(leaf, query);
        vec![Effect::NotifySelector(path), Effect::Fetch(fetch)]
    }

    /// The owning application pushed a selection value.
    ///
    /// An empty path resets. A path ending at the current leaf passes through
    /// untouched. A path ending at another leaf fetches it, without notifying
    /// the selector (the change did not come from it).
    pub fn apply_external_selection(&mut self, path: SelectionPath) -> Vec<Effect> {
        let Some(leaf) = path.leaf() else {
            self.reset();
            return Vec::new();
        };

        if self.state.leaf_id.as_ref() == Some(&leaf) {
            return Vec::new();
        }

        debug!(leaf = %leaf, "external selection differs, fetching");
        let query = self.state.options.api_query.selection_query();
        vec![Effect::Fetch(self.begin_fetch(leaf, query))]
    }

    /// The owning application supplied a new options object. Re-merged with
    /// defaults; takes effect for subsequent fetches and assemblies only.
    pub fn apply_external_options(&mut self, options: &OptionsPatch) -> Vec<Effect> {
        self.state.options = ControllerOptions::merged(options);
        debug!(endpoint = %self.state.options.api_endpoint, "options re-merged");
        Vec::new()
    }

    /// A fetch issued under `generation` finished.
    ///
    /// Stale results are dropped. A current success loads the record, derives
    /// default values, and emits the assembled configuration. A current
    /// failure leaves the previous record in place and emits
    /// [`ControllerEvent::FetchFailed`].
    pub fn fetch_resolved<E>(
        &mut self,
        generation: Generation,
        result: Result<ConfigurationRecord, E>,
    ) -> Vec<Effect>
    where
        E: std::fmt::Display,
    {
        if generation != self.state.generation || self.state.phase != Phase::Loading {
            debug!(
                stale = generation.0,
                current = self.state.generation.0,
                phase = %self.state.phase,
                "discarding stale fetch result"
            );
            return Vec::new();
        }

        let Some(leaf) = self.state.leaf_id.clone() else {
            // Loading always has a leaf; reset clears both together.
            error!(generation = generation.0, "loading without a leaf; discarding fetch result");
            return Vec::new();
        };

        match result {
            Ok(record) => {
                info!(
                    leaf = %leaf,
                    shader = %record.shader_name,
                    parameters = record.parameters.len(),
                    "texture record loaded"
                );
                self.state.parameter_values = derive_defaults(&record.parameters);
                self.state.loaded_record = Some(record);
                self.state.phase = Phase::Loaded;
                vec![Effect::Emit(self.commit_assembly())]
            }
            Err(e) => {
                warn!(leaf = %leaf, error = %e, "texture record fetch failed");
                self.state.phase = Phase::Unavailable;
                vec![Effect::Emit(ControllerEvent::FetchFailed {
                    leaf_id: leaf,
                    reason: e.to_string(),
                })]
            }
        }
    }

    /// The parameter panel reported its full edited value list.
    ///
    /// Every id must be declared by the loaded record; otherwise the edit is
    /// rejected and state is left untouched. While a new leaf is loading the
    /// previous record stays editable. After the current leaf's fetch failed
    /// it does not.
    pub fn parameters_edited(
        &mut self,
        values: Vec<ParameterValue>,
    ) -> Result<Vec<Effect>, ControllerError> {
        if self.state.phase == Phase::Unavailable {
            warn!(leaf = ?self.state.leaf_id, "parameter edit while record unavailable");
            return Err(ControllerError::record_unavailable(self.state.leaf_id.as_ref()));
        }

        let record = self.state.loaded_record.as_ref().ok_or(ControllerError::NoRecordLoaded)?;

        if let Some(unknown) = values.iter().find(|v| record.schema(&v.id).is_none()) {
            error!(
                parameter = %unknown.id,
                leaf = ?self.state.leaf_id,
                "edited parameter not declared by loaded record"
            );
            return Err(ControllerError::unknown_parameter(&unknown.id, self.state.leaf_id.as_ref()));
        }

        self.state.parameter_values = values;
        Ok(vec![Effect::Emit(self.commit_assembly())])
    }

    /// Show or hide the advanced panel. No-op without a selected leaf; never
    /// fetches or emits.
    pub fn toggle(&mut self) -> Vec<Effect> {
        if visibility::toggle(&mut self.state) {
            debug!(visible = self.state.visible, "advanced panel toggled");
        }
        Vec::new()
    }

    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig::of(&self.state)
    }

    pub fn toggle_affordance(&self) -> ToggleAffordance {
        ToggleAffordance::of(&self.state)
    }

    fn begin_fetch(&mut self, leaf: LeafId, query: FetchQuery) -> FetchRequest {
        self.state.generation = self.state.generation.next();
        self.state.leaf_id = Some(leaf.clone());
        self.state.phase = Phase::Loading;
        FetchRequest {
            generation: self.state.generation,
            leaf_id: leaf,
            endpoint: self.state.options.api_endpoint.clone(),
            query,
        }
    }

    fn commit_assembly(&mut self) -> ControllerEvent {
        self.state.last_emitted = assemble(&self.state);
        ControllerEvent::Config(self.state.last_emitted.clone())
    }

    fn reset(&mut self) {
        debug!("selection cleared, resetting");
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ApiQueryPatch;
    use serde_json::json;
    use shitsukan_types::{AssembledConfig, ParameterSchema};

    fn oak_record() -> ConfigurationRecord {
        ConfigurationRecord::from_value(json!({
            "shaderName": "wood_shader",
            "parameters": [{"id": "roughness", "default": 0.5}],
            "mainTextureName": "oak.jpg"
        }))
        .expect("decode oak")
    }

    fn record(shader: &str, params: &[&str]) -> ConfigurationRecord {
        ConfigurationRecord {
            shader_name: shader.to_string(),
            main_texture_name: format!("{shader}.jpg"),
            parameters: params.iter().map(|p| ParameterSchema::new(*p).with_default(1.0)).collect(),
        }
    }

    fn fetches(effects: &[Effect]) -> Vec<&FetchRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Fetch(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    fn emitted(effects: &[Effect]) -> Vec<&ControllerEvent> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Emit(ev) => Some(ev),
                _ => None,
            })
            .collect()
    }

    fn only_config(effects: &[Effect]) -> &AssembledConfig {
        let events = emitted(effects);
        assert_eq!(events.len(), 1, "expected exactly one emission, got {events:?}");
        events[0].config().expect("config event")
    }

    fn mounted() -> Controller {
        Controller::mount(&OptionsPatch::default(), InitialSelection::none()).0
    }

    /// Select Wood/Oak-123 and resolve with the oak record.
    fn loaded_oak() -> Controller {
        let mut c = mounted();
        let effects = c.selection_changed(SelectionPath::new(["Wood", "Oak-123"]));
        let generation = fetches(&effects)[0].generation;
        c.fetch_resolved::<String>(generation, Ok(oak_record()));
        c
    }

    // =========================================================================
    // Mount
    // =========================================================================

    #[test]
    fn test_mount_without_selection_is_empty_and_silent() {
        let (c, effects) = Controller::mount(&OptionsPatch::default(), InitialSelection::none());
        assert!(effects.is_empty());
        assert_eq!(c.state().phase(), Phase::Empty);
        assert!(c.state().leaf_id().is_none());
    }

    #[test]
    fn test_mount_with_default_value_fetches_with_material_id() {
        let options = OptionsPatch {
            api_query: ApiQueryPatch { material_id: Some("mat-9".to_string()), ..Default::default() },
            ..Default::default()
        };
        let (c, effects) = Controller::mount(
            &options,
            InitialSelection::default_value(SelectionPath::new(["Stone", "Slate-4"])),
        );

        let fetch = fetches(&effects);
        assert_eq!(fetch.len(), 1);
        assert_eq!(fetch[0].leaf_id, LeafId::from("Slate-4"));
        assert_eq!(fetch[0].query.materialid.as_deref(), Some("mat-9"));
        // Mount does not go through the selector handler
        assert!(!effects.iter().any(|e| matches!(e, Effect::NotifySelector(_))));
        assert_eq!(c.state().phase(), Phase::Loading);
    }

    #[test]
    fn test_mount_controlled_empty_value_beats_default() {
        let initial = InitialSelection {
            value: Some(SelectionPath::empty()),
            default_value: Some(SelectionPath::new(["Stone", "Slate-4"])),
        };
        let (c, effects) = Controller::mount(&OptionsPatch::default(), initial);
        assert!(effects.is_empty());
        assert_eq!(c.state().phase(), Phase::Empty);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_selection_forwards_then_fetches_once() {
        let mut c = mounted();
        let path = SelectionPath::new(["Wood", "Oak-123"]);
        let effects = c.selection_changed(path.clone());

        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::NotifySelector(path));
        let Effect::Fetch(fetch) = &effects[1] else { panic!("expected fetch") };
        assert_eq!(fetch.leaf_id, LeafId::from("Oak-123"));
        assert_eq!(fetch.endpoint, crate::DEFAULT_API_ENDPOINT);
        assert_eq!(fetch.query, FetchQuery { showoption: true, version: 1, materialid: None });
        assert_eq!(c.state().leaf_id(), Some(&LeafId::from("Oak-123")));
        assert_eq!(c.state().phase(), Phase::Loading);
    }

    #[test]
    fn test_reselecting_same_leaf_fetches_again() {
        let mut c = loaded_oak();
        let effects = c.selection_changed(SelectionPath::new(["Wood", "Oak-123"]));
        assert_eq!(fetches(&effects).len(), 1);
    }

    #[test]
    fn test_fetch_success_emits_defaults() {
        let mut c = mounted();
        let effects = c.selection_changed(SelectionPath::new(["Wood", "Oak-123"]));
        let generation = fetches(&effects)[0].generation;

        let effects = c.fetch_resolved::<String>(generation, Ok(oak_record()));

        let config = only_config(&effects);
        assert_eq!(config.leaf_id, Some(LeafId::from("Oak-123")));
        assert_eq!(config.shader_name, "wood_shader");
        assert_eq!(config.main_texture_name, "oak.jpg");
        assert_eq!(config.parameter_values, vec![ParameterValue::new("roughness", 0.5)]);
        assert_eq!(c.state().phase(), Phase::Loaded);
        assert_eq!(c.state().last_emitted(), config);
    }

    #[test]
    fn test_in_flight_fetch_keeps_previous_record() {
        let mut c = loaded_oak();
        c.selection_changed(SelectionPath::new(["Stone", "Slate-4"]));
        assert_eq!(c.state().phase(), Phase::Loading);
        assert_eq!(c.state().loaded_record().unwrap().shader_name, "wood_shader");
        assert_eq!(c.state().leaf_id(), Some(&LeafId::from("Slate-4")));
    }

    // =========================================================================
    // Edits
    // =========================================================================

    #[test]
    fn test_edit_emits_again_with_same_leaf_and_schema() {
        let mut c = loaded_oak();
        let before = c.state().last_emitted().clone();

        let effects = c
            .parameters_edited(vec![ParameterValue::new("roughness", 0.8)])
            .expect("edit accepted");

        let config = only_config(&effects);
        assert_eq!(config.parameter_values, vec![ParameterValue::new("roughness", 0.8)]);
        assert_eq!(config.leaf_id, before.leaf_id);
        assert_eq!(config.parameters, before.parameters);
    }

    #[test]
    fn test_identical_edit_still_emits() {
        let mut c = loaded_oak();
        let same = c.state().parameter_values().to_vec();
        let effects = c.parameters_edited(same).unwrap();
        assert_eq!(emitted(&effects).len(), 1);
    }

    #[test]
    fn test_edit_with_unknown_id_is_rejected() {
        let mut c = loaded_oak();
        let err = c
            .parameters_edited(vec![ParameterValue::new("metalness", 1.0)])
            .unwrap_err();
        assert!(matches!(err, ControllerError::UnknownParameter { ref id, .. } if id == "metalness"));
        assert_eq!(c.state().parameter_values(), &[ParameterValue::new("roughness", 0.5)]);
    }

    #[test]
    fn test_edit_before_load_is_rejected() {
        let mut c = mounted();
        c.selection_changed(SelectionPath::new(["Wood", "Oak-123"]));
        assert_eq!(
            c.parameters_edited(vec![]).unwrap_err(),
            ControllerError::NoRecordLoaded
        );
    }

    #[test]
    fn test_edit_while_loading_applies_to_previous_record() {
        let mut c = loaded_oak();
        c.selection_changed(SelectionPath::new(["Stone", "Slate-4"]));

        let effects = c
            .parameters_edited(vec![ParameterValue::new("roughness", 0.7)])
            .expect("edit accepted while loading");

        let config = only_config(&effects);
        assert_eq!(config.shader_name, "wood_shader");
        assert_eq!(config.leaf_id, Some(LeafId::from("Slate-4")));
        assert_eq!(c.state().phase(), Phase::Loading);
    }

    #[test]
    fn test_edit_after_fetch_failure_is_rejected() {
        let mut c = loaded_oak();
        let g = fetches(&c.selection_changed(SelectionPath::new(["Stone", "Slate-4"])))[0].generation;
        c.fetch_resolved(g, Err("HTTP 404"));
        let before = c.state().last_emitted().clone();

        let err = c
            .parameters_edited(vec![ParameterValue::new("roughness", 0.9)])
            .unwrap_err();

        assert_eq!(err, ControllerError::RecordUnavailable { leaf: "Slate-4".to_string() });
        assert_eq!(c.state().parameter_values(), &[ParameterValue::new("roughness", 0.5)]);
        assert_eq!(c.state().last_emitted(), &before);
    }

    #[test]
    fn test_successful_reselect_after_failure_allows_edits() {
        let mut c = loaded_oak();
        let g = fetches(&c.selection_changed(SelectionPath::new(["Stone", "Slate-4"])))[0].generation;
        c.fetch_resolved(g, Err("HTTP 404"));
        let g = fetches(&c.selection_changed(SelectionPath::new(["Stone", "Slate-4"])))[0].generation;
        c.fetch_resolved::<String>(g, Ok(record("stone_shader", &["gloss"])));

        let effects = c.parameters_edited(vec![ParameterValue::new("gloss", 0.3)]).unwrap();
        assert_eq!(only_config(&effects).shader_name, "stone_shader");
    }

    // =========================================================================
    // Reset
    // =========================================================================

    #[test]
    fn test_empty_selection_resets_without_emitting() {
        let mut c = loaded_oak();
        c.toggle();
        assert!(c.state().visible());

        let effects = c.selection_changed(SelectionPath::empty());

        assert!(effects.is_empty());
        let s = c.state();
        assert_eq!(s.phase(), Phase::Empty);
        assert!(!s.visible());
        assert!(s.leaf_id().is_none());
        assert!(s.loaded_record().is_none());
        assert!(s.parameter_values().is_empty());
    }

    #[test]
    fn test_blank_leaf_selection_resets_and_toggle_stays_off() {
        let mut c = loaded_oak();

        let effects = c.selection_changed(SelectionPath::new([""]));
        assert!(effects.is_empty());
        assert_eq!(c.state().phase(), Phase::Empty);
        assert!(c.state().leaf_id().is_none());

        assert!(c.toggle().is_empty());
        assert!(!c.state().visible());
        assert!(!c.toggle_affordance().enabled);
    }

    #[test]
    fn test_blank_leaf_at_mount_does_not_fetch() {
        let (c, effects) = Controller::mount(
            &OptionsPatch::default(),
            InitialSelection::value(SelectionPath::new(["Wood", ""])),
        );
        assert!(effects.is_empty());
        assert_eq!(c.state().phase(), Phase::Empty);
    }

    #[test]
    fn test_fetch_after_reset_is_discarded() {
        let mut c = mounted();
        let effects = c.selection_changed(SelectionPath::new(["Wood", "Oak-123"]));
        let generation = fetches(&effects)[0].generation;
        c.selection_changed(SelectionPath::empty());

        let effects = c.fetch_resolved::<String>(generation, Ok(oak_record()));

        assert!(effects.is_empty());
        assert_eq!(c.state().phase(), Phase::Empty);
        assert!(c.state().loaded_record().is_none());
    }

    // =========================================================================
    // Races
    // =========================================================================

    #[test]
    fn test_out_of_order_completion_latest_selection_wins() {
        let mut c = mounted();
        let a = fetches(&c.selection_changed(SelectionPath::new(["A"])))[0].generation;
        let b = fetches(&c.selection_changed(SelectionPath::new(["B"])))[0].generation;

        // B resolves first and is applied
        let effects = c.fetch_resolved::<String>(b, Ok(record("b_shader", &["gloss"])));
        assert_eq!(only_config(&effects).leaf_id, Some(LeafId::from("B")));

        // A resolves late and is dropped
        let effects = c.fetch_resolved::<String>(a, Ok(record("a_shader", &["grain"])));
        assert!(effects.is_empty());
        assert_eq!(c.state().loaded_record().unwrap().shader_name, "b_shader");
        assert_eq!(c.state().last_emitted().leaf_id, Some(LeafId::from("B")));
    }

    #[test]
    fn test_late_failure_for_old_selection_is_dropped() {
        let mut c = mounted();
        let a = fetches(&c.selection_changed(SelectionPath::new(["A"])))[0].generation;
        let b = fetches(&c.selection_changed(SelectionPath::new(["B"])))[0].generation;
        c.fetch_resolved::<String>(b, Ok(record("b_shader", &[])));

        let effects = c.fetch_resolved(a, Err("connection reset"));
        assert!(effects.is_empty());
        assert_eq!(c.state().phase(), Phase::Loaded);
    }

    #[test]
    fn test_duplicate_resolution_emits_once() {
        let mut c = mounted();
        let g = fetches(&c.selection_changed(SelectionPath::new(["A"])))[0].generation;
        assert_eq!(emitted(&c.fetch_resolved::<String>(g, Ok(record("x", &[])))).len(), 1);
        assert!(c.fetch_resolved::<String>(g, Ok(record("x", &[]))).is_empty());
    }

    // =========================================================================
    // Failure
    // =========================================================================

    #[test]
    fn test_failure_emits_fetch_failed_and_keeps_state() {
        let mut c = loaded_oak();
        c.toggle();
        let g = fetches(&c.selection_changed(SelectionPath::new(["Stone", "Slate-4"])))[0].generation;

        let effects = c.fetch_resolved(g, Err("HTTP 404 Not Found"));

        let events = emitted(&effects);
        assert_eq!(
            events,
            vec![&ControllerEvent::FetchFailed {
                leaf_id: LeafId::from("Slate-4"),
                reason: "HTTP 404 Not Found".to_string(),
            }]
        );
        assert_eq!(c.state().phase(), Phase::Unavailable);
        assert!(c.state().visible());
        assert_eq!(c.state().loaded_record().unwrap().shader_name, "wood_shader");
        assert_eq!(c.state().last_emitted().leaf_id, Some(LeafId::from("Oak-123")));
    }

    // =========================================================================
    // External pushes
    // =========================================================================

    #[test]
    fn test_external_same_leaf_passes_through() {
        let mut c = loaded_oak();
        let generation = c.state().generation();
        let effects = c.apply_external_selection(SelectionPath::new(["Wood", "Oak-123"]));
        assert!(effects.is_empty());
        assert_eq!(c.state().generation(), generation);
        assert_eq!(c.state().phase(), Phase::Loaded);
    }

    #[test]
    fn test_external_new_leaf_fetches_without_notify() {
        let mut c = loaded_oak();
        let effects = c.apply_external_selection(SelectionPath::new(["Stone", "Slate-4"]));
        assert_eq!(effects.len(), 1);
        assert_eq!(fetches(&effects)[0].leaf_id, LeafId::from("Slate-4"));
    }

    #[test]
    fn test_external_empty_resets() {
        let mut c = loaded_oak();
        assert!(c.apply_external_selection(SelectionPath::empty()).is_empty());
        assert_eq!(c.state().phase(), Phase::Empty);
    }

    #[test]
    fn test_external_options_remerge_without_fetch() {
        let mut c = loaded_oak();
        let patch = OptionsPatch {
            main_texture_reference: Some("uploads/new.png".to_string()),
            api_query: ApiQueryPatch { api_version: Some(2), ..Default::default() },
            ..Default::default()
        };
        assert!(c.apply_external_options(&patch).is_empty());
        assert_eq!(c.state().options().api_query.api_version, 2);
        assert!(c.state().options().api_query.show_option);

        // Next assembly picks up the new texture reference
        let effects = c.parameters_edited(vec![ParameterValue::new("roughness", 0.1)]).unwrap();
        assert_eq!(only_config(&effects).main_texture, "uploads/new.png");

        // Next fetch picks up the new version
        let effects = c.selection_changed(SelectionPath::new(["Wood", "Oak-123"]));
        assert_eq!(fetches(&effects)[0].query.version, 2);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    #[test]
    fn test_toggle_is_noop_without_leaf() {
        let mut c = mounted();
        assert!(c.toggle().is_empty());
        assert!(!c.state().visible());
        assert!(!c.toggle_affordance().enabled);
    }

    #[test]
    fn test_toggle_never_fetches_or_emits() {
        let mut c = loaded_oak();
        assert!(c.toggle().is_empty());
        assert!(c.state().visible());
        assert!(c.panel_config().visible);
        assert_eq!(c.panel_config().parameter_schemas.len(), 1);
    }
}
