//! Controller options and their merge with defaults.
//!
//! The owning application supplies a partial [`OptionsPatch`]; the controller
//! always works from a total [`ControllerOptions`] produced by
//! [`ControllerOptions::merged`]. Every recognized key and its default is
//! listed here; there is no open-ended spreading of unknown keys.

use serde::{Deserialize, Serialize};

/// Default path of the texture record endpoint; the leaf id is appended.
pub const DEFAULT_API_ENDPOINT: &str = "/mg/api/materialinfowithdesc/ptexture";

/// Default service API version.
pub const DEFAULT_API_VERSION: u32 = 1;

/// Query options sent to the material service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiQueryOptions {
    /// Whether mix/dirt layers may be configured (on for blended materials).
    pub show_option: bool,
    /// Material being edited; the service returns its saved defaults.
    pub material_id: Option<String>,
    pub api_version: u32,
}

impl Default for ApiQueryOptions {
    fn default() -> Self {
        Self {
            show_option: true,
            material_id: None,
            api_version: DEFAULT_API_VERSION,
        }
    }
}

impl ApiQueryOptions {
    /// Query for fetches triggered by a selection change.
    pub fn selection_query(&self) -> FetchQuery {
        FetchQuery {
            showoption: self.show_option,
            version: self.api_version,
            materialid: None,
        }
    }

    /// Query for the fetch issued at mount, which also carries the material id.
    pub fn mount_query(&self) -> FetchQuery {
        FetchQuery {
            showoption: self.show_option,
            version: self.api_version,
            materialid: self.material_id.clone(),
        }
    }
}

/// Query string parameters of one fetch, named as the service expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchQuery {
    pub showoption: bool,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materialid: Option<String>,
}

/// Complete controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerOptions {
    /// Endpoint path; the leaf id is appended as the last segment.
    pub api_endpoint: String,
    pub api_query: ApiQueryOptions,
    /// Uploaded main texture, copied into every assembled config.
    pub main_texture_reference: String,
    /// Whether the parameter panel renders a preview image.
    pub show_render_preview: bool,
    /// Whether the parameter panel groups parameters.
    pub show_groups: bool,
    /// Whether the parameter panel shows the settings guide.
    pub show_advanced_settings_guide: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_query: ApiQueryOptions::default(),
            main_texture_reference: String::new(),
            show_render_preview: true,
            show_groups: true,
            show_advanced_settings_guide: true,
        }
    }
}

impl ControllerOptions {
    /// Defaults overlaid with `patch`, key by key.
    pub fn merged(patch: &OptionsPatch) -> Self {
        Self::default().overlay(patch)
    }

    /// `self` overlaid with every key `patch` sets.
    pub fn overlay(&self, patch: &OptionsPatch) -> Self {
        let query = &patch.api_query;
        Self {
            api_endpoint: patch.api_endpoint.clone().unwrap_or_else(|| self.api_endpoint.clone()),
            api_query: ApiQueryOptions {
                show_option: query.show_option.unwrap_or(self.api_query.show_option),
                material_id: query
                    .material_id
                    .clone()
                    .or_else(|| self.api_query.material_id.clone()),
                api_version: query.api_version.unwrap_or(self.api_query.api_version),
            },
            main_texture_reference: patch
                .main_texture_reference
                .clone()
                .unwrap_or_else(|| self.main_texture_reference.clone()),
            show_render_preview: patch.show_render_preview.unwrap_or(self.show_render_preview),
            show_groups: patch.show_groups.unwrap_or(self.show_groups),
            show_advanced_settings_guide: patch
                .show_advanced_settings_guide
                .unwrap_or(self.show_advanced_settings_guide),
        }
    }
}

/// Partial query options; unset keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiQueryPatch {
    pub show_option: Option<bool>,
    pub material_id: Option<String>,
    pub api_version: Option<u32>,
}

/// Partial controller options as supplied by the owning application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
    pub api_endpoint: Option<String>,
    pub api_query: ApiQueryPatch,
    pub main_texture_reference: Option<String>,
    pub show_render_preview: Option<bool>,
    pub show_groups: Option<bool>,
    pub show_advanced_settings_guide: Option<bool>,
}
