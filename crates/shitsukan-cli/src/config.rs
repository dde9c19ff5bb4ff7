//! Options file loading and command-line overlays.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use shitsukan_core::OptionsPatch;

/// Load an options patch from a RON file.
///
/// ```ron
/// (
///     api_endpoint: Some("/mg/api/materialinfowithdesc/ptexture"),
///     api_query: (material_id: Some("mat-42")),
///     show_groups: Some(false),
/// )
/// ```
pub fn load_options(path: &Path) -> Result<OptionsPatch> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading options file {}", path.display()))?;
    parse_options(&text).with_context(|| format!("parsing options file {}", path.display()))
}

pub fn parse_options(text: &str) -> Result<OptionsPatch> {
    Ok(ron::from_str(text)?)
}

/// Parse `id=value`. The value is read as JSON when it parses, otherwise
/// taken as a plain string (so `finish=matte` works without quoting).
pub fn parse_assignment(s: &str) -> Result<(String, Value), String> {
    let (id, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected id=value, got '{s}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("empty parameter id in '{s}'"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((id.to_string(), value))
}
