//! Plain-text rendering of the parameter panel for `--panel`.

use std::fmt::Write;

use shitsukan_core::{PanelConfig, display_label};

/// Render the selector's display text followed by the panel's parameters,
/// bucketed the way the panel would show them.
///
/// ```text
/// Oak-123
///   [Surface]
///     Roughness = 0.8
///     bump = 1.0
///   tiling = 2
/// ```
pub fn render_panel(labels: &[String], panel: &PanelConfig) -> String {
    let mut out = String::new();
    let label = display_label(labels);
    let _ = writeln!(out, "{}", if label.is_empty() { "(no selection)" } else { label });

    if panel.render_params.is_empty() {
        let _ = writeln!(out, "  (nothing loaded)");
        return out;
    }

    for group in panel.groups() {
        let indent = match group.label {
            Some(label) => {
                let _ = writeln!(out, "  [{label}]");
                "    "
            }
            None => "  ",
        };
        for schema in group.schemas {
            let value = panel
                .render_params
                .value_of(&schema.id)
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(out, "{indent}{} = {value}", schema.display_name());
        }
    }
    out
}
