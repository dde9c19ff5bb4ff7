//! Shitsukan command-line driver.
//!
//! Mounts a texture configuration controller against a material service,
//! selects a category path, optionally edits parameters, and prints every
//! emitted event as one JSON line on stdout.
//!
//! Usage:
//!   # Fetch Wood / Oak-123 and print its default configuration
//!   shitsukan Wood Oak-123
//!
//!   # Against another service, with an options file and two edits
//!   shitsukan --base-url http://materials:8080 --options dev.ron \
//!       --set roughness=0.8 --set finish=matte Wood Oak-123
//!
//!   # Also show the parameter panel, grouped, on stderr
//!   shitsukan --panel Wood Oak-123
//!
//! Logs go to stderr; set `RUST_LOG=shitsukan_core=debug` for transitions.

mod config;
mod panel;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use serde_json::Value;
use shitsukan_client::constants::DEFAULT_BASE_URL;
use shitsukan_client::{ControllerConfig, HttpFetcher, spawn_controller};
use shitsukan_core::{ChangeEmitter, ControllerEvent, InitialSelection, OptionsPatch, Phase};
use shitsukan_types::{ParameterValue, SelectionPath};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt};

/// Texture configuration controller driver.
#[derive(Parser, Debug)]
#[command(name = "shitsukan")]
#[command(about = "Select a texture by category path and print its assembled configuration")]
struct Args {
    /// Category path from root to leaf; the last segment is the texture id
    #[arg(required = true)]
    path: Vec<String>,

    /// Material service base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// RON file with controller options
    #[arg(long)]
    options: Option<PathBuf>,

    /// Override the record endpoint path
    #[arg(long)]
    endpoint: Option<String>,

    /// Material being edited (sent with the initial fetch)
    #[arg(long)]
    material_id: Option<String>,

    /// Service API version
    #[arg(long)]
    api_version: Option<u32>,

    /// Ask the service to hide mix/dirt options
    #[arg(long)]
    hide_options: bool,

    /// Uploaded main texture reference copied into the output
    #[arg(long)]
    main_texture: Option<String>,

    /// Parameter edit, `id=value` (value parsed as JSON when possible)
    #[arg(long = "set", value_parser = config::parse_assignment)]
    edits: Vec<(String, Value)>,

    /// Pretty-print emitted JSON
    #[arg(long)]
    pretty: bool,

    /// Print the parameter panel to stderr after edits are applied
    #[arg(long)]
    panel: bool,
}

impl Args {
    fn options_patch(&self) -> Result<OptionsPatch> {
        let mut patch = match &self.options {
            Some(path) => config::load_options(path)?,
            None => OptionsPatch::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            patch.api_endpoint = Some(endpoint.clone());
        }
        if let Some(id) = &self.material_id {
            patch.api_query.material_id = Some(id.clone());
        }
        if let Some(version) = self.api_version {
            patch.api_query.api_version = Some(version);
        }
        if self.hide_options {
            patch.api_query.show_option = Some(false);
        }
        if let Some(texture) = &self.main_texture {
            patch.main_texture_reference = Some(texture.clone());
        }
        Ok(patch)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let path = SelectionPath::new(args.path.iter().cloned());
    let fetcher = Arc::new(HttpFetcher::new(args.base_url.clone())?);

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let emitter = ChangeEmitter::new(move |event: &ControllerEvent| {
        let _ = events_tx.send(event.clone());
    });
    let config = ControllerConfig::new(emitter)
        .with_options(args.options_patch()?)
        .with_initial(InitialSelection::value(path.clone()));

    tracing::info!(path = %path, base_url = %args.base_url, "mounting controller");
    let handle = spawn_controller(fetcher, config);
    handle.wait_idle().await?;

    let state = handle.state().await?;
    let editable = state.phase() == Phase::Loaded && !args.edits.is_empty();
    if let Some(record) = state.loaded_record().filter(|_| editable) {
        let mut values: Vec<ParameterValue> = state.parameter_values().to_vec();
        for (id, value) in &args.edits {
            match values.iter_mut().find(|v| &v.id == id) {
                Some(existing) => existing.value = value.clone(),
                None => bail!(
                    "texture {path} has no parameter '{id}' (available: {})",
                    record.parameter_ids().collect::<Vec<_>>().join(", ")
                ),
            }
        }
        handle.edit_parameters(values).await?;
    }

    if args.panel {
        let panel = handle.panel().await?;
        eprint!("{}", panel::render_panel(&args.path, &panel));
    }

    let mut failed = false;
    while let Ok(event) = events_rx.try_recv() {
        failed |= matches!(event, ControllerEvent::FetchFailed { .. });
        let line = if args.pretty {
            serde_json::to_string_pretty(&event)?
        } else {
            serde_json::to_string(&event)?
        };
        println!("{line}");
    }

    if failed {
        bail!("texture configuration unavailable for {path}");
    }
    Ok(())
}
