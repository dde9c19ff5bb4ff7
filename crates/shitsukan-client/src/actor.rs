//! Actor-based controller driver.
//!
//! Wraps the pure [`Controller`] in a task that performs its effects. All
//! state mutation happens on that one task, in command order; fetches run as
//! separate tasks and report back through a result channel, so a slow
//! response never blocks selections, edits, or toggles.
//!
//! ```text
//!   ControllerHandle (Clone)     mpsc       ControllerActor (one task)
//!   ┌─────────────────────┐  ─────────▶  ┌────────────────────────────┐
//!   │ .select()           │              │ Controller (reducer)       │
//!   │ .edit_parameters()  │  ◀─────────  │ ChangeEmitter ──▶ owner    │
//!   │ .toggle()           │   oneshot    │ selector hook              │
//!   └─────────────────────┘              └──────┬─────────────▲───────┘
//!                                        spawn  │             │ results
//!                                               ▼             │
//!                                         ConfigFetcher::fetch ┘
//! ```

use std::sync::Arc;

use shitsukan_core::{
    ChangeEmitter, Controller, ControllerError, ControllerState, Effect, FetchRequest, Generation,
    InitialSelection, OptionsPatch, PanelConfig,
};
use shitsukan_types::{ConfigurationRecord, ParameterValue, SelectionPath};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use crate::fetch::{ConfigFetcher, FetchError};

// ============================================================================
// Error Type
// ============================================================================

/// Errors from the controller handle.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    #[error("controller rejected the change: {0}")]
    Rejected(#[from] ControllerError),
    #[error("controller shut down")]
    Shutdown,
}

// ============================================================================
// Commands (internal)
// ============================================================================

enum Command {
    Select {
        path: SelectionPath,
        reply: oneshot::Sender<()>,
    },
    PushSelection {
        path: SelectionPath,
        reply: oneshot::Sender<()>,
    },
    PushOptions {
        options: OptionsPatch,
        reply: oneshot::Sender<()>,
    },
    EditParameters {
        values: Vec<ParameterValue>,
        reply: oneshot::Sender<Result<(), ControllerError>>,
    },
    Toggle {
        reply: oneshot::Sender<bool>,
    },
    State {
        reply: oneshot::Sender<ControllerState>,
    },
    Panel {
        reply: oneshot::Sender<PanelConfig>,
    },
    WaitIdle {
        reply: oneshot::Sender<()>,
    },
}

/// A finished fetch, tagged with the generation it was issued under.
struct FetchOutcome {
    generation: Generation,
    result: Result<ConfigurationRecord, FetchError>,
}

/// Callback for selections the user made in the selector.
pub type SelectorHook = Box<dyn FnMut(&SelectionPath) + Send>;

// ============================================================================
// ControllerHandle (public API)
// ============================================================================

/// Cloneable handle to a running controller.
///
/// Each method sends a command and awaits its acknowledgement, so by the time
/// a call returns its transition has been applied and its effects started.
#[derive(Clone)]
pub struct ControllerHandle {
    tx: mpsc::UnboundedSender<Command>,
}

macro_rules! request {
    ($self:ident, $variant:ident { $($field:ident),* }) => {{
        let (reply, rx) = oneshot::channel();
        $self.tx
            .send(Command::$variant { $($field,)* reply })
            .map_err(|_| HandleError::Shutdown)?;
        rx.await.map_err(|_| HandleError::Shutdown)
    }};
}

impl ControllerHandle {
    /// The user picked `path` in the selector.
    pub async fn select(&self, path: SelectionPath) -> Result<(), HandleError> {
        request!(self, Select { path })
    }

    /// The owning application pushed a selection value.
    pub async fn push_selection(&self, path: SelectionPath) -> Result<(), HandleError> {
        request!(self, PushSelection { path })
    }

    /// The owning application supplied a new options object.
    pub async fn push_options(&self, options: OptionsPatch) -> Result<(), HandleError> {
        request!(self, PushOptions { options })
    }

    /// The parameter panel reported its full edited value list.
    pub async fn edit_parameters(&self, values: Vec<ParameterValue>) -> Result<(), HandleError> {
        let result: Result<(), ControllerError> = request!(self, EditParameters { values })?;
        Ok(result?)
    }

    /// Flip advanced panel visibility; returns the new visibility.
    pub async fn toggle(&self) -> Result<bool, HandleError> {
        request!(self, Toggle {})
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> Result<ControllerState, HandleError> {
        request!(self, State {})
    }

    /// Current configuration for the parameter panel.
    pub async fn panel(&self) -> Result<PanelConfig, HandleError> {
        request!(self, Panel {})
    }

    /// Resolves once no fetch is in flight and every finished fetch has been
    /// applied or discarded.
    pub async fn wait_idle(&self) -> Result<(), HandleError> {
        request!(self, WaitIdle {})
    }
}

// ============================================================================
// ControllerActor (internal)
// ============================================================================

struct ControllerActor {
    controller: Controller,
    fetcher: Arc<dyn ConfigFetcher>,
    emitter: ChangeEmitter,
    selector_hook: Option<SelectorHook>,
    results_tx: mpsc::UnboundedSender<FetchOutcome>,
    in_flight: usize,
    idle_waiters: Vec<oneshot::Sender<()>>,
}

impl ControllerActor {
    async fn run(
        mut self,
        mut rx: mpsc::UnboundedReceiver<Command>,
        mut results_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    ) {
        loop {
            tokio::select! {
                cmd = rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(outcome) = results_rx.recv() => self.handle_outcome(outcome),
            }
        }
        debug!(emitted = self.emitter.emitted(), "controller shutting down: channel closed");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Select { path, reply } => {
                let effects = self.controller.selection_changed(path);
                self.perform(effects);
                let _ = reply.send(());
            }
            Command::PushSelection { path, reply } => {
                let effects = self.controller.apply_external_selection(path);
                self.perform(effects);
                let _ = reply.send(());
            }
            Command::PushOptions { options, reply } => {
                let effects = self.controller.apply_external_options(&options);
                self.perform(effects);
                let _ = reply.send(());
            }
            Command::EditParameters { values, reply } => {
                let result = self.controller.parameters_edited(values).map(|effects| self.perform(effects));
                let _ = reply.send(result);
            }
            Command::Toggle { reply } => {
                let effects = self.controller.toggle();
                self.perform(effects);
                let _ = reply.send(self.controller.state().visible());
            }
            Command::State { reply } => {
                let _ = reply.send(self.controller.state().clone());
            }
            Command::Panel { reply } => {
                let _ = reply.send(self.controller.panel_config());
            }
            Command::WaitIdle { reply } => {
                if self.in_flight == 0 {
                    let _ = reply.send(());
                } else {
                    self.idle_waiters.push(reply);
                }
            }
        }
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let effects = self.controller.fetch_resolved(outcome.generation, outcome.result);
        self.perform(effects);

        if self.in_flight == 0 {
            for waiter in self.idle_waiters.drain(..) {
                let _ = waiter.send(());
            }
        }
    }

    fn perform(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::NotifySelector(path) => {
                    if let Some(hook) = self.selector_hook.as_mut() {
                        hook(&path);
                    }
                }
                Effect::Fetch(request) => self.spawn_fetch(request),
                Effect::Emit(event) => self.emitter.emit(&event),
            }
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        self.in_flight += 1;
        trace!(leaf = %request.leaf_id, in_flight = self.in_flight, "spawning fetch");
        let fetcher = self.fetcher.clone();
        let results_tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch(&request).await;
            // Receiver gone means the controller shut down; nothing to apply.
            let _ = results_tx.send(FetchOutcome { generation: request.generation, result });
        });
    }
}

// ============================================================================
// Public spawn function
// ============================================================================

/// Everything a controller needs besides its fetcher.
pub struct ControllerConfig {
    pub options: OptionsPatch,
    pub initial: InitialSelection,
    /// Receives every emitted event.
    pub emitter: ChangeEmitter,
    /// Called with each user selection, if set.
    pub selector_hook: Option<SelectorHook>,
}

impl ControllerConfig {
    pub fn new(emitter: ChangeEmitter) -> Self {
        Self {
            options: OptionsPatch::default(),
            initial: InitialSelection::none(),
            emitter,
            selector_hook: None,
        }
    }

    pub fn with_options(mut self, options: OptionsPatch) -> Self {
        self.options = options;
        self
    }

    pub fn with_initial(mut self, initial: InitialSelection) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_selector_hook(mut self, hook: impl FnMut(&SelectionPath) + Send + 'static) -> Self {
        self.selector_hook = Some(Box::new(hook));
        self
    }
}

/// Mount a controller on the current tokio runtime.
///
/// The mount fetch (if an initial selection is present) starts immediately.
/// The controller runs until every handle is dropped.
pub fn spawn_controller(fetcher: Arc<dyn ConfigFetcher>, config: ControllerConfig) -> ControllerHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let (results_tx, results_rx) = mpsc::unbounded_channel();

    let (controller, effects) = Controller::mount(&config.options, config.initial);
    let mut actor = ControllerActor {
        controller,
        fetcher,
        emitter: config.emitter,
        selector_hook: config.selector_hook,
        results_tx,
        in_flight: 0,
        idle_waiters: Vec::new(),
    };
    actor.perform(effects);

    tokio::spawn(actor.run(rx, results_rx));
    ControllerHandle { tx }
}
