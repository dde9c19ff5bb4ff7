//! Texture configuration controller core.
//!
//! The user walks a category tree with a cascading selector; the leaf of the
//! chosen path names a texture record on the material service. This crate
//! owns what happens next, independent of any UI framework or transport:
//!
//! ```text
//!   selection ──▶ Controller ──Effect::Fetch──▶ (host performs I/O)
//!                    ▲                                │
//!                    └──────── fetch_resolved ◀───────┘
//!                    │
//!                    ├── derive_defaults(schemas) ─▶ parameter values
//!                    ├── assemble(state)          ─▶ AssembledConfig
//!                    └── Effect::Emit             ─▶ ChangeEmitter ─▶ owner
//! ```
//!
//! Every event is a method on [`Controller`] that mutates [`ControllerState`]
//! and returns the [`Effect`]s the host must perform. The reducer itself
//! never does I/O, which keeps the whole state machine unit-testable.
//!
//! Out-of-order fetch completions are resolved with a generation counter:
//! each fetch carries the generation that was current when it was issued, and
//! a result whose generation is no longer current is discarded.

pub mod assemble;
pub mod controller;
pub mod defaults;
pub mod effect;
pub mod emitter;
pub mod error;
pub mod options;
pub mod panel;
pub mod state;
pub mod visibility;

pub use assemble::assemble;
pub use controller::{Controller, InitialSelection};
pub use defaults::derive_defaults;
pub use effect::{ControllerEvent, Effect, FetchRequest};
pub use emitter::{ChangeEmitter, ChangeSink};
pub use error::ControllerError;
pub use options::{
    ApiQueryOptions, ApiQueryPatch, ControllerOptions, DEFAULT_API_ENDPOINT, FetchQuery,
    OptionsPatch,
};
pub use panel::{PanelConfig, ParameterGroup, display_label};
pub use state::{ControllerState, Generation, Phase};
pub use visibility::ToggleAffordance;
