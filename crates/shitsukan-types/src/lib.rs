//! Shared data types for shitsukan.
//!
//! This crate is the leaf of the workspace: selection paths, the texture
//! configuration record fetched from the material service, the editable
//! parameter values derived from it, and the assembled configuration that
//! the controller hands to its owner. It has **no internal shitsukan
//! dependencies**.
//!
//! # Data Flow
//!
//! ```text
//! SelectionPath ──last element──▶ LeafId
//!                                   │ fetch
//!                                   ▼
//!                         ConfigurationRecord
//!                         ├── shader_name / main_texture_name
//!                         └── parameters: [ParameterSchema]
//!                                   │ defaults, then edits
//!                                   ▼
//!                          [ParameterValue]
//!                                   │
//!                                   ▼
//!                           AssembledConfig  ──▶ owning application
//! ```
//!
//! # Key Types
//!
//! |-------------------------|----------------------------------------------|
//! | Type                    | Purpose                                      |
//! |-------------------------|----------------------------------------------|
//! | [`SelectionPath`]       | Root-to-node walk through the category tree  |
//! | [`LeafId`]              | Identifies one remote texture record         |
//! | [`ConfigurationRecord`] | Fetched shader, texture name, and schemas    |
//! | [`ParameterSchema`]     | One tunable parameter and its value domain   |
//! | [`ParameterValue`]      | Current value of one parameter               |
//! | [`AssembledConfig`]     | Complete render-ready snapshot for the owner |
//! |-------------------------|----------------------------------------------|

pub mod assembled;
pub mod parameter;
pub mod record;
pub mod selection;

pub use assembled::AssembledConfig;
pub use parameter::{ParameterSchema, ParameterValue, ValueDomain};
pub use record::{ConfigurationRecord, DecodeError};
pub use selection::{LeafId, SelectionPath};
