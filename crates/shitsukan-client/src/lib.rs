//! Shitsukan client library
//!
//! Fetches texture records from the material service and drives a
//! [`shitsukan_core::Controller`] on a tokio task, performing the fetches,
//! selector notifications, and emissions its transitions request.

pub mod actor;
pub mod constants;
pub mod fetch;

pub use actor::{ControllerConfig, ControllerHandle, HandleError, SelectorHook, spawn_controller};
pub use fetch::{ConfigFetcher, FetchError, HttpFetcher};
