//! # pitwall-ops
//!
//! The profile operation pipeline: an ordered list of input steps (each
//! yielding a whole profile), an implicit merge, and an ordered list of
//! output sinks, with per-step result tracking published over a watch
//! channel. Used for import, export, duplication, merge-into/merge-from,
//! and sync workflows.

pub mod context;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod preset;

pub use context::OpContext;
pub use error::OpError;
pub use input::{InputSource, OperationInput};
pub use output::{OperationOutput, OutputSink};
pub use pipeline::{OperationState, OperationStatus, ProfileOperation, StepResult};
pub use preset::OperationPreset;
