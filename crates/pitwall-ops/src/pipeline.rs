//! The operation run state machine.
//!
//! One run: execute inputs strictly in list order, merge the imported
//! profiles, fan the merged profile out to every output. Per-step results
//! are published incrementally over a watch channel so observers can show
//! live progress without the pipeline knowing about them.

use std::collections::BTreeMap;

use pitwall_core::merge_profiles;
use tokio::sync::watch;

use crate::context::OpContext;
use crate::input::OperationInput;
use crate::output::OperationOutput;

/// Overall run status. `Idle -> Running -> Completed`, re-enterable from
/// `Completed`; there is no direct way back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Outcome of one step, keyed by the step's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Success,
    Error(String),
}

impl StepResult {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Observable snapshot of one run.
#[derive(Debug, Clone, Default)]
pub struct OperationState {
    pub status: OperationStatus,
    pub input_results: BTreeMap<String, StepResult>,
    pub merge_result: Option<StepResult>,
    pub output_results: BTreeMap<String, StepResult>,
}

/// A configured profile operation: ordered inputs, implicit merge, ordered
/// outputs.
///
/// Not designed for concurrent runs of the same instance; start a rerun only
/// after the previous run reaches `Completed`.
pub struct ProfileOperation {
    inputs: Vec<OperationInput>,
    outputs: Vec<OperationOutput>,
    state: watch::Sender<OperationState>,
}

impl ProfileOperation {
    #[must_use]
    pub fn new(inputs: Vec<OperationInput>, outputs: Vec<OperationOutput>) -> Self {
        Self {
            inputs,
            outputs,
            state: watch::channel(OperationState::default()).0,
        }
    }

    #[must_use]
    pub fn inputs(&self) -> &[OperationInput] {
        &self.inputs
    }

    #[must_use]
    pub fn outputs(&self) -> &[OperationOutput] {
        &self.outputs
    }

    /// Watch per-step results and the overall status as they change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OperationState> {
        self.state.subscribe()
    }

    /// Snapshot of the current run state.
    #[must_use]
    pub fn state(&self) -> OperationState {
        self.state.borrow().clone()
    }

    /// Execute one run.
    ///
    /// Inputs run strictly in list order; the first failure aborts the run
    /// (no merge, no outputs) but the run still ends `Completed` so partial
    /// results stay visible. Output failures are recorded per step and never
    /// block sibling outputs.
    pub async fn run(&self, ctx: &OpContext) {
        self.state.send_modify(|state| {
            state.status = OperationStatus::Running;
            state.input_results.clear();
            state.merge_result = None;
            state.output_results.clear();
        });

        let mut imported = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            let result = match input.import(ctx).await {
                Ok(profile) => {
                    imported.push(profile);
                    StepResult::Success
                }
                Err(error) => {
                    tracing::warn!(step = input.id(), %error, "input step failed");
                    StepResult::Error(error.to_string())
                }
            };
            let failed = result.is_error();
            self.state.send_modify(|state| {
                state.input_results.insert(input.id().to_owned(), result);
            });
            if failed {
                self.state
                    .send_modify(|state| state.status = OperationStatus::Completed);
                return;
            }
        }

        let merged = merge_profiles(&imported);
        self.state
            .send_modify(|state| state.merge_result = Some(StepResult::Success));

        for output in &self.outputs {
            let result = match output.export(&merged, ctx).await {
                Ok(()) => StepResult::Success,
                Err(error) => {
                    tracing::warn!(step = output.id(), %error, "output step failed");
                    StepResult::Error(error.to_string())
                }
            };
            self.state.send_modify(|state| {
                state.output_results.insert(output.id().to_owned(), result);
            });
        }

        self.state
            .send_modify(|state| state.status = OperationStatus::Completed);
    }
}
