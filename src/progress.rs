// src/progress.rs
use crate::error::Error;
use crate::pipeline::Stage;

/// Stage-level progress reporting for a pipeline run.
/// Frontends (CLI/viewer) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages to run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    fn stage_done(&mut self, _stage: Stage) {}

    fn stage_failed(&mut self, _stage: Stage, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
