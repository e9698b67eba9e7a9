// src/viewer/progress.rs
use std::sync::{Arc, Mutex};

use crate::error::Error;
use crate::pipeline::Stage;
use crate::progress::Progress;

/// Mirrors pipeline progress into the status line the window draws.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        self.set_status(format!("Finished {stage} ({}/{})", self.done, self.total));
    }
    fn stage_failed(&mut self, stage: Stage, err: &Error) {
        self.set_status(format!("{stage} failed: {err}"));
    }
    fn finish(&mut self) {
        if self.done == self.total && self.total > 0 {
            self.set_status(format!("Run complete ({}/{})", self.done, self.total));
        }
    }
}
