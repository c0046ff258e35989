use std::sync::Mutex;

use crate::domain::FixerKind;
use crate::ports::Reporter;

#[derive(Default)]
pub struct RecordingReporter {
    steps: Mutex<Vec<FixerKind>>,
    guidance: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<FixerKind> {
        self.steps.lock().unwrap().clone()
    }

    pub fn guidance_lines(&self) -> Vec<String> {
        self.guidance.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn step_started(&self, fixer: FixerKind) {
        self.steps.lock().unwrap().push(fixer);
    }

    fn guidance(&self, message: &str) {
        self.guidance.lock().unwrap().push(message.to_string());
    }
}
