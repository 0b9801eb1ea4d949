//! Shared test fixtures for the prompt and rendering test modules.

use crate::partition::Partition;
use crate::ui::render::{ProgressHandle, Question, RenderSink};
use std::io;
use std::sync::Mutex;

/// Render sink that records calls instead of touching the terminal.
#[derive(Debug, Default)]
pub struct RecordingSink {
    prompts: Mutex<Vec<Question>>,
    validations: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
    progress_labels: Mutex<Vec<String>>,
    rendered: Mutex<Vec<(Vec<usize>, usize)>>,
}

impl RecordingSink {
    pub fn prompts(&self) -> Vec<Question> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    pub fn validations(&self) -> Vec<String> {
        self.validations.lock().expect("validations lock").clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().expect("successes lock").clone()
    }

    pub fn progress_labels(&self) -> Vec<String> {
        self.progress_labels.lock().expect("progress lock").clone()
    }

    /// Size profile and width of each rendered partition.
    pub fn rendered(&self) -> Vec<(Vec<usize>, usize)> {
        self.rendered.lock().expect("rendered lock").clone()
    }
}

impl RenderSink for RecordingSink {
    fn title(&self) -> io::Result<()> {
        Ok(())
    }

    fn prompt(&self, question: Question) -> io::Result<()> {
        self.prompts.lock().expect("prompts lock").push(question);
        Ok(())
    }

    fn validation(&self, msg: &str) {
        self.validations
            .lock()
            .expect("validations lock")
            .push(msg.to_string());
    }

    fn progress(&self, label: &str) -> ProgressHandle {
        self.progress_labels
            .lock()
            .expect("progress lock")
            .push(label.to_string());
        ProgressHandle::disabled(label.to_string())
    }

    fn success(&self, msg: &str) {
        self.successes
            .lock()
            .expect("successes lock")
            .push(msg.to_string());
    }

    fn groups(&self, partition: &Partition, terminal_width: usize) -> io::Result<()> {
        self.rendered
            .lock()
            .expect("rendered lock")
            .push((partition.size_profile(), terminal_width));
        Ok(())
    }

    fn error(&self, _msg: &str) {}
}
