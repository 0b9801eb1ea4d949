//! Spinner primitives for the cosmetic "working" stages.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::thread;
use std::time::Duration;

/// RAII handle for an active spinner.
pub struct ProgressHandle {
    /// Stop signal shared with the spinner thread.
    stop: Arc<AtomicBool>,
    /// Label text, replaceable while the spinner runs.
    label: Arc<Mutex<String>>,
    /// Background writer thread, present only when the spinner is active.
    thread: Option<thread::JoinHandle<()>>,
}

impl ProgressHandle {
    /// Construct a no-op handle (used when stderr is not a terminal).
    pub fn disabled(label: String) -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(true)),
            label: Arc::new(Mutex::new(label)),
            thread: None,
        }
    }

    /// Whether a spinner thread is drawing.
    pub fn is_active(&self) -> bool {
        self.thread.is_some()
    }

    /// Replace the text shown next to the spinner frame.
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut current) = self.label.lock() {
            *current = label.into();
        }
    }

    /// Current label text.
    pub fn label(&self) -> String {
        self.label
            .lock()
            .map(|label| label.clone())
            .unwrap_or_default()
    }

    /// Stop and clean up the spinner thread.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Start a spinner on stderr.
pub fn start_progress(label: impl Into<String>, color: bool) -> ProgressHandle {
    let label = label.into();
    if !io::stderr().is_terminal() {
        return ProgressHandle::disabled(label);
    }

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let label = Arc::new(Mutex::new(label));
    let shared_label = Arc::clone(&label);

    let thread = thread::spawn(move || {
        let mut idx = 0usize;
        while !stop_flag.load(Ordering::Relaxed) {
            let text = shared_label
                .lock()
                .map(|label| label.clone())
                .unwrap_or_default();
            let line = progress_line(
                settings::PROGRESS_FRAMES[idx % settings::PROGRESS_FRAMES.len()],
                &text,
                color,
            );
            let mut err = io::stderr();
            let _ = write!(err, "{line}");
            let _ = err.flush();
            idx += 1;
            thread::sleep(Duration::from_millis(settings::PROGRESS_TICK_MS));
        }

        clear_progress_line();
    });

    ProgressHandle {
        stop,
        label,
        thread: Some(thread),
    }
}

fn progress_line(frame: char, label: &str, color: bool) -> String {
    if color {
        format!(
            "{}{} {}",
            settings::PROGRESS_CLEAR_LINE,
            frame.to_string().with(settings::COLOR_PROGRESS_FRAME),
            label.with(settings::COLOR_PROGRESS_LABEL),
        )
    } else {
        format!("{}{frame} {label}", settings::PROGRESS_CLEAR_LINE)
    }
}

fn clear_progress_line() {
    let mut err = io::stderr();
    let _ = write!(err, "{}", settings::PROGRESS_CLEAR_LINE);
    let _ = err.flush();
}
