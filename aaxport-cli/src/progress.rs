//! Terminal progress reporting backed by indicatif.
//!
//! Implements the core `ProgressReporter` trait with a steady-tick spinner,
//! replacing the blocking poll-loop indicator of the original tool: the
//! spinner animates on its own timer thread while the pipeline blocks on an
//! external process.

use aaxport_core::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner-based reporter for interactive runs.
pub struct ConsoleReporter {
    // The pipeline is single-threaded, so interior mutability is enough to
    // swap spinners between stages.
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, message: String) {
        self.clear();
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn clear(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.clear();
    }
}

impl ProgressReporter for ConsoleReporter {
    fn file_started(&self, index: usize, total: usize, filename: &str) {
        self.clear();
        println!("[{}/{}] {}", index + 1, total, filename);
    }

    fn stage_started(&self, message: &str) {
        self.start_spinner(format!("{message} ..."));
    }

    fn stage_finished(&self, message: &str) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_with_message(message.to_string());
        }
    }

    fn chapter_started(&self, current: usize, total: usize, title: &str) {
        let message = format!("Writing chapter {current}/{total}: {title}");
        let mut slot = self.spinner.borrow_mut();
        match slot.as_ref() {
            Some(pb) => pb.set_message(message),
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(message);
                pb.enable_steady_tick(TICK_INTERVAL);
                *slot = Some(pb);
            }
        }
    }
}
