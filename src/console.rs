use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Everything user-facing goes through here; nothing else touches terminal state.
pub trait ConsoleReporter {
    fn info(&self, text: &str);
    fn warn(&self, text: &str);
    fn error(&self, text: &str);
    /// Replace the current progress line with `text`.
    fn progress(&self, text: &str);
    /// Clear the progress line, if one is showing.
    fn end_progress(&self);
}

pub struct TerminalReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { spinner: Mutex::new(None) }
    }

    // Clears the spinner around the write so the progress line stays last.
    fn line(&self, text: String, to_stderr: bool) {
        let emit = || {
            if to_stderr {
                eprintln!("{text}");
            } else {
                println!("{text}");
            }
        };
        let guard = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        match guard.as_ref() {
            Some(pb) => pb.suspend(emit),
            None => emit(),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter for TerminalReporter {
    fn info(&self, text: &str) {
        self.line(text.to_string(), false);
    }

    fn warn(&self, text: &str) {
        self.line(text.yellow().to_string(), false);
    }

    fn error(&self, text: &str) {
        self.line(text.red().to_string(), true);
    }

    fn progress(&self, text: &str) {
        let mut guard = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        let pb = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                pb.set_style(style);
            }
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        });
        pb.set_message(text.trim_end().to_string());
    }

    fn end_progress(&self) {
        let mut guard = self.spinner.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }
}

/// Source of yes/no answers for the confirmation prompt.
pub trait Prompt {
    /// Returns the raw line the user typed, without the trailing newline.
    fn read_answer(&mut self, question: &str) -> io::Result<String>;
}

pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        let mut out = io::stdout();
        writeln!(out, "{}", question.yellow())?;
        out.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Only "yes" and "y" (any case, surrounding whitespace ignored) count as consent.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Ask `question`; a read error counts as a refusal.
pub fn confirm(prompt: &mut dyn Prompt, question: &str) -> bool {
    match prompt.read_answer(question) {
        Ok(answer) => is_affirmative(&answer),
        Err(e) => {
            tracing::warn!("reading confirmation failed: {e}");
            false
        }
    }
}
