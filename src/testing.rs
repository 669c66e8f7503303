//! Test doubles for the session collaborators.

use crate::config::{EmptyAction, HostConfig, IttConfig};
use crate::console::{ConsoleReporter, Prompt};
use crate::error::IttError;
use crate::host::{Execution, OutputRecord, ScriptHost};
use crate::remote::{InstallScript, RemoteSource};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::Path;
use std::sync::mpsc;

pub const PACKAGES: &str = "https://stub.test/packages";
pub const TWEAKS: &str = "https://stub.test/tweaks";

pub fn config(home: &Path) -> IttConfig {
    IttConfig {
        home: home.to_path_buf(),
        packages_url: PACKAGES.into(),
        tweaks_url: TWEAKS.into(),
        bootstrap_url: "bit.ly/ittea".into(),
        probe: true,
        on_empty: EmptyAction::Bootstrap,
        host: HostConfig { program: Some("powershell".into()), mode: Default::default() },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Warn(String),
    Error(String),
    Progress(String),
    EndProgress,
}

#[derive(Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<Line>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Error(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Info(e) => Some(e),
                _ => None,
            })
            .collect()
    }
}

impl ConsoleReporter for RecordingReporter {
    fn info(&self, text: &str) {
        self.lines.borrow_mut().push(Line::Info(text.into()));
    }
    fn warn(&self, text: &str) {
        self.lines.borrow_mut().push(Line::Warn(text.into()));
    }
    fn error(&self, text: &str) {
        self.lines.borrow_mut().push(Line::Error(text.into()));
    }
    fn progress(&self, text: &str) {
        self.lines.borrow_mut().push(Line::Progress(text.into()));
    }
    fn end_progress(&self) {
        self.lines.borrow_mut().push(Line::EndProgress);
    }
}

/// Replays canned output and remembers every script it was given.
pub struct StubHost {
    output: Vec<OutputRecord>,
    exit_code: Option<i32>,
    fail_start: bool,
    scripts: RefCell<Vec<String>>,
}

impl StubHost {
    pub fn new() -> Self {
        Self::with_output(vec![], Some(0))
    }

    pub fn with_output(output: Vec<OutputRecord>, exit_code: Option<i32>) -> Self {
        Self { output, exit_code, fail_start: false, scripts: RefCell::new(Vec::new()) }
    }

    pub fn unavailable() -> Self {
        Self { fail_start: true, ..Self::new() }
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}

impl ScriptHost for StubHost {
    fn invoke(&self, script: &str) -> Result<Execution, IttError> {
        self.scripts.borrow_mut().push(script.to_string());
        if self.fail_start {
            return Err(IttError::ScriptExecution("cannot find 'powershell' on PATH".into()));
        }
        let (tx, rx) = mpsc::channel();
        for record in &self.output {
            let _ = tx.send(record.clone());
        }
        let code = self.exit_code;
        Ok(Execution::new(rx, Box::new(move || Ok(code))))
    }
}

/// Serves scripts from memory; names without a script answer as missing.
#[derive(Default)]
pub struct StubRemote {
    scripts: HashMap<String, String>,
    /// Probe succeeds but the download is missing.
    flaky: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl StubRemote {
    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.scripts.insert(name.into(), text.into());
        self
    }

    pub fn flaky(mut self, name: &str) -> Self {
        self.flaky.push(name.into());
        self
    }

    /// `"probe <url>"` / `"fetch <url>"` in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn lookup(&self, name: &str, url: &str) -> Result<&String, IttError> {
        self.scripts
            .get(name)
            .ok_or_else(|| IttError::NotFound { name: name.into(), url: url.into() })
    }
}

impl RemoteSource for StubRemote {
    fn probe(&self, name: &str, url: &str) -> Result<(), IttError> {
        self.calls.borrow_mut().push(format!("probe {url}"));
        if self.flaky.iter().any(|f| f == name) {
            return Ok(());
        }
        self.lookup(name, url).map(|_| ())
    }

    fn fetch(&self, name: &str, url: &str) -> Result<InstallScript, IttError> {
        self.calls.borrow_mut().push(format!("fetch {url}"));
        let text = self.lookup(name, url)?.clone();
        Ok(InstallScript { url: url.into(), text })
    }
}

/// Answers from a queue and counts how often it was asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    reads: Cell<usize>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| format!("{a}\n")).collect(), reads: Cell::new(0) }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_answer(&mut self, _question: &str) -> io::Result<String> {
        self.reads.set(self.reads.get() + 1);
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }
}
