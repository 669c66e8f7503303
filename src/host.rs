use crate::config::HostMode;
use crate::console::ConsoleReporter;
use crate::error::IttError;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// One line from the running script, tagged by stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRecord {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub error_records: usize,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

type Waiter = Box<dyn FnOnce() -> Result<Option<i32>, IttError> + Send>;

/// A script that has been started. Drain [`Execution::records`] to the end,
/// then call [`Execution::wait`].
pub struct Execution {
    records: Receiver<OutputRecord>,
    waiter: Waiter,
}

impl Execution {
    pub fn new(records: Receiver<OutputRecord>, waiter: Waiter) -> Self {
        Self { records, waiter }
    }

    /// Blocks for each record; ends once both output streams have closed.
    pub fn records(&self) -> mpsc::Iter<'_, OutputRecord> {
        self.records.iter()
    }

    pub fn wait(self) -> Result<Option<i32>, IttError> {
        (self.waiter)()
    }
}

/// Runs script text in a single interpreter session.
pub trait ScriptHost {
    fn invoke(&self, script: &str) -> Result<Execution, IttError>;
}

pub struct PowerShellHost {
    program: String,
    mode: HostMode,
}

impl PowerShellHost {
    pub fn new(program: impl Into<String>, mode: HostMode) -> Self {
        Self { program: program.into(), mode }
    }

    fn resolve(&self) -> Result<PathBuf, IttError> {
        which::which(&self.program).map_err(|e| {
            IttError::ScriptExecution(format!("cannot find '{}' on PATH: {e}", self.program))
        })
    }

    fn command(&self, script: &str) -> Result<Command, IttError> {
        let mut cmd = Command::new(self.resolve()?);
        cmd.args([
            "-NoProfile",
            "-NonInteractive",
            "-ExecutionPolicy",
            "Bypass",
            "-Command",
            script,
        ]);
        cmd.stdin(Stdio::null());
        Ok(cmd)
    }

    fn spawn_streaming(&self, script: &str) -> Result<Execution, IttError> {
        let mut child: Child = self
            .command(script)?
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| IttError::ScriptExecution(format!("starting {}: {e}", self.program)))?;
        let (tx, rx) = mpsc::channel();
        if let Some(out) = child.stdout.take() {
            pump(out, tx.clone(), OutputRecord::Info);
        }
        if let Some(err) = child.stderr.take() {
            pump(err, tx.clone(), OutputRecord::Error);
        }
        drop(tx); // channel closes when both pumps hit EOF
        let program = self.program.clone();
        Ok(Execution::new(
            rx,
            Box::new(move || {
                child
                    .wait()
                    .map(|status| status.code())
                    .map_err(|e| IttError::ScriptExecution(format!("waiting for {program}: {e}")))
            }),
        ))
    }

    fn run_buffered(&self, script: &str) -> Result<Execution, IttError> {
        let output = self
            .command(script)?
            .output()
            .map_err(|e| IttError::ScriptExecution(format!("running {}: {e}", self.program)))?;
        let (tx, rx) = mpsc::channel();
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            let _ = tx.send(OutputRecord::Info(line.trim_end().to_string()));
        }
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            let _ = tx.send(OutputRecord::Error(line.trim_end().to_string()));
        }
        let code = output.status.code();
        Ok(Execution::new(rx, Box::new(move || Ok(code))))
    }
}

impl ScriptHost for PowerShellHost {
    fn invoke(&self, script: &str) -> Result<Execution, IttError> {
        tracing::debug!(mode = ?self.mode, "invoking {}:\n{script}", self.program);
        match self.mode {
            HostMode::Streaming => self.spawn_streaming(script),
            HostMode::Buffered => self.run_buffered(script),
        }
    }
}

// Lines are decoded lossily; console code pages are not always UTF-8.
fn pump<R>(stream: R, tx: Sender<OutputRecord>, tag: fn(String) -> OutputRecord)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf).trim_end().to_string();
                    if tx.send(tag(line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!("output pump stopped: {e}");
                    break;
                }
            }
        }
    });
}

/// Run `script` and relay its output as it arrives: errors immediately, info
/// lines as an in-place progress line. Script failures are reported, never
/// propagated; only failing to start the host is an `Err`.
pub fn run_to_console(
    host: &dyn ScriptHost,
    script: &str,
    reporter: &dyn ConsoleReporter,
) -> Result<ExecutionResult, IttError> {
    let execution = host.invoke(script)?;
    let mut error_records = 0;
    for record in execution.records() {
        match record {
            OutputRecord::Info(line) if line.trim().is_empty() => {}
            OutputRecord::Info(line) => reporter.progress(&line),
            OutputRecord::Error(line) => {
                error_records += 1;
                reporter.error(&line);
            }
        }
    }
    reporter.end_progress();
    let result = ExecutionResult { exit_code: execution.wait()?, error_records };
    if !result.success() {
        match result.exit_code {
            Some(code) => reporter.error(&format!("[x] Script exited with code {code}")),
            None => reporter.error("[x] Script was terminated"),
        }
    }
    Ok(result)
}
