//! Spawning one external command and handing its output to a detector.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::completion::Completion;
use crate::detector::CompletionDetector;
use crate::error::ShellError;

/// One external call: argument list plus working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    pub command: Vec<String>,
    pub working_dir: PathBuf,
}

impl ShellInvocation {
    pub fn new<I, S>(command: I, working_dir: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
            working_dir: working_dir.into(),
        }
    }

    /// Append positional arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command.extend(args.into_iter().map(Into::into));
        self
    }

    /// The command line as a single space-joined string, for logs.
    #[must_use]
    pub fn display(&self) -> String {
        self.command.join(" ")
    }

    fn spawn(&self) -> Result<Child, ShellError> {
        let (program, args) = self.command.split_first().ok_or(ShellError::EmptyCommand)?;
        Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ShellError::Spawn {
                program: program.clone(),
                working_dir: self.working_dir.clone(),
                source,
            })
    }
}

/// Runs invocations to completion. Stateless; no retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run `invocation` and let `detector` interpret its standard output.
    ///
    /// Blocks until the process exits. Spawn and read failures come back as
    /// [`Completion::Failed`].
    pub fn run(
        &self,
        invocation: &ShellInvocation,
        detector: &dyn CompletionDetector,
    ) -> Completion {
        log_start(invocation);
        match Self::execute(invocation, detector) {
            Ok(completion) => completion,
            Err(error) => Completion::Failed(error.to_string()),
        }
    }

    /// Convenience for commands run only for their side effects (dependency
    /// installs): success means exit status zero.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` if the process cannot be started or awaited.
    pub fn run_to_exit(&self, invocation: &ShellInvocation) -> Result<bool, ShellError> {
        log_start(invocation);
        let mut child = invocation.spawn()?;
        let drained = match child.stdout.take() {
            Some(stdout) => io::copy(&mut BufReader::new(stdout), &mut io::sink()),
            None => Ok(0),
        };
        Ok(reap(&mut child, drained)?.success())
    }

    fn execute(
        invocation: &ShellInvocation,
        detector: &dyn CompletionDetector,
    ) -> Result<Completion, ShellError> {
        let mut child = invocation.spawn()?;
        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ShellError::NoStdout);
        };
        let mut reader = BufReader::new(stdout);

        let completion = detector.detect(&mut reader);

        // Keep the pipe open until the tool exits so it never writes into a
        // closed stream.
        let drained = io::copy(&mut reader, &mut io::sink());
        drop(reader);
        let status = reap(&mut child, drained)?;
        if !status.success() {
            warn!(
                command = %invocation.display(),
                %status,
                "external command exited unsuccessfully"
            );
        }
        Ok(completion)
    }
}

fn log_start(invocation: &ShellInvocation) {
    debug!(
        command = %invocation.display(),
        dir = %invocation.working_dir.display(),
        "running external command"
    );
}

/// Wait for `child` whatever happened to its output, then report the drain
/// error if there was one.
fn reap(child: &mut Child, drained: io::Result<u64>) -> Result<ExitStatus, ShellError> {
    let status = child.wait()?;
    drained?;
    Ok(status)
}
