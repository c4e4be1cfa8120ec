//! Paged output through an external viewer.
//!
//! The viewer reads from a pipe that this process writes rendered verses
//! into. The pipe is created before the viewer is spawned so the two
//! failures stay distinguishable. Every session ends the same way:
//!
//! 1. write all output
//! 2. if nothing was written, terminate the viewer
//! 3. close the write end
//! 4. wait for the viewer to exit
//!
//! The viewer's exit status is logged but not interpreted.

use std::io::{self, PipeWriter};
use std::path::Path;
use std::process::{Child, Command, ExitStatus};

use crate::config::RenderConfig;
use crate::corpus::{Corpus, Query};
use crate::errors::{RenderError, Result};
use crate::render::{render_to, RenderStatus};

/// Program and arguments for the viewer process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerCommand {
    program: String,
    args: Vec<String>,
}

impl PagerCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the viewer invocation from a pager setting such as `less` or
    /// `less -R`. The setting is split into words like a shell would.
    ///
    /// When the program is `less`, these flags follow the user's own words:
    ///
    /// - `-J` status column
    /// - `-I` case-insensitive search
    /// - `-p <search>` start at the first match, when a search is given
    /// - `-R` pass raw color escapes through
    /// - `-f -` read standard input as it arrives
    ///
    /// Any other program gets only the words from the setting.
    pub fn for_search(pager: &str, search: Option<&str>) -> Result<Self> {
        let invalid = |e: io::Error| RenderError::spawn(pager, e);
        let mut words = shell_words::split(pager)
            .map_err(|e| invalid(io::Error::new(io::ErrorKind::InvalidInput, e)))?
            .into_iter();
        let program = words.next().ok_or_else(|| {
            invalid(io::Error::new(
                io::ErrorKind::InvalidInput,
                "pager program is empty",
            ))
        })?;
        let mut args: Vec<String> = words.collect();

        if is_less(&program) {
            args.extend(["-J", "-I"].map(String::from));
            if let Some(search) = search.filter(|s| !s.is_empty()) {
                args.push("-p".to_string());
                args.push(search.to_string());
            }
            args.extend(["-R", "-f", "-"].map(String::from));
        }

        Ok(Self::new(program, args))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn is_less(program: &str) -> bool {
    Path::new(program)
        .file_stem()
        .is_some_and(|stem| stem == "less")
}

/// A running viewer and the write end of its input pipe.
#[derive(Debug)]
pub struct PagerSession {
    child: Child,
    input: PipeWriter,
}

impl PagerSession {
    /// Create the pipe, then launch the viewer reading from it.
    pub fn spawn(command: &PagerCommand) -> Result<Self> {
        let (reader, input) = io::pipe().map_err(RenderError::Pipe)?;

        // The temporary Command owns our copy of the read end and drops it
        // here, so the viewer sees EOF once `input` is closed.
        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(reader)
            .spawn()
            .map_err(|e| RenderError::spawn(&command.program, e))?;

        log::debug!(
            "Spawned pager {} {:?} (pid {})",
            command.program,
            command.args,
            child.id()
        );
        Ok(Self { child, input })
    }

    /// Write end of the viewer's input
    pub fn input(&mut self) -> &mut PipeWriter {
        &mut self.input
    }

    /// Ask the viewer to exit. A viewer that is already gone is fine.
    pub fn terminate(&mut self) {
        log::debug!("Terminating pager (pid {})", self.child.id());

        #[cfg(unix)]
        {
            let pid = self.child.id() as libc::pid_t;
            // SAFETY: kill(2) takes no pointers. The child has not been
            // waited on yet, so its pid cannot have been reused.
            let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
            if rc != 0 {
                log::debug!("Pager already gone: {}", io::Error::last_os_error());
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = self.child.kill() {
                log::debug!("Pager already gone: {}", e);
            }
        }
    }

    /// Close the input pipe and wait for the viewer to exit.
    pub fn finish(self) -> io::Result<ExitStatus> {
        let Self { mut child, input } = self;
        drop(input);
        child.wait()
    }
}

/// Render through the configured pager.
pub fn render_paged<C: Corpus>(
    corpus: &C,
    query: &C::Query,
    config: &RenderConfig,
) -> Result<RenderStatus> {
    let command = PagerCommand::for_search(&config.pager, query.search())?;
    render_with_pager(&command, corpus, query, config)
}

/// Render through an arbitrary viewer command.
///
/// The viewer is terminated when nothing was printed or rendering failed,
/// and it is always waited for before returning.
pub fn render_with_pager<C: Corpus>(
    command: &PagerCommand,
    corpus: &C,
    query: &C::Query,
    config: &RenderConfig,
) -> Result<RenderStatus> {
    let mut session = PagerSession::spawn(command)?;

    let outcome = render_to(session.input(), corpus, query, config);
    if !matches!(outcome, Ok(RenderStatus::Printed)) {
        session.terminate();
    }

    match session.finish() {
        Ok(status) => log::debug!("Pager exited with {}", status),
        Err(e) if outcome.is_err() => log::warn!("Failed to wait for pager: {}", e),
        Err(e) => return Err(e.into()),
    }

    outcome
}
