use std::io;

/// Failures a command can report.
///
/// The `Display` output of each recoverable variant is exactly the message the user
/// sees. Only [`ShellError::Io`] is fatal to the interpreter loop.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The first token names no built-in command.
    #[error("{0}: command not found")]
    UnknownCommand(String),

    /// A command was invoked without a required operand.
    #[error("{0}: missing argument")]
    MissingArgument(&'static str),

    /// `type` was asked about a name that is neither built in nor found on `PATH`.
    #[error("{0}: not found")]
    UnresolvedName(String),

    /// Writing to an output or error sink failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Where a recoverable error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
}

impl ShellError {
    /// The sink a recoverable error is reported to, or `None` for fatal errors.
    ///
    /// Lookup failures go to stdout like ordinary command output, usage errors go
    /// to stderr.
    pub fn sink(&self) -> Option<Sink> {
        match self {
            ShellError::UnknownCommand(_) | ShellError::UnresolvedName(_) => Some(Sink::Stdout),
            ShellError::MissingArgument(_) => Some(Sink::Stderr),
            ShellError::Io(_) => None,
        }
    }
}
