use crate::command::{ExitCode, Flow};
use crate::env::Environment;
use crate::error::ShellError;
use crate::resolver::{Resolution, resolve};
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;

/// Built-in commands known to the shell at compile time.
///
/// A builtin is first built from the full token list (`tokens[0]` is the command name)
/// and then executed in-process against the provided output sink.
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the command, e.g. "echo" or "type".
    fn name() -> &'static str;

    /// Extracts the command's arguments from the tokens. Never fails; commands
    /// report unusable arguments from `execute`.
    fn from_tokens(tokens: &[String]) -> Self;

    /// Executes the command, writing its output to `stdout`.
    ///
    /// Diagnostics are returned as [`ShellError`]s; the dispatcher decides which sink
    /// they are reported to.
    fn execute(self, stdout: &mut dyn Write, env: &Environment) -> Result<Flow, ShellError>;
}

/// Parse and run builtin `T` in one step.
pub(crate) fn run<T: BuiltinCommand>(
    tokens: &[String],
    stdout: &mut dyn Write,
    env: &Environment,
) -> Result<Flow, ShellError> {
    log::debug!("running builtin {}", T::name());
    T::from_tokens(tokens).execute(stdout, env)
}

/// Write the arguments to standard output, separated by single spaces and followed
/// by a newline.
pub struct Echo {
    /// values to print as-is.
    pub args: Vec<String>,
}

impl BuiltinCommand for Echo {
    fn name() -> &'static str {
        "echo"
    }

    fn from_tokens(tokens: &[String]) -> Self {
        Self {
            args: tokens.iter().skip(1).cloned().collect(),
        }
    }

    fn execute(self, stdout: &mut dyn Write, _env: &Environment) -> Result<Flow, ShellError> {
        writeln!(stdout, "{}", self.args.join(" "))?;
        Ok(Flow::Continue)
    }
}

/// Leading `[+-]?digits` prefix, as C's `atoi` reads it.
static STATUS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("status pattern is valid"));

/// Parse an exit status the way `atoi` does: the longest leading number counts and
/// anything without one is 0. The number saturates at the `i64` bounds and is then
/// truncated to `i32`, so out-of-range values wrap like `(int)strtol(..)`.
pub(crate) fn parse_status(arg: &str) -> ExitCode {
    let Some(digits) = STATUS_PREFIX.find(arg).map(|m| m.as_str()) else {
        return 0;
    };
    let value = digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });
    value as ExitCode
}

/// Exit the shell with the given status (0 when absent or malformed).
pub struct Exit {
    pub status: ExitCode,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn from_tokens(tokens: &[String]) -> Self {
        Self {
            status: tokens.get(1).map_or(0, |arg| parse_status(arg)),
        }
    }

    fn execute(self, _stdout: &mut dyn Write, _env: &Environment) -> Result<Flow, ShellError> {
        Ok(Flow::Terminate(self.status))
    }
}

/// Report how a name would be interpreted: builtin, executable on PATH, or neither.
pub struct Type {
    /// name to look up. Tokens after the first are ignored.
    pub target: Option<String>,
}

impl BuiltinCommand for Type {
    fn name() -> &'static str {
        "type"
    }

    fn from_tokens(tokens: &[String]) -> Self {
        Self {
            target: tokens.get(1).cloned(),
        }
    }

    fn execute(self, stdout: &mut dyn Write, env: &Environment) -> Result<Flow, ShellError> {
        let target = self.target.ok_or(ShellError::MissingArgument(Self::name()))?;
        match resolve(&target, env) {
            Resolution::Builtin => writeln!(stdout, "{} is a shell builtin", target)?,
            Resolution::Found(path) => writeln!(stdout, "{} is {}", target, path.display())?,
            Resolution::NotFound => return Err(ShellError::UnresolvedName(target)),
        }
        Ok(Flow::Continue)
    }
}
