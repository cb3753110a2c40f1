use crate::builtin::{self, Echo, Exit, Type};
use crate::command::{CommandId, ExitCode, Flow, identify};
use crate::env::Environment;
use crate::error::{ShellError, Sink};
use crate::lexer;
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

/// A minimal shell-like interpreter for the built-in commands.
///
/// The interpreter holds an [`Environment`] view and routes each tokenized line to a
/// builtin. Dispatch is stateless: every call depends only on its tokens and the
/// current value of `PATH`.
///
/// Example
/// ```
/// use tiny_shell::{Flow, Interpreter};
/// let sh = Interpreter::default();
/// let mut out = Vec::new();
/// let flow = sh.run_line("echo hello   world", &mut out, &mut std::io::sink()).unwrap();
/// assert_eq!(flow, Flow::Continue);
/// assert_eq!(out, b"hello world\n");
/// ```
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create a new interpreter that reads variables through `env`.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Identify `tokens[0]` and run the matching builtin.
    ///
    /// An empty token list is a no-op. Unknown commands, unresolved `type` targets and
    /// missing arguments are reported to their sink and do not stop the loop. Only
    /// failures to write to a sink are returned as errors.
    pub fn dispatch(
        &self,
        tokens: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<Flow> {
        let Some(name) = tokens.first() else {
            return Ok(Flow::Continue);
        };

        let result = match identify(name) {
            CommandId::Echo => builtin::run::<Echo>(tokens, stdout, &self.env),
            CommandId::Exit => builtin::run::<Exit>(tokens, stdout, &self.env),
            CommandId::Type => builtin::run::<Type>(tokens, stdout, &self.env),
            CommandId::Unknown => Err(ShellError::UnknownCommand(name.clone())),
        };

        let err = match result {
            Ok(flow) => return Ok(flow),
            Err(err) => err,
        };
        let sink: &mut dyn Write = match err.sink() {
            Some(Sink::Stdout) => stdout,
            Some(Sink::Stderr) => stderr,
            None => return Err(err).with_context(|| format!("{}: failed", name)),
        };
        writeln!(sink, "{}", err).context("failed to report error")?;
        Ok(Flow::Continue)
    }

    /// Tokenize a single line and dispatch it.
    pub fn run_line(
        &self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<Flow> {
        let tokens = lexer::tokenize(line);
        log::debug!("tokens = {:?}", tokens);
        self.dispatch(&tokens, stdout, stderr)
    }

    /// Read-Eval-Print Loop over the terminal.
    ///
    /// Returns the status requested by `exit`, or 0 when input ends. Ctrl-C discards
    /// the line being edited and prompts again.
    pub fn repl(&self, prompt: &str) -> anyhow::Result<ExitCode> {
        let mut rl = DefaultEditor::new().context("failed to initialise line editor")?;
        let mut stdout = std::io::stdout();
        let mut stderr = std::io::stderr();

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let tokens = lexer::tokenize(&line);
                    if tokens.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str())?;
                    log::debug!("tokens = {:?}", tokens);
                    let flow = self.dispatch(&tokens, &mut stdout, &mut stderr)?;
                    stdout.flush()?;
                    if let Flow::Terminate(status) = flow {
                        log::debug!("exit requested with status {}", status);
                        return Ok(status);
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    writeln!(stdout)?;
                    return Ok(0);
                }
                Err(err) => return Err(err).context("failed to read line"),
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter backed by the live process environment.
    fn default() -> Self {
        Self::new(Environment::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::TempDir;

    struct Captured {
        flows: Vec<Flow>,
        out: String,
        err: String,
    }

    /// Feed lines until one of them terminates, the way the REPL does.
    fn run_lines(interp: &Interpreter, lines: &[&str]) -> Captured {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut flows = Vec::new();
        for line in lines {
            let flow = interp.run_line(line, &mut out, &mut err).unwrap();
            flows.push(flow);
            if let Flow::Terminate(_) = flow {
                break;
            }
        }
        Captured {
            flows,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn isolated() -> Interpreter {
        Interpreter::new(Environment::isolated())
    }

    #[test]
    fn test_empty_line_is_noop() {
        let res = run_lines(&isolated(), &["", "   \t "]);
        assert_eq!(res.flows, vec![Flow::Continue, Flow::Continue]);
        assert!(res.out.is_empty());
        assert!(res.err.is_empty());
    }

    #[test]
    fn test_non_delimiter_whitespace_is_a_command_name() {
        let res = run_lines(&isolated(), &["\r", "\u{a0}"]);
        assert_eq!(res.flows, vec![Flow::Continue, Flow::Continue]);
        assert_eq!(
            res.out,
            "\r: command not found\n\u{a0}: command not found\n"
        );
    }

    #[test]
    fn test_unknown_command_then_loop_continues() {
        let res = run_lines(&isolated(), &["foobar arg1", "echo still here"]);
        assert_eq!(res.flows, vec![Flow::Continue, Flow::Continue]);
        assert_eq!(res.out, "foobar: command not found\nstill here\n");
        assert!(res.err.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_unknown_command_is_not_launched_even_if_on_path() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("tool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut env = Environment::isolated();
        env.set_var("PATH", dir.path());
        let res = run_lines(&Interpreter::new(env), &["tool", "type tool"]);
        assert_eq!(
            res.out,
            format!("tool: command not found\ntool is {}\n", tool.display())
        );
    }

    #[test]
    fn test_type_missing_argument_goes_to_stderr() {
        let res = run_lines(&isolated(), &["type"]);
        assert_eq!(res.flows, vec![Flow::Continue]);
        assert!(res.out.is_empty());
        assert_eq!(res.err, "type: missing argument\n");
    }

    #[test]
    fn test_type_not_found_goes_to_stdout() {
        let dir = TempDir::new().unwrap();
        let mut env = Environment::isolated();
        env.set_var("PATH", dir.path());
        let res = run_lines(&Interpreter::new(env), &["type nonexistent_xyz"]);
        assert_eq!(res.out, "nonexistent_xyz: not found\n");
        assert!(res.err.is_empty());
    }

    #[test]
    fn test_exit_stops_processing() {
        let res = run_lines(&isolated(), &["echo before", "exit 42", "echo after"]);
        assert_eq!(res.flows, vec![Flow::Continue, Flow::Terminate(42)]);
        assert_eq!(res.out, "before\n");
    }

    #[test]
    fn test_exit_defaults() {
        let res = run_lines(&isolated(), &["exit"]);
        assert_eq!(res.flows, vec![Flow::Terminate(0)]);
        let res = run_lines(&isolated(), &["exit abc"]);
        assert_eq!(res.flows, vec![Flow::Terminate(0)]);
    }

    #[test]
    fn test_dispatch_empty_tokens() {
        let flow = isolated()
            .dispatch(&[], &mut io::sink(), &mut io::sink())
            .unwrap();
        assert_eq!(flow, Flow::Continue);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_propagate() {
        let interp = isolated();
        assert!(
            interp
                .run_line("echo hi", &mut BrokenPipe, &mut io::sink())
                .is_err()
        );
        assert!(
            interp
                .run_line("nope", &mut BrokenPipe, &mut io::sink())
                .is_err()
        );
    }
}
