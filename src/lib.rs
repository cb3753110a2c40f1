//! A tiny interactive command interpreter.
//!
//! This crate turns a line of input into whitespace-separated tokens, identifies the
//! first token as one of a handful of built-in commands (`echo`, `exit`, `type`) and
//! runs it. Names that are not built in are reported as not found; `type` can still
//! locate them as executables on `PATH`.
//!
//! The main entry point is [`Interpreter`]. It never terminates the process by itself:
//! `exit` is surfaced as [`Flow::Terminate`] and the caller decides what to do with it.

mod builtin;
pub mod command;
pub mod env;
pub mod error;
mod interpreter;
pub mod lexer;
pub mod resolver;

pub use command::{ExitCode, Flow};
pub use error::ShellError;
/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
