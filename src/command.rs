/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// The operating system keeps only the low 8 bits, so `-1` is observed as 255.
pub type ExitCode = i32;

/// Identifier of a built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    Echo,
    Exit,
    Type,
    /// The name matches no registry entry.
    Unknown,
}

/// The fixed, ordered registry of built-in command names.
pub const BUILTINS: [(&str, CommandId); 3] = [
    ("echo", CommandId::Echo),
    ("exit", CommandId::Exit),
    ("type", CommandId::Type),
];

/// Look `name` up in [`BUILTINS`] by exact, case-sensitive match.
pub fn identify(name: &str) -> CommandId {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|&(_, id)| id)
        .unwrap_or(CommandId::Unknown)
}

/// Returns true when `name` is one of the [`BUILTINS`].
pub fn is_builtin(name: &str) -> bool {
    identify(name) != CommandId::Unknown
}

/// What the driving loop should do after a command has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading input and terminate the process with the given status.
    Terminate(ExitCode),
}
