use argh::FromArgs;
use tiny_shell::Interpreter;

#[derive(FromArgs)]
/// A tiny interactive shell with `echo`, `exit` and `type` builtins.
struct Args {
    #[argh(option, default = "String::from(\"$ \")")]
    /// prompt printed before each line.
    prompt: String,

    #[argh(option, default = "String::from(\"warn\")")]
    /// log filter used when RUST_LOG is not set (e.g. "debug").
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level))
        .init();

    let status = Interpreter::default().repl(&args.prompt)?;
    std::process::exit(status)
}
