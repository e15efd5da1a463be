//! Command dispatch layer for pwgen.
//!
//! Maps parsed CLI commands to their implementations. With no subcommand
//! the interactive shell runs.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::error;

use crate::cli::{Cli, Commands, ShellArgs};
use crate::ui::SystemClipboard;

pub mod gen_pw;
pub mod shell;

pub fn dispatch(cli: Cli) -> ExitCode {
    match cli.command {
        Some(Commands::Gen(args)) => gen_pw::run(args),
        Some(Commands::Shell(args)) => run_shell(args),
        None => run_shell(ShellArgs::default()),
    }
}

fn run_shell(args: ShellArgs) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let clear = !args.no_clear && stdout.is_terminal();

    let mut shell = shell::Shell::new(stdin.lock(), stdout.lock(), rand::rngs::OsRng)
        .clear_screen(clear);
    if !args.no_copy {
        shell = shell.with_clipboard(Box::new(SystemClipboard));
    }

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal I/O failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
