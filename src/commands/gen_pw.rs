//! Generate a single password and exit.

use std::io::{self, Write};
use std::process::ExitCode;

use rand::Rng;
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::GenArgs;
use crate::error::GenError;
use crate::generator::Request;
use crate::ui::{self, Clipboard, SystemClipboard};

pub fn run(args: GenArgs) -> ExitCode {
    let mut system = SystemClipboard;
    let clipboard: Option<&mut dyn Clipboard> = if args.copy {
        Some(&mut system)
    } else {
        None
    };

    let stdout = io::stdout();
    match generate_once(&args, &mut rand::rngs::OsRng, clipboard, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Error)]
enum GenPwError {
    #[error(transparent)]
    Gen(#[from] GenError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Print one password to `out`, then copy it if a clipboard was given.
///
/// Clipboard failure only prints a warning on stderr.
fn generate_once<G: Rng, W: Write>(
    args: &GenArgs,
    rng: &mut G,
    clipboard: Option<&mut dyn Clipboard>,
    out: &mut W,
) -> Result<(), GenPwError> {
    let password = Zeroizing::new(Request::new(args.length, args.classes()).generate(rng)?);

    writeln!(out, "{}", password.as_str())?;

    if let Some(cb) = clipboard {
        if let Err(e) = ui::copy_to_clipboard(Some(cb), &password) {
            debug!(error = %e, "clipboard copy failed");
            eprintln!("Failed to copy to clipboard: {}", e);
        }
    }
    Ok(())
}
