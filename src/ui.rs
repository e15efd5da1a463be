//! User interaction helpers.
//!
//! This module centralizes terminal prompting and clipboard access. No
//! password composition logic lives here.

use std::io::{self, BufRead, Write};

use clipboard::{ClipboardContext, ClipboardProvider};
use tracing::debug;

use crate::error::ClipboardError;

/// Parse a yes/no answer.
///
/// Returns `None` for anything that is not `y`, `yes`, `n` or `no`
/// (case-insensitive, surrounding whitespace ignored).
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Print `prompt` and read one line.
///
/// Returns `Ok(None)` on end of input.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask a yes/no question until a valid answer is given.
///
/// Returns `Ok(None)` on end of input.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<bool>> {
    loop {
        let Some(line) = read_line(input, output, &format!("{} [y/n]: ", prompt))? else {
            return Ok(None);
        };
        match parse_yes_no(&line) {
            Some(answer) => return Ok(Some(answer)),
            None => writeln!(output, "Please answer 'y' or 'n'.")?,
        }
    }
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "\x1b[2J\x1b[H")?;
    output.flush()
}

/// Something that can receive a copied password.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, opened fresh for every copy.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        debug!("password copied to clipboard");
        Ok(())
    }
}

/// Copy `text` if a clipboard is present, treating absence as an error.
pub fn copy_to_clipboard(
    clipboard: Option<&mut (dyn Clipboard + '_)>,
    text: &str,
) -> Result<(), ClipboardError> {
    match clipboard {
        Some(cb) => cb.copy(text),
        None => Err(ClipboardError::Disabled),
    }
}
