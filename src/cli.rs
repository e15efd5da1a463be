//! Command-line interface definitions for pwgen.
//!
//! This module describes the CLI surface using `clap`. It contains no
//! application logic.

use clap::{Args, Parser, Subcommand};

use crate::charset::{CharClass, CharClasses};

#[derive(Parser, Debug)]
#[command(
    name = "pwgen",
    version,
    about = "Generate random passwords from selected character classes",
    long_about = r#"
pwgen builds random passwords from any mix of lowercase letters, uppercase
letters, digits and special characters. Every selected class is guaranteed
to appear at least once, and the result is shuffled so those characters
do not sit at fixed positions.

Run without a subcommand for the interactive prompt:
  pwgen

Or generate a single password non-interactively:
  pwgen gen --length 24 --no-special --copy
"#
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive prompt
    ///
    /// Asks for a length and which character classes to include, shows
    /// the password, copies it to the clipboard, and repeats until you
    /// decline.
    Shell(ShellArgs),

    /// Generate a single password and exit
    ///
    /// By default, generates a 16-character password using lowercase,
    /// uppercase, digits, and special characters.
    Gen(GenArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ShellArgs {
    /// Do not copy generated passwords to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Do not clear the screen between rounds
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Length of the generated password
    #[arg(short, long, default_value_t = 16)]
    pub length: usize,

    /// Exclude lowercase characters (a–z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase characters (A–Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude digits (0–9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude special characters (e.g. !@#$%)
    #[arg(long)]
    pub no_special: bool,

    /// Copy the generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl GenArgs {
    pub fn classes(&self) -> CharClasses {
        CharClasses::all()
            .iter()
            .filter(|class| !self.excludes(*class))
            .collect()
    }

    fn excludes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.no_lowercase,
            CharClass::Uppercase => self.no_uppercase,
            CharClass::Digit => self.no_digits,
            CharClass::Special => self.no_special,
        }
    }
}
