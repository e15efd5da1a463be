//! Interactive password shell.
//!
//! Runs the prompt loop: ask for a length, ask which character classes to
//! include, generate and show a password, copy it to the clipboard, then
//! ask whether to go again. Generation errors and clipboard failures are
//! reported and never end the session. Only a declined repeat or end of
//! input does.

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::charset::{CharClass, CharClasses};
use crate::generator::{parse_length, Request};
use crate::ui::{self, Clipboard};

#[derive(Debug)]
enum State {
    CollectLength,
    CollectClasses { length: usize },
    Generate(Request),
    AskRepeat,
    Exit,
}

pub struct Shell<R, W, G> {
    input: R,
    output: W,
    rng: G,
    clipboard: Option<Box<dyn Clipboard>>,
    clear: bool,
}

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    /// A shell with no clipboard and screen clearing off.
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self {
            input,
            output,
            rng,
            clipboard: None,
            clear: false,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Run until the user declines another password or input ends.
    ///
    /// Only I/O errors on the terminal streams are returned.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = self.start_round()?;
        loop {
            debug!(?state, "shell step");
            state = match state {
                State::CollectLength => self.collect_length()?,
                State::CollectClasses { length } => self.collect_classes(length)?,
                State::Generate(request) => self.generate(request)?,
                State::AskRepeat => self.ask_repeat()?,
                State::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    self.output.flush()?;
                    return Ok(());
                }
            };
        }
    }

    fn start_round(&mut self) -> io::Result<State> {
        if self.clear {
            ui::clear_screen(&mut self.output)?;
        }
        Ok(State::CollectLength)
    }

    fn collect_length(&mut self) -> io::Result<State> {
        let Some(line) = ui::read_line(&mut self.input, &mut self.output, "Password length: ")?
        else {
            return Ok(State::Exit);
        };

        match parse_length(&line) {
            Ok(length) => Ok(State::CollectClasses { length }),
            Err(e) => {
                writeln!(self.output, "Error: {e}. Enter a positive whole number.")?;
                Ok(State::CollectLength)
            }
        }
    }

    fn collect_classes(&mut self, length: usize) -> io::Result<State> {
        let mut classes = CharClasses::empty();
        for class in CharClass::ALL {
            let prompt = format!("Include {class}?");
            match ui::prompt_yes_no(&mut self.input, &mut self.output, &prompt)? {
                Some(true) => classes.insert(class),
                Some(false) => {}
                None => return Ok(State::Exit),
            }
        }
        Ok(State::Generate(Request::new(length, classes)))
    }

    fn generate(&mut self, request: Request) -> io::Result<State> {
        let password = match request.generate(&mut self.rng) {
            Ok(p) => Zeroizing::new(p),
            Err(e) => {
                info!(error = %e, length = request.length, "generation rejected");
                writeln!(self.output, "Error: {e}.")?;
                return Ok(State::AskRepeat);
            }
        };

        writeln!(self.output, "Generated password: {}", password.as_str())?;

        match ui::copy_to_clipboard(self.clipboard.as_deref_mut(), &password) {
            Ok(()) => writeln!(self.output, "Password copied to clipboard.")?,
            Err(e) => {
                debug!(error = %e, "clipboard copy failed");
                writeln!(self.output, "Warning: could not copy to clipboard ({e}).")?;
            }
        }

        Ok(State::AskRepeat)
    }

    fn ask_repeat(&mut self) -> io::Result<State> {
        let line = ui::read_line(
            &mut self.input,
            &mut self.output,
            "Generate another password? [y/n]: ",
        )?;

        match line.as_deref().and_then(ui::parse_yes_no) {
            Some(true) => self.start_round(),
            _ => Ok(State::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    struct RecordingClipboard {
        copied: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingClipboard {
        fn with_handle() -> (Self, Rc<RefCell<Vec<String>>>) {
            let copied = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    copied: copied.clone(),
                },
                copied,
            )
        }
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".into()))
        }
    }

    fn run_shell(script: &str, clipboard: Option<Box<dyn Clipboard>>) -> String {
        let mut output = Vec::new();
        {
            let mut shell = Shell::new(
                Cursor::new(script.as_bytes().to_vec()),
                &mut output,
                StdRng::seed_from_u64(42),
            );
            if let Some(cb) = clipboard {
                shell = shell.with_clipboard(cb);
            }
            shell.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    fn passwords(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|l| l.split("Generated password: ").nth(1))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn full_round_copies_password() {
        let (cb, copied) = RecordingClipboard::with_handle();
        let out = run_shell("8\ny\ny\ny\nn\nn\n", Some(Box::new(cb)));

        let pwds = passwords(&out);
        assert_eq!(pwds.len(), 1);
        let pwd = &pwds[0];
        assert_eq!(pwd.len(), 8);
        assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        assert!(!pwd.chars().any(|c| c.is_ascii_punctuation()));

        assert_eq!(*copied.borrow(), vec![pwd.clone()]);
        assert!(out.contains("Password copied to clipboard."));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn bad_lengths_are_reprompted() {
        let out = run_shell("abc\n-5\n0\n4\ny\nn\nn\nn\nn\n", None);

        assert_eq!(out.matches("Error: invalid length.").count(), 3);
        assert_eq!(out.matches("Password length: ").count(), 4);
        let pwds = passwords(&out);
        assert_eq!(pwds.len(), 1);
        assert!(pwds[0].chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn huge_length_is_reprompted() {
        let out = run_shell("9000000000000000000\n5000\n6\ny\ny\ny\ny\nn\n", None);

        assert_eq!(out.matches("Error: invalid length.").count(), 2);
        assert_eq!(out.matches("Password length: ").count(), 3);
        let pwds = passwords(&out);
        assert_eq!(pwds.len(), 1);
        assert_eq!(pwds[0].len(), 6);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn bad_yes_no_is_reprompted_in_place() {
        let out = run_shell("4\nmaybe\ny\ny\ny\ny\nno\n", None);

        assert_eq!(out.matches("Please answer 'y' or 'n'.").count(), 1);
        assert_eq!(out.matches("Include lowercase letters? [y/n]: ").count(), 2);
        assert_eq!(out.matches("Include uppercase letters? [y/n]: ").count(), 1);
        assert_eq!(passwords(&out)[0].len(), 4);
    }

    #[test]
    fn no_classes_reports_error_and_asks_repeat() {
        let (cb, copied) = RecordingClipboard::with_handle();
        let out = run_shell("8\nn\nn\nn\nn\nn\n", Some(Box::new(cb)));

        assert!(out.contains("Error: no character type selected."));
        assert!(passwords(&out).is_empty());
        assert!(copied.borrow().is_empty());
        assert!(out.contains("Generate another password? [y/n]: "));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn too_short_for_classes_is_invalid_length() {
        let out = run_shell("2\ny\ny\ny\nn\nn\n", None);

        assert!(out.contains("Error: invalid length."));
        assert!(passwords(&out).is_empty());
    }

    #[test]
    fn clipboard_failure_is_a_warning() {
        let out = run_shell("6\ny\nn\ny\nn\nn\n", Some(Box::new(BrokenClipboard)));

        assert_eq!(passwords(&out).len(), 1);
        assert!(out.contains("Warning: could not copy to clipboard (clipboard init error: no display)."));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn missing_clipboard_is_a_warning() {
        let out = run_shell("6\ny\nn\nn\nn\nn\n", None);
        assert!(out.contains("Warning: could not copy to clipboard (clipboard disabled)."));
    }

    #[derive(Clone, Default)]
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl Write for LogSink {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn clipboard_warning_is_not_logged_at_default_level() {
        let sink = LogSink::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let out = tracing::subscriber::with_default(subscriber, || {
            run_shell("6\ny\nn\nn\nn\nn\n", Some(Box::new(BrokenClipboard)))
        });

        assert_eq!(out.matches("Warning: could not copy to clipboard").count(), 1);
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn repeat_runs_another_round() {
        let (cb, copied) = RecordingClipboard::with_handle();
        let out = run_shell(
            "5\ny\nn\nn\nn\nyes\n6\nn\ny\nn\nn\nn\n",
            Some(Box::new(cb)),
        );

        let pwds = passwords(&out);
        assert_eq!(pwds.len(), 2);
        assert!(pwds[0].len() == 5 && pwds[0].chars().all(|c| c.is_ascii_lowercase()));
        assert!(pwds[1].len() == 6 && pwds[1].chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(*copied.borrow(), pwds);
    }

    #[test]
    fn anything_but_yes_at_repeat_exits() {
        let out = run_shell("3\ny\nn\nn\nn\nwhatever\n8\n", None);

        assert_eq!(passwords(&out).len(), 1);
        assert_eq!(out.matches("Password length: ").count(), 1);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits() {
        for script in ["", "8\n", "8\ny\n", "8\ny\nn\nn\nn\n"] {
            let out = run_shell(script, None);
            assert!(out.ends_with("Goodbye!\n"), "{script:?}: {out:?}");
        }
    }

    #[test]
    fn clears_screen_each_round() {
        let mut output = Vec::new();
        Shell::new(
            Cursor::new(b"4\ny\nn\nn\nn\ny\n4\nn\nn\ny\nn\nn\n".to_vec()),
            &mut output,
            StdRng::seed_from_u64(1),
        )
        .clear_screen(true)
        .run()
        .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches("\x1b[2J\x1b[H").count(), 2);
    }
}
