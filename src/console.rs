use crate::{
    command::CommandError,
    editor::{EditorError, Reply},
};

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};

pub const PROMPT: &str = "editor> ";

/// Writes prompts and command results to the user.
///
/// Unknown commands are reported on the output stream, every other failure
/// on the error stream. Each stream has its own color setting.
pub struct Console<W: Write, E: Write> {
    out: W,
    err: E,
    color: bool,
    err_color: bool,
}

impl Console<io::Stdout, io::Stderr> {
    pub fn stdio(color: bool, err_color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color).with_error_color(err_color)
    }
}

impl<W: Write, E: Write> Console<W, E> {
    pub fn new(out: W, err: E, color: bool) -> Self {
        Self {
            out,
            err,
            color,
            err_color: color,
        }
    }

    pub fn with_error_color(mut self, err_color: bool) -> Self {
        self.err_color = err_color;
        self
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        if self.color {
            queue!(self.out, PrintStyledContent(PROMPT.magenta()))?;
        } else {
            queue!(self.out, Print(PROMPT))?;
        }
        self.out.flush()
    }

    pub fn reply(&mut self, reply: &Reply) -> io::Result<()> {
        match reply {
            Reply::Silent | Reply::Quit => return Ok(()),
            Reply::Lines(lines) => {
                for line in lines {
                    queue!(self.out, Print(line), Print("\n"))?;
                }
            }
            Reply::Message(message) => queue!(self.out, Print(message), Print("\n"))?,
        }
        self.out.flush()
    }

    pub fn error(&mut self, error: &EditorError) -> io::Result<()> {
        let message = error.to_string();

        match error {
            EditorError::Command(CommandError::Unknown(_)) => {
                write_error(&mut self.out, message, self.color)
            }
            _ => write_error(&mut self.err, message, self.err_color),
        }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

fn write_error<T: Write>(writer: &mut T, message: String, color: bool) -> io::Result<()> {
    if color {
        queue!(writer, PrintStyledContent(message.red()), Print("\n"))?;
    } else {
        queue!(writer, Print(message), Print("\n"))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console<Vec<u8>, Vec<u8>> {
        Console::new(Vec::new(), Vec::new(), false)
    }

    fn output(console: Console<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = console.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut console = console();
        console.prompt().unwrap();

        assert_eq!(output(console), ("editor> ".to_string(), String::new()));
    }

    #[test]
    fn test_reply_lines_and_message() {
        let mut console = console();
        console
            .reply(&Reply::Lines(vec!["1: a".into(), "2: b".into()]))
            .unwrap();
        console.reply(&Reply::Message("Word not found.".into())).unwrap();
        console.reply(&Reply::Silent).unwrap();

        let (out, err) = output(console);
        assert_eq!(out, "1: a\n2: b\nWord not found.\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_error_routing() {
        let mut console = console();
        console
            .error(&EditorError::Command(CommandError::Unknown("foo".into())))
            .unwrap();
        console.error(&EditorError::InvalidCursor).unwrap();

        let (out, err) = output(console);
        assert_eq!(out, "Unknown command: foo\n");
        assert_eq!(err, "Invalid cursor position.\n");
    }

    #[test]
    fn test_color_wraps_prompt_in_escape_codes() {
        let mut console = Console::new(Vec::new(), Vec::new(), true);
        console.prompt().unwrap();

        let (out, _) = output(console);
        assert!(out.contains(PROMPT));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(out.starts_with('\u{1b}'));
        }
    }

    #[test]
    fn test_error_color_is_per_stream() {
        let mut console = Console::new(Vec::new(), Vec::new(), true).with_error_color(false);
        console.error(&EditorError::InvalidCursor).unwrap();

        let (_, err) = output(console);
        assert_eq!(err, "Invalid cursor position.\n");
    }
}
