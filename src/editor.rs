use crate::{
    buffer::Buffer,
    command::{Command, CommandError},
    console::Console,
    cursor::Cursor,
};

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use thiserror::Error;

/// A recoverable failure of a single command. The session continues.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Invalid cursor position.")]
    InvalidCursor,

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Error: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a command wants shown to the user.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Reply {
    Silent,
    Lines(Vec<String>),
    Message(String),
    Quit,
}

/// One editing session: the buffer, its cursor and the file they came from.
pub struct Editor {
    path: PathBuf,
    buffer: Buffer,
    cursor: Cursor,
}

impl Editor {
    /// Starts a session on an in-memory buffer backed by `path`.
    pub fn new(path: impl Into<PathBuf>, buffer: Buffer) -> Self {
        Self {
            path: path.into(),
            buffer,
            cursor: Cursor::new(),
        }
    }

    /// Loads `path` into a fresh session. The file must already exist.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let mut buffer = Buffer::new();

        buffer
            .load(&path)
            .with_context(|| format!("Error reading file: {}", path.display()))?;

        Ok(Self::new(path, buffer))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Reads commands from `input` until `exit` or end of input.
    pub fn run<R, W, E>(
        &mut self,
        mut input: R,
        console: &mut Console<W, E>,
    ) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut bytes = Vec::new();

        loop {
            console.prompt()?;

            bytes.clear();
            if input.read_until(b'\n', &mut bytes)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            let line = String::from_utf8_lossy(&bytes);
            let raw = line.strip_suffix('\n').unwrap_or(&*line);
            let raw = raw.strip_suffix('\r').unwrap_or(raw);

            let result = Command::parse(raw)
                .map_err(EditorError::from)
                .and_then(|command| self.execute(command));

            match result {
                Ok(Reply::Quit) => break,
                Ok(reply) => console.reply(&reply)?,
                Err(e) => {
                    tracing::debug!("{}", e);
                    console.error(&e)?;
                }
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, EditorError> {
        tracing::debug!(verb = command.verb(), cursor = ?self.cursor.line(), "execute");

        match command {
            Command::Read => Ok(self.handle_read()),
            Command::Insert(line) => Ok(self.handle_insert(line)),
            Command::Update(line) => self.handle_update(line),
            Command::Delete(_) => self.handle_delete(),
            Command::Search(word) => Ok(self.handle_search(&word)),
            Command::Save => self.handle_save(),
            Command::Exit => Ok(Reply::Quit),
        }
    }

    fn handle_read(&self) -> Reply {
        let lines = self
            .buffer
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect();

        Reply::Lines(lines)
    }

    fn handle_insert(&mut self, line: String) -> Reply {
        match self.cursor.insert_index(self.buffer.len()) {
            Some(index) => self.buffer.insert(index, line),
            None => self.buffer.push(line),
        }
        self.cursor.advance();

        Reply::Silent
    }

    fn handle_update(&mut self, line: String) -> Result<Reply, EditorError> {
        let index = self
            .cursor
            .editable(self.buffer.len())
            .ok_or(EditorError::InvalidCursor)?;

        self.buffer.replace(index, line);
        Ok(Reply::Silent)
    }

    fn handle_delete(&mut self) -> Result<Reply, EditorError> {
        let index = self
            .cursor
            .editable(self.buffer.len())
            .ok_or(EditorError::InvalidCursor)?;

        // The cursor stays put and now names the following line.
        self.buffer.remove(index);
        Ok(Reply::Silent)
    }

    fn handle_search(&mut self, word: &str) -> Reply {
        match self.buffer.find(word) {
            Some((line, column)) => {
                self.cursor.seek(line, column);
                Reply::Message(format!("Found at line {}, position {}", line + 1, column))
            }
            None => Reply::Message("Word not found.".to_string()),
        }
    }

    fn handle_save(&self) -> Result<Reply, EditorError> {
        self.buffer
            .save(&self.path)
            .map_err(|source| EditorError::Save {
                path: self.path.clone(),
                source,
            })?;

        Ok(Reply::Silent)
    }
}
