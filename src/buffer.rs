use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// The file contents, one entry per line, without terminators.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads `path` and replaces the contents with its lines.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. On error the current
    /// contents are kept.
    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);

        self.lines = split_lines(&text);
        tracing::info!("loaded {} lines from {}", self.lines.len(), path.display());

        Ok(())
    }

    /// Overwrites `path` with the buffer, each line followed by the platform
    /// line terminator.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }

        writer.flush()?;
        tracing::info!("saved {} lines to {}", self.lines.len(), path.display());

        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, line: String) {
        self.lines.insert(index, line);
    }

    pub fn replace(&mut self, index: usize, line: String) -> Option<String> {
        self.lines
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, line))
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    /// First line containing `word`, with the offset of the match in UTF-16
    /// code units.
    pub fn find(&self, word: &str) -> Option<(usize, usize)> {
        self.lines.iter().enumerate().find_map(|(i, line)| {
            line.find(word)
                .map(|byte| (i, line[..byte].encode_utf16().count()))
        })
    }
}

/// Creates an empty file at `path` unless something is already there.
///
/// Returns `true` when the file was created.
pub fn create_if_missing(path: &Path) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::info!("created {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

/// Splits on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// start another line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
