//! The implicit position that insert, update and delete act on.
//!
//! A cursor starts unset. Once a search or an insert sets it there is no way
//! back to the unset state for the rest of the session.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    line: Option<usize>,
    column: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Offset of the last search match. Only a search sets this.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn is_set(&self) -> bool {
        self.line.is_some()
    }

    /// Moves to a search match.
    pub fn seek(&mut self, line: usize, column: usize) {
        self.line = Some(line);
        self.column = Some(column);
    }

    /// Steps one line down after an insert. An unset cursor lands on line 0.
    pub fn advance(&mut self) {
        self.line = Some(self.line.map_or(0, |line| line + 1));
    }

    /// Where an insert goes in a buffer of `len` lines, or `None` to append.
    pub fn insert_index(&self, len: usize) -> Option<usize> {
        self.line.filter(|&line| line <= len)
    }

    /// The line update and delete act on, if the cursor points inside the buffer.
    pub fn editable(&self, len: usize) -> Option<usize> {
        self.line.filter(|&line| line < len)
    }
}
