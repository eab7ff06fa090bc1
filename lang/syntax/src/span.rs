use std::fmt;

/// Byte offsets of the line starts of a source text.
#[derive(Clone, Debug)]
pub struct FileInfo {
    newlines: Vec<usize>,
}

impl FileInfo {
    pub fn new(s: &str) -> Self {
        let mut newlines = vec![0];
        for (i, c) in s.char_indices() {
            if c == '\n' {
                newlines.push(i + 1);
            }
        }
        FileInfo { newlines }
    }
    /// Translate a byte offset into a one-based line and column.
    pub fn cursor(&self, offset: usize) -> Cursor2 {
        // index of the last line start that is <= offset
        let idx = self.newlines.partition_point(|&start| start <= offset).saturating_sub(1);
        Cursor2 { line: idx + 1, column: offset - self.newlines[idx] + 1 }
    }
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span { start, end, cursor: self.cursor(start) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor2 {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Cursor2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A byte range of the source together with the position of its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub cursor: Cursor2,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cursor)
    }
}
