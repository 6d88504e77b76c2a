use crate::token::SourceLocation;

/// Read position inside the source, with one slot of pushback.
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    column: usize,
    previous: Option<(usize, usize, usize)>, // (offset, line, column) before the last advance
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            previous: None,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Byte at the current offset, `None` once the input is exhausted.
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.offset).copied()
    }

    /// Character starting at the current offset, used for error messages.
    pub fn peek_char(&self) -> Option<char> {
        self.source.get(self.offset..)?.chars().next()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.previous = Some((self.offset, self.line, self.column));
        self.offset += 1;
        if c == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Undo the most recent `advance`.
    pub fn back_up(&mut self) {
        if let Some((offset, line, column)) = self.previous.take() {
            self.offset = offset;
            self.line = line;
            self.column = column;
        }
    }
}
