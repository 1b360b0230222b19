//! One-character lookahead over a forward-only character stream.
//!
//! [`Cursor`] owns the input iterator for the duration of one parse. `peek`
//! pulls at most one character from the stream into a small push-back stack,
//! so peeking repeatedly without consuming always yields the same character.
//! Characters handed back through [`Cursor::put`] are returned before the
//! stream resumes.

use core::fmt;

use thiserror::Error;

/// The cursor had no character left to return.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("end of input")]
pub struct EndOfInput;

/// Location of a character in the input.
///
/// `offset` counts characters from zero; `line` and `column` are 1-based and a
/// `'\n'` starts a new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Characters consumed before this one.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset: self.offset + 1,
                column: self.column + 1,
                ..self
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A forward-only character source with peek and push-back.
#[derive(Debug)]
pub struct Cursor<I> {
    stream: I,
    // Top of the stack is the next character handed out.
    pending: Vec<(char, Position)>,
    // Position of the next character the stream will produce.
    stream_pos: Position,
    // Position of the character most recently returned by `next`.
    last: Position,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    /// Wraps `input` in a cursor positioned at its first character.
    pub fn new(input: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            stream: input.into_iter(),
            pending: Vec::new(),
            stream_pos: Position::START,
            last: Position::START,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// Pulls one character from the underlying stream into the push-back
    /// stack when the stack is empty; repeated calls return the same
    /// character until [`next`](Iterator::next) is called.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        if self.pending.is_empty() {
            let c = self.stream.next()?;
            let at = self.stream_pos;
            self.stream_pos = at.advance(c);
            self.pending.push((c, at));
        }
        self.pending.last().map(|&(c, _)| c)
    }

    /// Consumes the next character, failing with [`EndOfInput`] when none is
    /// left.
    #[inline]
    pub fn next_char(&mut self) -> Result<char, EndOfInput> {
        self.next().ok_or(EndOfInput)
    }

    /// Pushes `c` back so that it is the next character returned.
    ///
    /// The pushed character reports the position of the character most
    /// recently consumed, which is exact when a caller hands back what it
    /// just read.
    pub fn put(&mut self, c: char) {
        self.pending.push((c, self.last));
    }

    /// Position of the next character.
    ///
    /// At end of input this is the position one past the last character.
    pub fn position(&mut self) -> Position {
        match self.pending.last() {
            Some(&(_, at)) => at,
            None => self.stream_pos,
        }
    }

    /// Returns `true` once both the push-back stack and the stream are empty.
    pub fn is_exhausted(&mut self) -> bool {
        self.peek().is_none()
    }
}

impl<I: Iterator<Item = char>> Iterator for Cursor<I> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let (c, at) = match self.pending.pop() {
            Some(entry) => entry,
            None => {
                let c = self.stream.next()?;
                let at = self.stream_pos;
                self.stream_pos = at.advance(c);
                (c, at)
            }
        };
        self.last = at;
        Some(c)
    }
}
