use core::fmt;

use thiserror::Error;

use crate::cursor::Position;

/// The character class the grammar was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Exactly this character.
    Char(char),
    /// The first character of any value.
    Value,
    /// An ASCII digit.
    Digit,
    /// An ASCII hexadecimal digit inside a `\u` escape.
    HexDigit,
    /// A character that may follow a backslash in a string.
    Escape,
    /// A `,` separator or the given closing bracket.
    CommaOr(char),
    /// Nothing but whitespace.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "'{c}'"),
            Expected::Value => f.write_str("one of '{', '[', '\"', 't', 'f', 'n', digit, '-'"),
            Expected::Digit => f.write_str("digit"),
            Expected::HexDigit => f.write_str("hex digit"),
            Expected::Escape => {
                f.write_str("one of 'b', 'f', 'n', 'r', 't', 'u', '\"', '\\', '/'")
            }
            Expected::CommaOr(close) => write!(f, "',' or '{close}'"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A grammar violation, without location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found:?}")]
    UnexpectedCharacter { expected: Expected, found: char },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscape(u32),
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// A grammar violation and where it happened.
///
/// This is what the reader hands to [`Handler::fail`](crate::Handler::fail).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {position}")]
pub struct ParserError {
    source: SyntaxError,
    position: Position,
}

impl ParserError {
    pub(crate) fn new(source: SyntaxError, position: Position) -> Self {
        Self { source, position }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }

    /// Where the offending character is, or one past the end of input.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.position.line
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.position.column
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.position.offset
    }
}

/// Errors produced while building a [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] ParserError),
    /// Characters between number events that do not form a number. The
    /// reader never does this; only a hand-driven builder can.
    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),
    /// A callback arrived while the builder was in a state it does not apply
    /// to. The reader never does this; only a hand-driven builder can.
    #[error("unexpected {0} event")]
    UnexpectedEvent(&'static str),
    /// No complete top-level value was built. Also covers a parse that
    /// stopped on a failure some other handler chose to accept.
    #[error("no complete value")]
    Incomplete,
}
