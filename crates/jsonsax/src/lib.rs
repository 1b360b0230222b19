//! A SAX-style JSON reader.
//!
//! [`Reader`] walks JSON text with a recursive-descent grammar and reports
//! what it sees to a [`Handler`] as a flat stream of events; it never builds
//! anything itself. [`ValueBuilder`] is the handler that reduces those events
//! into a [`Value`] tree, and [`parse`], [`parse_values`] and [`validate`]
//! cover the common cases.
//!
//! ```rust
//! use jsonsax::{Value, parse};
//!
//! let v = parse(r#"{"a": [1, 2.0, "x"], "b": false}"#).unwrap();
//! assert_eq!(v.get("b"), Some(&Value::Bool(false)));
//! assert_eq!(v.get("a").and_then(Value::as_array).map(Vec::len), Some(3));
//! ```

#![allow(missing_docs)]

mod builder;
mod cursor;
mod error;
mod escape_buffer;
mod handler;
mod options;
mod reader;
#[cfg(any(test, feature = "serde"))]
mod ser;
mod value;

#[cfg(test)]
mod tests;

use core::str::Chars;

pub use builder::{ValueBuilder, ValueReader, Values};
pub use cursor::{Cursor, EndOfInput, Position};
pub use error::{Error, Expected, ParserError, SyntaxError};
pub use handler::Handler;
pub use options::{DEFAULT_MAX_DEPTH, ReaderOptions};
pub use reader::{Reader, Status};
pub use value::{Array, Map, Number, Value};

/// Parses `text` as exactly one JSON value.
///
/// # Examples
///
/// ```rust
/// use jsonsax::{Number, Value, parse};
///
/// assert_eq!(parse(" 3 ").unwrap(), Value::Number(Number::Integer(3)));
/// assert_eq!(parse("3e2").unwrap(), Value::Number(Number::Float(300.0)));
/// assert!(parse("3 4").is_err());
/// ```
///
/// # Errors
///
/// As [`ValueReader::read_value`], and [`Error::Syntax`] if anything but
/// whitespace follows the value.
pub fn parse(text: &str) -> Result<Value, Error> {
    let mut reader = ValueReader::new(text.chars());
    let value = reader.read_value()?;
    reader.read_end()?;
    Ok(value)
}

/// Parses a stream of concatenated values, one per iteration.
///
/// ```rust
/// use jsonsax::{Value, parse_values};
///
/// let values: Result<Vec<_>, _> = parse_values("1 [] \"x\"").collect();
/// assert_eq!(values.unwrap().len(), 3);
/// ```
pub fn parse_values(text: &str) -> Values<Chars<'_>> {
    ValueReader::new(text.chars()).into_values()
}

/// Turns the first grammar violation into an error.
struct Reject;

impl Handler for Reject {
    type Error = ParserError;

    fn fail(&mut self, error: ParserError) -> Result<(), ParserError> {
        Err(error)
    }
}

/// Checks that `text` is exactly one JSON value without building it.
///
/// ```rust
/// let err = jsonsax::validate(r#"{"a":}"#).unwrap_err();
/// assert_eq!((err.line(), err.column()), (1, 6));
/// ```
///
/// # Errors
///
/// The first violation, including trailing input after the value.
pub fn validate(text: &str) -> Result<(), ParserError> {
    let mut reader = Reader::new(text.chars(), Reject);
    let _ = reader.read_value()?;
    let _ = reader.read_end()?;
    Ok(())
}
