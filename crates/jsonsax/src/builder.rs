//! Reduces [`Reader`] events into [`Value`] trees.
//!
//! [`ValueBuilder`] keeps an explicit stack with one frame per open
//! production: every `*_begin` pushes a frame, every `*_end` pops it and
//! appends the finished value to the frame below. The bottom frame is a
//! permanent root slot that receives the single top-level value, so during a
//! parse the stack is always one deeper than the grammar nesting.

use core::iter::FusedIterator;

use log::trace;

use crate::{
    cursor::Position,
    error::{Error, ParserError},
    handler::Handler,
    options::ReaderOptions,
    reader::Reader,
    value::{Map, Number, Value},
};

#[derive(Debug)]
enum Frame {
    Root(Option<Value>),
    Array(Vec<Value>),
    /// Finished members, folded into a [`Map`] when the object ends.
    Object(Vec<(String, Value)>),
    /// A member whose key and then value are still arriving.
    Pair {
        key: Option<String>,
        value: Option<Value>,
    },
    /// Characters of a string or number literal.
    Text(String),
}

/// A [`Handler`] that builds a [`Value`] from the events of one top-level
/// parse.
///
/// Any [`fail`](Handler::fail) becomes [`Error::Syntax`] and aborts the parse.
/// After an error the builder's contents are meaningless until
/// [`reset`](ValueBuilder::reset).
#[derive(Debug)]
pub struct ValueBuilder {
    stack: Vec<Frame>,
}

impl Default for ValueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Frame::Root(None)],
        }
    }

    /// Discards everything but an empty root slot.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(Frame::Root(None));
    }

    /// Number of productions currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Removes the finished top-level value from the root slot.
    ///
    /// # Errors
    ///
    /// [`Error::Incomplete`] if a production is still open or the root slot
    /// is empty.
    pub fn take_value(&mut self) -> Result<Value, Error> {
        match self.stack.as_mut_slice() {
            [Frame::Root(slot)] => slot.take().ok_or(Error::Incomplete),
            _ => Err(Error::Incomplete),
        }
    }

    fn pop(&mut self, event: &'static str) -> Result<Frame, Error> {
        if self.stack.len() < 2 {
            return Err(Error::UnexpectedEvent(event));
        }
        self.stack.pop().ok_or(Error::UnexpectedEvent(event))
    }

    fn pop_text(&mut self, event: &'static str) -> Result<String, Error> {
        match self.pop(event)? {
            Frame::Text(text) => Ok(text),
            _ => Err(Error::UnexpectedEvent(event)),
        }
    }

    /// Appends a finished value to the innermost open frame.
    fn append(&mut self, value: Value, event: &'static str) -> Result<(), Error> {
        match self.stack.last_mut() {
            Some(Frame::Root(slot @ None)) => *slot = Some(value),
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Pair { key: key @ None, .. }) => match value {
                Value::String(k) => *key = Some(k),
                _ => return Err(Error::UnexpectedEvent(event)),
            },
            Some(Frame::Pair {
                value: slot @ None, ..
            }) => *slot = Some(value),
            _ => return Err(Error::UnexpectedEvent(event)),
        }
        Ok(())
    }
}

/// Converts a number literal, choosing the type by its shape.
///
/// Integers that do not fit an `i64` fall back to the nearest `f64`, and
/// floats beyond its range become infinite, so every literal the grammar
/// accepts yields a number.
fn number_from_literal(literal: String) -> Result<Number, Error> {
    if !literal.contains(['.', 'e', 'E']) {
        if let Ok(i) = literal.parse::<i64>() {
            return Ok(Number::Integer(i));
        }
    }
    match literal.parse::<f64>() {
        Ok(f) => Ok(Number::Float(f)),
        Err(_) => Err(Error::InvalidNumber(literal)),
    }
}

impl Handler for ValueBuilder {
    type Error = Error;

    fn object_begin(&mut self) -> Result<(), Error> {
        self.stack.push(Frame::Object(Vec::new()));
        Ok(())
    }

    fn object_end(&mut self) -> Result<(), Error> {
        let Frame::Object(members) = self.pop("object end")? else {
            return Err(Error::UnexpectedEvent("object end"));
        };
        // Later duplicates overwrite the value but keep the first position.
        let map: Map = members.into_iter().collect();
        self.append(Value::Object(map), "object end")
    }

    fn array_begin(&mut self) -> Result<(), Error> {
        self.stack.push(Frame::Array(Vec::new()));
        Ok(())
    }

    fn array_end(&mut self) -> Result<(), Error> {
        let Frame::Array(items) = self.pop("array end")? else {
            return Err(Error::UnexpectedEvent("array end"));
        };
        self.append(Value::Array(items), "array end")
    }

    fn pair_begin(&mut self) -> Result<(), Error> {
        self.stack.push(Frame::Pair {
            key: None,
            value: None,
        });
        Ok(())
    }

    fn pair_end(&mut self) -> Result<(), Error> {
        let Frame::Pair {
            key: Some(key),
            value: Some(value),
        } = self.pop("pair end")?
        else {
            return Err(Error::UnexpectedEvent("pair end"));
        };
        match self.stack.last_mut() {
            Some(Frame::Object(members)) => {
                members.push((key, value));
                Ok(())
            }
            _ => Err(Error::UnexpectedEvent("pair end")),
        }
    }

    fn string_begin(&mut self) -> Result<(), Error> {
        self.stack.push(Frame::Text(String::new()));
        Ok(())
    }

    fn string_end(&mut self) -> Result<(), Error> {
        let text = self.pop_text("string end")?;
        self.append(Value::String(text), "string end")
    }

    fn number_begin(&mut self) -> Result<(), Error> {
        self.stack.push(Frame::Text(String::new()));
        Ok(())
    }

    fn number_end(&mut self) -> Result<(), Error> {
        let literal = self.pop_text("number end")?;
        let number = number_from_literal(literal)?;
        self.append(Value::Number(number), "number end")
    }

    fn character(&mut self, c: char) -> Result<(), Error> {
        match self.stack.last_mut() {
            Some(Frame::Text(text)) => {
                text.push(c);
                Ok(())
            }
            _ => Err(Error::UnexpectedEvent("character")),
        }
    }

    fn true_literal(&mut self) -> Result<(), Error> {
        self.append(Value::Bool(true), "true")
    }

    fn false_literal(&mut self) -> Result<(), Error> {
        self.append(Value::Bool(false), "false")
    }

    fn null_literal(&mut self) -> Result<(), Error> {
        self.append(Value::Null, "null")
    }

    fn fail(&mut self, error: ParserError) -> Result<(), Error> {
        Err(Error::Syntax(error))
    }
}

/// A [`Reader`] driving a [`ValueBuilder`].
///
/// # Examples
///
/// ```rust
/// use jsonsax::{Value, ValueReader};
///
/// let mut reader = ValueReader::new("[1, 2.5, \"x\"] null".chars());
/// let first = reader.read_value().unwrap();
/// assert_eq!(first.as_array().map(Vec::len), Some(3));
/// assert_eq!(reader.read_value().unwrap(), Value::Null);
/// assert!(reader.is_exhausted());
/// ```
#[derive(Debug)]
pub struct ValueReader<I> {
    reader: Reader<I, ValueBuilder>,
}

impl<I: Iterator<Item = char>> ValueReader<I> {
    pub fn new(input: impl IntoIterator<IntoIter = I>) -> Self {
        Self::with_options(input, ReaderOptions::default())
    }

    pub fn with_options(input: impl IntoIterator<IntoIter = I>, options: ReaderOptions) -> Self {
        Self {
            reader: Reader::with_options(input, ValueBuilder::new(), options),
        }
    }

    /// Parses the next top-level value.
    ///
    /// Trailing input after the value's whitespace is left unread.
    ///
    /// # Errors
    ///
    /// [`Error::Syntax`] for malformed input.
    pub fn read_value(&mut self) -> Result<Value, Error> {
        self.reader.handler_mut().reset();
        self.reader.read_value()?;
        self.reader.handler_mut().take_value()
    }

    /// Checks that nothing but whitespace is left.
    ///
    /// # Errors
    ///
    /// [`Error::Syntax`] naming the first unexpected character.
    pub fn read_end(&mut self) -> Result<(), Error> {
        self.reader.read_end()?;
        Ok(())
    }

    /// Skips whitespace and reports whether any input is left.
    pub fn is_exhausted(&mut self) -> bool {
        self.reader.is_exhausted()
    }

    /// Position of the next unread character.
    pub fn position(&mut self) -> Position {
        self.reader.position()
    }

    /// Turns the reader into an iterator over the remaining top-level values.
    pub fn into_values(self) -> Values<I> {
        Values {
            reader: self,
            index: 0,
            done: false,
        }
    }
}

/// Lazily parses a stream of concatenated top-level values.
///
/// Yields one `Ok` per value until only whitespace is left. The first error
/// is yielded once and ends the iteration.
#[derive(Debug)]
pub struct Values<I> {
    reader: ValueReader<I>,
    index: usize,
    done: bool,
}

impl<I: Iterator<Item = char>> Iterator for Values<I> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.reader.is_exhausted() {
            self.done = true;
            return None;
        }
        let result = self.reader.read_value();
        match &result {
            Ok(_) => trace!("value {} complete", self.index),
            Err(_) => self.done = true,
        }
        self.index += 1;
        Some(result)
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Values<I> {}
