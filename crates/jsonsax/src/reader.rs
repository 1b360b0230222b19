//! Recursive-descent JSON reader emitting [`Handler`] events.
//!
//! Overview
//! - Each grammar production is one method; composite productions recurse
//!   into their children, so the call stack grows with nesting depth. The
//!   depth is bounded by [`ReaderOptions::max_depth`].
//! - The reader never buffers token text. Strings and numbers reach the
//!   handler one character at a time between their begin/end events.
//! - All decisions are made on the peeked character. A violation is reported
//!   through [`Handler::fail`] before the offending character is consumed, so
//!   [`Reader::position`] afterwards still points at it.
//!
//! Failure policy
//! - The reader itself never returns a syntax error. Whether a malformed
//!   document is an error is up to the handler: if `fail` returns `Ok`, the
//!   entry point reports [`Status::Failed`]; if it returns `Err`, so does the
//!   entry point. There is no resynchronisation after a failure.

use log::{debug, trace, warn};

use crate::{
    cursor::{Cursor, Position},
    error::{Expected, ParserError, SyntaxError},
    escape_buffer::{CodeUnit, UnicodeEscapeBuffer, join_surrogates},
    handler::Handler,
    options::ReaderOptions,
};

/// Outcome of a top-level parse that was not aborted by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The input matched the grammar.
    Complete,
    /// The input violated the grammar and [`Handler::fail`] was called.
    Failed,
}

impl Status {
    /// Returns `true` for [`Status::Complete`].
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, Status::Complete)
    }
}

/// Why a production stopped early.
enum Stop<E> {
    /// A violation was reported and the handler accepted it.
    Failed,
    /// A handler method returned an error.
    Aborted(E),
}

impl<E> From<E> for Stop<E> {
    fn from(e: E) -> Self {
        Stop::Aborted(e)
    }
}

type Step<E> = Result<(), Stop<E>>;

/// A SAX-style recursive-descent JSON reader.
///
/// Generic over the character stream `I` and the event consumer `H`. With
/// `()` as the handler the reader is a plain validator.
///
/// # Examples
///
/// ```rust
/// use jsonsax::{Reader, Status};
///
/// let mut reader = Reader::new("[1, 2] {} ".chars(), ());
/// assert_eq!(reader.read_value(), Ok(Status::Complete));
/// assert!(!reader.is_exhausted());
/// assert_eq!(reader.read_value(), Ok(Status::Complete));
/// assert!(reader.is_exhausted());
///
/// let mut reader = Reader::new("[1,]".chars(), ());
/// assert_eq!(reader.read_value(), Ok(Status::Failed));
/// ```
#[derive(Debug)]
pub struct Reader<I, H> {
    cursor: Cursor<I>,
    handler: H,
    options: ReaderOptions,
    /// Objects and arrays currently open.
    depth: usize,
}

impl<I, H> Reader<I, H>
where
    I: Iterator<Item = char>,
    H: Handler,
{
    /// Creates a reader with default options.
    pub fn new(input: impl IntoIterator<IntoIter = I>, handler: H) -> Self {
        Self::with_options(input, handler, ReaderOptions::default())
    }

    /// Creates a reader with the given options.
    pub fn with_options(
        input: impl IntoIterator<IntoIter = I>,
        handler: H,
        options: ReaderOptions,
    ) -> Self {
        Self {
            cursor: Cursor::new(input),
            handler,
            options,
            depth: 0,
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Position of the next unread character.
    pub fn position(&mut self) -> Position {
        self.cursor.position()
    }

    /// Skips whitespace and reports whether any input is left.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.cursor.is_exhausted()
    }

    /// Parses exactly one value, with optional surrounding whitespace.
    ///
    /// Input after the value and its trailing whitespace is left unread, so
    /// calling this again parses the next value of a concatenated stream.
    ///
    /// # Errors
    ///
    /// Returns the first error any handler method returns.
    pub fn read_value(&mut self) -> Result<Status, H::Error> {
        self.depth = 0;
        let step = self.top_level();
        self.settle(step)
    }

    /// Parses values until only whitespace is left.
    ///
    /// Stops at the first value that fails; empty input is
    /// [`Status::Complete`] with no events.
    ///
    /// # Errors
    ///
    /// Returns the first error any handler method returns.
    pub fn read_values(&mut self) -> Result<Status, H::Error> {
        while !self.is_exhausted() {
            if self.read_value()? == Status::Failed {
                return Ok(Status::Failed);
            }
        }
        Ok(Status::Complete)
    }

    /// Checks that nothing but whitespace is left.
    ///
    /// Anything else is reported through [`Handler::fail`] as an unexpected
    /// character where the end of input was expected.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Handler::fail`], if any.
    pub fn read_end(&mut self) -> Result<Status, H::Error> {
        self.skip_whitespace();
        let step = match self.cursor.peek() {
            None => Ok(()),
            Some(c) => Err(self.unexpected(Expected::EndOfInput, c)),
        };
        self.settle(step)
    }

    fn settle(&mut self, step: Step<H::Error>) -> Result<Status, H::Error> {
        match step {
            Ok(()) => {
                trace!("parse settled at {}", self.cursor.position());
                Ok(Status::Complete)
            }
            Err(Stop::Failed) => Ok(Status::Failed),
            Err(Stop::Aborted(e)) => Err(e),
        }
    }

    fn top_level(&mut self) -> Step<H::Error> {
        self.skip_whitespace();
        self.value()?;
        self.skip_whitespace();
        Ok(())
    }

    /// Reports `kind` at the current position.
    fn fail(&mut self, kind: SyntaxError) -> Stop<H::Error> {
        let error = ParserError::new(kind, self.cursor.position());
        debug!("{error}");
        match self.handler.fail(error) {
            Ok(()) => Stop::Failed,
            Err(e) => Stop::Aborted(e),
        }
    }

    fn unexpected(&mut self, expected: Expected, found: char) -> Stop<H::Error> {
        self.fail(SyntaxError::UnexpectedCharacter { expected, found })
    }

    /// Peeks the next character; running out of input here is a violation.
    fn peek(&mut self) -> Result<char, Stop<H::Error>> {
        match self.cursor.peek() {
            Some(c) => Ok(c),
            None => Err(self.fail(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    /// Consumes `want`, or reports whatever is there instead.
    fn expect(&mut self, want: char, expected: Expected) -> Step<H::Error> {
        let c = self.peek()?;
        if c != want {
            return Err(self.unexpected(expected, c));
        }
        self.cursor.next();
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if !self.options.is_whitespace(c) {
                break;
            }
            self.cursor.next();
        }
    }

    fn enter(&mut self) -> Step<H::Error> {
        self.depth += 1;
        if let Some(max) = self.options.max_depth {
            if self.depth > max {
                warn!("nesting limit of {max} exceeded at {}", self.cursor.position());
                return Err(self.fail(SyntaxError::NestingTooDeep(max)));
            }
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn value(&mut self) -> Step<H::Error> {
        match self.peek()? {
            '{' => self.object(),
            '[' => self.array(),
            '"' => self.string(),
            't' => {
                self.literal("true")?;
                Ok(self.handler.true_literal()?)
            }
            'f' => {
                self.literal("false")?;
                Ok(self.handler.false_literal()?)
            }
            'n' => {
                self.literal("null")?;
                Ok(self.handler.null_literal()?)
            }
            _ => self.number(),
        }
    }

    fn literal(&mut self, word: &str) -> Step<H::Error> {
        for want in word.chars() {
            self.expect(want, Expected::Char(want))?;
        }
        Ok(())
    }

    fn object(&mut self) -> Step<H::Error> {
        self.enter()?;
        self.handler.object_begin()?;
        self.expect('{', Expected::Char('{'))?;
        self.skip_whitespace();
        if self.peek()? != '}' {
            loop {
                self.pair()?;
                self.skip_whitespace();
                match self.peek()? {
                    '}' => break,
                    ',' => {
                        self.cursor.next();
                        self.skip_whitespace();
                    }
                    c => return Err(self.unexpected(Expected::CommaOr('}'), c)),
                }
            }
        }
        self.expect('}', Expected::Char('}'))?;
        self.handler.object_end()?;
        self.leave();
        Ok(())
    }

    fn pair(&mut self) -> Step<H::Error> {
        self.handler.pair_begin()?;
        self.string()?;
        self.skip_whitespace();
        self.expect(':', Expected::Char(':'))?;
        self.skip_whitespace();
        self.value()?;
        self.handler.pair_end()?;
        Ok(())
    }

    fn array(&mut self) -> Step<H::Error> {
        self.enter()?;
        self.handler.array_begin()?;
        self.expect('[', Expected::Char('['))?;
        self.skip_whitespace();
        if self.peek()? != ']' {
            loop {
                self.value()?;
                self.skip_whitespace();
                match self.peek()? {
                    ']' => break,
                    ',' => {
                        self.cursor.next();
                        self.skip_whitespace();
                    }
                    c => return Err(self.unexpected(Expected::CommaOr(']'), c)),
                }
            }
        }
        self.expect(']', Expected::Char(']'))?;
        self.handler.array_end()?;
        self.leave();
        Ok(())
    }

    fn string(&mut self) -> Step<H::Error> {
        self.handler.string_begin()?;
        self.expect('"', Expected::Char('"'))?;
        loop {
            let c = match self.peek()? {
                '"' => break,
                '\\' => {
                    self.cursor.next();
                    self.escape()?
                }
                c => {
                    self.cursor.next();
                    c
                }
            };
            self.handler.character(c)?;
        }
        self.cursor.next();
        self.handler.string_end()?;
        Ok(())
    }

    /// Decodes the escape after a consumed backslash.
    fn escape(&mut self) -> Result<char, Stop<H::Error>> {
        let c = self.peek()?;
        let decoded = match c {
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '"' | '\\' | '/' => c,
            'u' => {
                self.cursor.next();
                return self.unicode_escape();
            }
            _ => return Err(self.unexpected(Expected::Escape, c)),
        };
        self.cursor.next();
        Ok(decoded)
    }

    /// Decodes the digits after a consumed `\u`, joining surrogate pairs.
    fn unicode_escape(&mut self) -> Result<char, Stop<H::Error>> {
        let high = match CodeUnit::classify(self.hex4()?) {
            CodeUnit::Scalar(c) => return Ok(c),
            CodeUnit::LowSurrogate(low) => {
                return Err(self.fail(SyntaxError::InvalidUnicodeEscape(u32::from(low))));
            }
            CodeUnit::HighSurrogate(high) => high,
        };
        // The low half has to follow immediately as another `\u` escape.
        if self.cursor.peek() == Some('\\') {
            self.cursor.next();
            if self.cursor.peek() == Some('u') {
                self.cursor.next();
                return self.low_surrogate(high);
            }
            self.cursor.put('\\');
        }
        Err(self.fail(SyntaxError::InvalidUnicodeEscape(u32::from(high))))
    }

    /// Reads the digits completing a surrogate pair, stopping before the
    /// first digit that rules out `U+DC00..=U+DFFF`.
    fn low_surrogate(&mut self, high: u16) -> Result<char, Stop<H::Error>> {
        let mut unit = 0u16;
        for shift in [12, 8, 4, 0] {
            let c = self.peek()?;
            let Some(d) = UnicodeEscapeBuffer::hex_val(c) else {
                return Err(self.unexpected(Expected::HexDigit, c));
            };
            let prefix = (unit | d << shift) >> shift;
            if !(0xDC00 >> shift..=0xDFFF >> shift).contains(&prefix) {
                return Err(self.fail(SyntaxError::InvalidUnicodeEscape(u32::from(high))));
            }
            unit |= d << shift;
            self.cursor.next();
        }
        match join_surrogates(high, unit) {
            Some(c) => Ok(c),
            None => Err(self.fail(SyntaxError::InvalidUnicodeEscape(u32::from(high)))),
        }
    }

    fn hex4(&mut self) -> Result<u16, Stop<H::Error>> {
        let mut digits = UnicodeEscapeBuffer::new();
        loop {
            let c = self.peek()?;
            match digits.feed(c) {
                Ok(None) => {
                    self.cursor.next();
                }
                Ok(Some(unit)) => {
                    self.cursor.next();
                    return Ok(unit);
                }
                Err(found) => return Err(self.unexpected(Expected::HexDigit, found)),
            }
        }
    }

    fn number(&mut self) -> Step<H::Error> {
        self.handler.number_begin()?;
        let mut c = self.peek()?;
        let mut lead = Expected::Value;
        if c == '-' {
            self.take(c)?;
            c = self.peek()?;
            lead = Expected::Digit;
        }
        match c {
            '0' => self.take(c)?,
            '1'..='9' => {
                self.take(c)?;
                self.digits()?;
            }
            _ => return Err(self.unexpected(lead, c)),
        }
        if self.cursor.peek() == Some('.') {
            self.take('.')?;
            self.required_digits()?;
        }
        if let Some(e @ ('e' | 'E')) = self.cursor.peek() {
            self.take(e)?;
            if let Some(sign @ ('+' | '-')) = self.cursor.peek() {
                self.take(sign)?;
            }
            self.required_digits()?;
        }
        self.handler.number_end()?;
        Ok(())
    }

    /// Consumes `c` and forwards it as part of a number.
    fn take(&mut self, c: char) -> Step<H::Error> {
        self.cursor.next();
        self.handler.character(c)?;
        Ok(())
    }

    fn digits(&mut self) -> Step<H::Error> {
        while let Some(d @ '0'..='9') = self.cursor.peek() {
            self.take(d)?;
        }
        Ok(())
    }

    fn required_digits(&mut self) -> Step<H::Error> {
        let c = self.peek()?;
        if !c.is_ascii_digit() {
            return Err(self.unexpected(Expected::Digit, c));
        }
        self.digits()
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;

    /// Renders every event as a short token: `{}` objects, `[]` arrays, `()`
    /// pairs, `"` string bounds, `<>` number bounds, `T`/`F`/`N` literals, the
    /// characters themselves, and `!` plus the message for a failure.
    #[derive(Default)]
    struct Trace(String);

    impl Handler for Trace {
        type Error = Infallible;

        fn object_begin(&mut self) -> Result<(), Infallible> {
            self.0.push('{');
            Ok(())
        }
        fn object_end(&mut self) -> Result<(), Infallible> {
            self.0.push('}');
            Ok(())
        }
        fn array_begin(&mut self) -> Result<(), Infallible> {
            self.0.push('[');
            Ok(())
        }
        fn array_end(&mut self) -> Result<(), Infallible> {
            self.0.push(']');
            Ok(())
        }
        fn pair_begin(&mut self) -> Result<(), Infallible> {
            self.0.push('(');
            Ok(())
        }
        fn pair_end(&mut self) -> Result<(), Infallible> {
            self.0.push(')');
            Ok(())
        }
        fn string_begin(&mut self) -> Result<(), Infallible> {
            self.0.push('"');
            Ok(())
        }
        fn string_end(&mut self) -> Result<(), Infallible> {
            self.0.push('"');
            Ok(())
        }
        fn number_begin(&mut self) -> Result<(), Infallible> {
            self.0.push('<');
            Ok(())
        }
        fn number_end(&mut self) -> Result<(), Infallible> {
            self.0.push('>');
            Ok(())
        }
        fn character(&mut self, c: char) -> Result<(), Infallible> {
            self.0.push(c);
            Ok(())
        }
        fn true_literal(&mut self) -> Result<(), Infallible> {
            self.0.push('T');
            Ok(())
        }
        fn false_literal(&mut self) -> Result<(), Infallible> {
            self.0.push('F');
            Ok(())
        }
        fn null_literal(&mut self) -> Result<(), Infallible> {
            self.0.push('N');
            Ok(())
        }
        fn fail(&mut self, error: ParserError) -> Result<(), Infallible> {
            self.0.push('!');
            self.0.push_str(&error.to_string());
            Ok(())
        }
    }

    fn trace(input: &str) -> String {
        let mut reader = Reader::new(input.chars(), Trace::default());
        let _ = reader.read_value();
        reader.into_handler().0
    }

    fn trace_all(input: &str) -> String {
        let mut reader = Reader::new(input.chars(), Trace::default());
        let _ = reader.read_values();
        reader.into_handler().0
    }

    #[test]
    fn object_events() {
        insta::assert_snapshot!(trace(r#"{"a": [1, true], "b": null}"#), @r#"{("a"[<1>T])("b"N)}"#);
    }

    #[test]
    fn scalar_events() {
        insta::assert_snapshot!(trace("-12.5e+3"), @"<-12.5e+3>");
        insta::assert_snapshot!(trace("false"), @"F");
        assert_eq!(trace(r#""a\tb""#), "\"a\tb\"");
    }

    #[test]
    fn false_literal_is_not_reported_as_true() {
        assert_eq!(trace("[true,false]"), "[TF]");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(trace("{ }"), "{}");
        assert_eq!(trace("[\n]"), "[]");
    }

    #[test]
    fn missing_value_reports_value_set() {
        insta::assert_snapshot!(
            trace(r#"{"a":}"#),
            @r#"{("a"<!expected one of '{', '[', '"', 't', 'f', 'n', digit, '-', found '}' at 1:6"#
        );
    }

    #[test]
    fn fails_once_without_consuming() {
        let mut reader = Reader::new("[1 2]".chars(), Trace::default());
        assert_eq!(reader.read_value(), Ok(Status::Failed));
        assert_eq!(reader.position().column, 4);
        let events = reader.into_handler().0;
        assert_eq!(events.matches('!').count(), 1);
        assert!(events.ends_with("expected ',' or ']', found '2' at 1:4"), "{events}");
    }

    #[test]
    fn truncated_input() {
        assert_eq!(trace("[1,"), "[<1>!unexpected end of input at 1:4");
        assert_eq!(trace(""), "!unexpected end of input at 1:1");
        assert_eq!(trace("\"ab"), "\"ab!unexpected end of input at 1:4");
        assert_eq!(trace("-"), "<-!unexpected end of input at 1:2");
    }

    #[test]
    fn number_grammar() {
        assert_eq!(trace("0"), "<0>");
        assert_eq!(trace("-0.0E-0"), "<-0.0E-0>");
        assert_eq!(trace("-x"), "<-!expected digit, found 'x' at 1:2");
        assert_eq!(trace("1.e5"), "<1.!expected digit, found 'e' at 1:3");
        assert_eq!(trace("1e+"), "<1e+!unexpected end of input at 1:4");
        // A leading zero ends the number; the rest is trailing input.
        assert_eq!(trace("01"), "<0>");
        assert_eq!(trace("[01]"), "[<0>!expected ',' or ']', found '1' at 1:3");
    }

    #[test]
    fn literal_mismatch() {
        assert_eq!(trace("nul"), "!unexpected end of input at 1:4");
        assert_eq!(trace("tru3"), "!expected 'e', found '3' at 1:4");
    }

    #[test]
    fn escapes() {
        assert_eq!(trace(r#""\"\\\/\b\f\n\r\t""#), "\"\"\\/\u{8}\u{c}\n\r\t\"");
        assert_eq!(trace(r#""Aé""#), "\"Aé\"");
        assert_eq!(trace(r#""\x""#), format!("\"!expected {}, found 'x' at 1:3", Expected::Escape));
        assert_eq!(trace(r#""\u12G4""#), "\"!expected hex digit, found 'G' at 1:6");
    }

    #[test]
    fn surrogate_pairs() {
        assert_eq!(trace(r#""\ud83d\ude00""#), "\"\u{1F600}\"");
        assert_eq!(
            trace(r#""\ud83d""#),
            "\"!invalid unicode escape sequence \\uD83D at 1:8"
        );
        assert_eq!(
            trace(r#""\ude00""#),
            "\"!invalid unicode escape sequence \\uDE00 at 1:8"
        );
        // Reported at the first digit that cannot start a low surrogate.
        assert_eq!(
            trace(r#""\ud83d\u0041""#),
            "\"!invalid unicode escape sequence \\uD83D at 1:10"
        );
        assert_eq!(
            trace(r#""\ud83d\udbff""#),
            "\"!invalid unicode escape sequence \\uD83D at 1:11"
        );
        assert_eq!(trace(r#""\uD83D\uDFFF""#), "\"\u{1F7FF}\"");
        // A backslash that does not start `\u` is left unread.
        assert_eq!(
            trace(r#""\ud83d\x""#),
            "\"!invalid unicode escape sequence \\uD83D at 1:8"
        );
    }

    #[test]
    fn pair_errors() {
        assert_eq!(trace("{1:2}"), "{(\"!expected '\"', found '1' at 1:2");
        assert_eq!(trace(r#"{"a" 1}"#), "{(\"a\"!expected ':', found '1' at 1:6");
        assert_eq!(trace(r#"{"a":1,}"#), "{(\"a\"<1>)(\"!expected '\"', found '}' at 1:8");
    }

    #[test]
    fn multiple_values() {
        assert_eq!(trace_all(" 1 [] \"x\"\n"), "<1>[]\"x\"");
        assert_eq!(trace_all("   "), "");
        assert_eq!(trace_all("1 ] 2"), "<1><!expected one of '{', '[', '\"', 't', 'f', 'n', digit, '-', found ']' at 1:3");
    }

    #[test]
    fn trailing_input_is_left_unread() {
        let mut reader = Reader::new("true x".chars(), ());
        assert_eq!(reader.read_value(), Ok(Status::Complete));
        assert_eq!(reader.position().column, 6);
        assert_eq!(reader.read_end(), Ok(Status::Failed));
        let mut reader = Reader::new(" null \t".chars(), ());
        assert_eq!(reader.read_value(), Ok(Status::Complete));
        assert_eq!(reader.read_end(), Ok(Status::Complete));
    }

    #[test]
    fn nesting_limit() {
        let options = ReaderOptions {
            max_depth: Some(2),
            ..Default::default()
        };
        let mut reader = Reader::with_options("[{\"a\":[1]}]".chars(), Trace::default(), options);
        assert_eq!(reader.read_value(), Ok(Status::Failed));
        assert_eq!(
            reader.into_handler().0,
            "[{(\"a\"!nesting deeper than 2 levels at 1:7"
        );

        let mut reader = Reader::with_options("[[1],[2]]".chars(), (), options);
        assert_eq!(reader.read_value(), Ok(Status::Complete));
    }

    #[test]
    fn unbounded_nesting() {
        let depth = 500;
        let input = "[".repeat(depth) + &"]".repeat(depth);
        let options = ReaderOptions {
            max_depth: None,
            ..Default::default()
        };
        let mut reader = Reader::with_options(input.chars(), (), options);
        assert_eq!(reader.read_value(), Ok(Status::Complete));
        let mut reader = Reader::new(input.chars(), ());
        assert_eq!(reader.read_value(), Ok(Status::Failed));
    }

    #[test]
    fn unicode_whitespace_is_opt_in() {
        let input = "\u{3000}[1,\u{a0}2]";
        assert_eq!(Reader::new(input.chars(), ()).read_value(), Ok(Status::Failed));
        let options = ReaderOptions {
            allow_unicode_whitespace: true,
            ..Default::default()
        };
        let mut reader = Reader::with_options(input.chars(), (), options);
        assert_eq!(reader.read_value(), Ok(Status::Complete));
    }

    #[test]
    fn handler_errors_abort() {
        struct NoStrings;

        impl Handler for NoStrings {
            type Error = &'static str;

            fn string_begin(&mut self) -> Result<(), &'static str> {
                Err("strings are not allowed")
            }
        }

        let mut reader = Reader::new("[1, \"x\", 2]".chars(), NoStrings);
        assert_eq!(reader.read_value(), Err("strings are not allowed"));

        let mut reader = Reader::new("[1, 2]".chars(), NoStrings);
        assert_eq!(reader.read_value(), Ok(Status::Complete));
    }

    #[test]
    fn handler_by_mutable_reference() {
        let mut events = Trace::default();
        let mut reader = Reader::new("[null]".chars(), &mut events);
        assert_eq!(reader.read_value(), Ok(Status::Complete));
        assert_eq!(events.0, "[N]");
    }
}
