//! The callback interface between the [`Reader`](crate::Reader) and whatever
//! consumes its events.

use core::convert::Infallible;

use crate::error::ParserError;

/// Receives the events of a [`Reader`](crate::Reader).
///
/// Every method defaults to doing nothing, so an implementation only
/// overrides the events it cares about. Composite productions are bracketed by
/// a `*_begin`/`*_end` pair; the body of a string or number arrives one
/// [`character`](Handler::character) at a time, and the three literals are
/// single calls.
///
/// Returning `Err` from any method aborts the current parse and hands the
/// error to the caller of the reader's entry point.
///
/// # Examples
///
/// Counting the characters of every string and number without building
/// anything:
///
/// ```rust
/// use std::convert::Infallible;
///
/// use jsonsax::{Handler, Reader};
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl Handler for Count {
///     type Error = Infallible;
///
///     fn character(&mut self, _c: char) -> Result<(), Infallible> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let mut reader = Reader::new(r#"{"ab": [12, "c"]}"#.chars(), Count::default());
/// reader.read_value().unwrap();
/// assert_eq!(reader.handler().0, 5);
/// ```
#[allow(unused_variables)]
pub trait Handler {
    /// Error type that aborts a parse.
    type Error;

    fn object_begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn object_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn array_begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn array_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A `"key": value` member of an object begins; the key string follows.
    fn pair_begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn pair_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn string_begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn string_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn number_begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn number_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// One character of a string or number body, with string escapes
    /// already decoded.
    fn character(&mut self, c: char) -> Result<(), Self::Error> {
        Ok(())
    }

    fn true_literal(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn false_literal(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn null_literal(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The input violates the grammar.
    ///
    /// Called at most once per top-level parse, before the offending
    /// character is consumed. The reader stops the parse either way;
    /// returning `Ok` makes the entry point report
    /// [`Status::Failed`](crate::Status::Failed) instead of an error.
    fn fail(&mut self, error: ParserError) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// The bare validator: ignores every event and never aborts.
impl Handler for () {
    type Error = Infallible;
}

impl<H: Handler + ?Sized> Handler for &mut H {
    type Error = H::Error;

    fn object_begin(&mut self) -> Result<(), Self::Error> {
        (**self).object_begin()
    }

    fn object_end(&mut self) -> Result<(), Self::Error> {
        (**self).object_end()
    }

    fn array_begin(&mut self) -> Result<(), Self::Error> {
        (**self).array_begin()
    }

    fn array_end(&mut self) -> Result<(), Self::Error> {
        (**self).array_end()
    }

    fn pair_begin(&mut self) -> Result<(), Self::Error> {
        (**self).pair_begin()
    }

    fn pair_end(&mut self) -> Result<(), Self::Error> {
        (**self).pair_end()
    }

    fn string_begin(&mut self) -> Result<(), Self::Error> {
        (**self).string_begin()
    }

    fn string_end(&mut self) -> Result<(), Self::Error> {
        (**self).string_end()
    }

    fn number_begin(&mut self) -> Result<(), Self::Error> {
        (**self).number_begin()
    }

    fn number_end(&mut self) -> Result<(), Self::Error> {
        (**self).number_end()
    }

    fn character(&mut self, c: char) -> Result<(), Self::Error> {
        (**self).character(c)
    }

    fn true_literal(&mut self) -> Result<(), Self::Error> {
        (**self).true_literal()
    }

    fn false_literal(&mut self) -> Result<(), Self::Error> {
        (**self).false_literal()
    }

    fn null_literal(&mut self) -> Result<(), Self::Error> {
        (**self).null_literal()
    }

    fn fail(&mut self, error: ParserError) -> Result<(), Self::Error> {
        (**self).fail(error)
    }
}
