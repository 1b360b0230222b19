//! Decoding of `\uXXXX` escapes.
//!
//! [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal digits
//! into a UTF-16 code unit as they arrive. Code units outside the surrogate
//! range are characters on their own; a high surrogate must be joined with the
//! low surrogate of the following escape through [`join_surrogates`].

/// Classification of a decoded UTF-16 code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CodeUnit {
    /// A complete character from the Basic Multilingual Plane.
    Scalar(char),
    /// `U+D800..=U+DBFF`, the first half of a surrogate pair.
    HighSurrogate(u16),
    /// `U+DC00..=U+DFFF`, which is only valid after a high surrogate.
    LowSurrogate(u16),
}

impl CodeUnit {
    pub(crate) fn classify(unit: u16) -> Self {
        match unit {
            0xD800..=0xDBFF => Self::HighSurrogate(unit),
            0xDC00..=0xDFFF => Self::LowSurrogate(unit),
            // Everything outside the surrogate block is a scalar value.
            _ => Self::Scalar(
                char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER),
            ),
        }
    }
}

/// Accumulates four hexadecimal digits into one UTF-16 code unit.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any accumulated digits.
    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    pub fn hex_val(c: char) -> Option<u16> {
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one digit.
    ///
    /// Returns `Ok(None)` while fewer than four digits have arrived and
    /// `Ok(Some(unit))` on the fourth, after which the buffer is empty again.
    /// A non-hex character is handed back as the error and leaves the buffer
    /// untouched.
    pub fn feed(&mut self, c: char) -> Result<Option<u16>, char> {
        let d = Self::hex_val(c).ok_or(c)?;

        debug_assert!(self.len < 4);
        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }
}

/// Joins a high and a low surrogate into a supplementary-plane character.
pub(crate) fn join_surrogates(high: u16, low: u16) -> Option<char> {
    if !(0xD800..=0xDBFF).contains(&high) || !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn feed_all(buf: &mut UnicodeEscapeBuffer, digits: &str) -> Option<u16> {
        let mut out = None;
        for ch in digits.chars() {
            out = buf.feed(ch).unwrap();
        }
        out
    }

    #[test]
    fn basic_decoding() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed('0').unwrap(), None);
        assert_eq!(buf.feed('0').unwrap(), None);
        assert_eq!(buf.feed('4').unwrap(), None);
        assert_eq!(buf.feed('1').unwrap(), Some(0x41));
        assert_eq!(CodeUnit::classify(0x41), CodeUnit::Scalar('A'));
    }

    #[test]
    fn mixed_case_hex() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(feed_all(&mut buf, "AbCd"), Some(0xABCD));
    }

    #[test]
    fn reset_clears_buffer() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert!(buf.feed('F').unwrap().is_none());
        buf.reset();
        assert_eq!(feed_all(&mut buf, "0020"), Some(0x20));
    }

    #[test]
    fn invalid_hex_is_handed_back() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed('G'), Err('G'));
        assert_eq!(buf.feed('"'), Err('"'));
    }

    #[test]
    fn surrogates_are_classified() {
        assert_eq!(CodeUnit::classify(0xD83D), CodeUnit::HighSurrogate(0xD83D));
        assert_eq!(CodeUnit::classify(0xDE00), CodeUnit::LowSurrogate(0xDE00));
        assert_eq!(CodeUnit::classify(0xFFFF), CodeUnit::Scalar('\u{FFFF}'));
    }

    #[test]
    fn joins_surrogate_pair() {
        assert_eq!(join_surrogates(0xD83D, 0xDE00), Some('\u{1F600}'));
        assert_eq!(join_surrogates(0xDBFF, 0xDFFF), Some('\u{10FFFF}'));
        assert_eq!(join_surrogates(0xDE00, 0xD83D), None);
        assert_eq!(join_surrogates(0x0041, 0xDE00), None);
    }

    #[quickcheck]
    fn any_code_unit_decodes(unit: u16, upper: bool) -> bool {
        let digits = if upper {
            format!("{unit:04X}")
        } else {
            format!("{unit:04x}")
        };
        feed_all(&mut UnicodeEscapeBuffer::new(), &digits) == Some(unit)
    }

    #[quickcheck]
    fn utf16_pairs_join_back(c: char) -> bool {
        let mut units = [0; 2];
        match *c.encode_utf16(&mut units) {
            [high, low] => join_surrogates(high, low) == Some(c),
            [unit] => CodeUnit::classify(unit) == CodeUnit::Scalar(c),
            _ => false,
        }
    }
}
