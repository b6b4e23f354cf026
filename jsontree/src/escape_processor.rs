// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Pure helpers for decoding JSON string escapes.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for anything outside
    /// `" \ / b f n r t`. The `u` escape is handled separately.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'\\' => Ok(b'\\'),
            b'"' => Ok(b'"'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Validate that a byte represents a valid hexadecimal digit.
    ///
    /// # Returns
    /// The numeric value (0-15) of the hex digit, or an error if invalid.
    pub fn validate_hex_digit(byte: u8) -> Result<u32, ParseError> {
        match byte {
            b'0'..=b'9' => Ok((byte - b'0') as u32),
            b'a'..=b'f' => Ok((byte - b'a' + 10) as u32),
            b'A'..=b'F' => Ok((byte - b'A' + 10) as u32),
            _ => Err(ParseError::InvalidUnicodeHex),
        }
    }

    /// Decodes the four hex digits of a `\uXXXX` escape into a UTF-16 code unit.
    ///
    /// `hex` may be longer than four bytes; only the first four are read. Fewer
    /// than four available bytes is `InvalidUnicodeHex`.
    pub fn parse_hex4(hex: &[u8]) -> Result<u32, ParseError> {
        let digits = hex.get(..4).ok_or(ParseError::InvalidUnicodeHex)?;
        digits
            .iter()
            .try_fold(0u32, |unit, &byte| -> Result<u32, ParseError> {
                Ok((unit << 4) | Self::validate_hex_digit(byte)?)
            })
    }

    /// Check if a code unit is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(unit: u32) -> bool {
        (0xD800..=0xDBFF).contains(&unit)
    }

    /// Check if a code unit is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(unit: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&unit)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Result<u32, ParseError> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        Ok((((high - 0xD800) << 10) | (low - 0xDC00)) + 0x10000)
    }

    /// Encodes a code point as 1-4 UTF-8 bytes into `buffer`, returning the
    /// written prefix.
    ///
    /// Unlike `char::encode_utf8` this accepts lone surrogates (encoded as
    /// three bytes), since an unpaired low surrogate escape is passed through.
    pub fn encode_utf8(codepoint: u32, buffer: &mut [u8; 4]) -> &[u8] {
        debug_assert!(codepoint <= 0x10FFFF);
        let len = if codepoint <= 0x7F {
            buffer[0] = codepoint as u8;
            1
        } else if codepoint <= 0x7FF {
            buffer[0] = 0xC0 | (codepoint >> 6) as u8;
            buffer[1] = 0x80 | (codepoint & 0x3F) as u8;
            2
        } else if codepoint <= 0xFFFF {
            buffer[0] = 0xE0 | (codepoint >> 12) as u8;
            buffer[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buffer[2] = 0x80 | (codepoint & 0x3F) as u8;
            3
        } else {
            buffer[0] = 0xF0 | ((codepoint >> 18) & 0x07) as u8;
            buffer[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
            buffer[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buffer[3] = 0x80 | (codepoint & 0x3F) as u8;
            4
        };
        &buffer[..len]
    }
}
