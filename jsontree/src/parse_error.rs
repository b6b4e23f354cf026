// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing
///
/// Every error is raised at the byte where the violation is detected; the
/// parser stops there and releases whatever it had built so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended (or contained only whitespace) where a value was expected.
    ExpectValue,
    /// A literal or number did not match the JSON grammar.
    InvalidValue,
    /// A complete value was followed by more non-whitespace input.
    RootNotSingular,
    /// A number overflowed to infinity when converted to `f64`.
    NumberTooBig,
    /// Input ended inside a string.
    MissQuotationMark,
    /// A backslash was followed by a character that is not a JSON escape.
    InvalidStringEscape,
    /// An unescaped control character (below 0x20) appeared inside a string.
    InvalidStringChar,
    /// A `\u` escape was not followed by four hex digits.
    InvalidUnicodeHex,
    /// A high surrogate was not followed by an escaped low surrogate.
    InvalidUnicodeSurrogate,
    /// An array element was followed by something other than `,` or `]`.
    MissCommaOrSquareBracket,
    /// An object member did not start with a string key.
    MissKey,
    /// An object key was not followed by `:`.
    MissColon,
    /// An object member was followed by something other than `,` or `}`.
    MissCommaOrCurlyBracket,
    /// Arrays and objects were nested deeper than the parser's limit.
    MaxDepthReached,
}

impl ParseError {
    /// Short human readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number out of range",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
            ParseError::InvalidUnicodeHex => "invalid hex digits in unicode escape",
            ParseError::InvalidUnicodeSurrogate => "invalid unicode surrogate pair",
            ParseError::MissCommaOrSquareBracket => "expected ',' or ']'",
            ParseError::MissKey => "expected a string key",
            ParseError::MissColon => "expected ':'",
            ParseError::MissCommaOrCurlyBracket => "expected ',' or '}'",
            ParseError::MaxDepthReached => "maximum nesting depth exceeded",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

impl core::error::Error for ParseError {}
