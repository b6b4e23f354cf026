// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Measures the longest prefix of `input` that matches the JSON number grammar
///
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
///
/// Returns the length of the number token. A prefix that cannot start a
/// number, a `.` without a following digit, or an exponent marker without a
/// following digit is `InvalidValue`. Trailing input (including more digits
/// after a leading `0`) is left for the caller to reject.
pub fn scan_number(input: &[u8]) -> Result<usize, ParseError> {
    let at = |i: usize| input.get(i).copied();
    let digits_from = |mut i: usize| {
        while matches!(at(i), Some(b'0'..=b'9')) {
            i += 1;
        }
        i
    };

    let mut pos = 0;
    if at(pos) == Some(b'-') {
        pos += 1;
    }
    match at(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos = digits_from(pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }
    if at(pos) == Some(b'.') {
        pos += 1;
        if !matches!(at(pos), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        pos = digits_from(pos);
    }
    if let Some(b'e' | b'E') = at(pos) {
        pos += 1;
        if let Some(b'+' | b'-') = at(pos) {
            pos += 1;
        }
        if !matches!(at(pos), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        pos = digits_from(pos);
    }
    Ok(pos)
}

/// Converts a number token already validated by [`scan_number`] to `f64`.
///
/// Magnitudes that round to infinity are `NumberTooBig`; underflow silently
/// rounds towards zero.
pub fn convert_number(token: &[u8]) -> Result<f64, ParseError> {
    let text = core::str::from_utf8(token).map_err(|_| ParseError::InvalidValue)?;
    let value: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
    if value.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<f64, ParseError> {
        let len = scan_number(input.as_bytes())?;
        convert_number(&input.as_bytes()[..len])
    }

    #[test]
    fn test_valid_numbers() {
        let cases: &[(&str, f64)] = &[
            ("0", 0.0),
            ("-0", -0.0),
            ("-0.0", -0.0),
            ("1", 1.0),
            ("-1", -1.0),
            ("1.5", 1.5),
            ("-1.5", -1.5),
            ("3.1416", 3.1416),
            ("1E10", 1E10),
            ("1e10", 1e10),
            ("1E+10", 1E+10),
            ("1E-10", 1E-10),
            ("-1E10", -1E10),
            ("-1e10", -1e10),
            ("-1E+10", -1E+10),
            ("-1E-10", -1E-10),
            ("1.234E+10", 1.234E+10),
            ("1.234E-10", 1.234E-10),
            ("1e-10000", 0.0),
            ("1.0000000000000002", 1.0000000000000002),
            ("4.9406564584124654e-324", 4.9406564584124654e-324),
            ("-4.9406564584124654e-324", -4.9406564584124654e-324),
            ("2.2250738585072009e-308", 2.2250738585072009e-308),
            ("2.2250738585072014e-308", 2.2250738585072014e-308),
            ("1.7976931348623157e+308", 1.7976931348623157e+308),
        ];
        for &(input, expected) in cases {
            assert_eq!(parse(input), Ok(expected), "input {input:?}");
        }
    }

    #[test]
    fn test_scan_stops_at_token_end() {
        assert_eq!(scan_number(b"123,"), Ok(3));
        assert_eq!(scan_number(b"-0.5e3]"), Ok(6));
        // Leading zero ends the token; the trailing digits are the caller's problem
        assert_eq!(scan_number(b"0123"), Ok(1));
        assert_eq!(scan_number(b"0x0"), Ok(1));
    }

    #[test]
    fn test_invalid_numbers() {
        for input in [
            "+0", "+1", ".123", "1.", "-", "INF", "inf", "NAN", "nan", "1e", "1e+", "1E-", "-.5",
            "",
        ] {
            assert_eq!(
                scan_number(input.as_bytes()),
                Err(ParseError::InvalidValue),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_number_too_big() {
        assert_eq!(parse("1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(parse("-1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(parse("1e1000"), Err(ParseError::NumberTooBig));
    }
}
