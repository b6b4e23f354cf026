// SPDX-License-Identifier: Apache-2.0

//! Compact JSON serialization of a [`Value`] tree.

use alloc::string::String;
use alloc::vec::Vec;

use crate::scratch_stack::Stack;
use crate::value::Value;

/// Integral values with a magnitude below this are written without a
/// fraction or exponent. 2^53: every integer up to here is exact in `f64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Serializes `value` to compact JSON text.
///
/// String payloads are written byte for byte; if one holds bytes that are
/// not UTF-8 they are replaced with U+FFFD here. Use [`stringify_to_vec`] to
/// get the exact bytes instead.
///
/// # Example
/// ```
/// let value = jsontree::parse(r#"{ "a" : [ 1, 2.5, "x\n" ] }"#).unwrap();
/// assert_eq!(jsontree::stringify(&value), r#"{"a":[1,2.5,"x\n"]}"#);
/// ```
pub fn stringify(value: &Value) -> String {
    match String::from_utf8(stringify_to_vec(value)) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Serializes `value` to compact JSON, returning the raw output bytes.
pub fn stringify_to_vec(value: &Value) -> Vec<u8> {
    // The first push reserves SCRATCH_INIT_SIZE bytes.
    let mut writer = Writer { out: Stack::new() };
    writer.write_value(value);
    writer.out.into_vec()
}

/// Appends the compact JSON form of `value` to `out`.
pub fn stringify_into(value: &Value, out: &mut Vec<u8>) {
    let mut writer = Writer {
        out: Stack::from_vec(core::mem::take(out)),
    };
    writer.write_value(value);
    *out = writer.out.into_vec();
}

struct Writer {
    out: Stack<u8>,
}

impl Writer {
    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.extend_from_slice(b"null"),
            Value::Bool(true) => self.out.extend_from_slice(b"true"),
            Value::Bool(false) => self.out.extend_from_slice(b"false"),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(s),
            Value::Array(array) => {
                self.out.push(b'[');
                for (i, element) in array.iter().enumerate() {
                    if i > 0 {
                        self.out.push(b',');
                    }
                    self.write_value(element);
                }
                self.out.push(b']');
            }
            Value::Object(object) => {
                self.out.push(b'{');
                for (i, member) in object.iter().enumerate() {
                    if i > 0 {
                        self.out.push(b',');
                    }
                    self.write_string(member.key());
                    self.out.push(b':');
                    self.write_value(member.value());
                }
                self.out.push(b'}');
            }
        }
    }

    /// Writes the shortest representation that parses back to exactly `n`.
    fn write_number(&mut self, n: f64) {
        if !n.is_finite() {
            log::warn!("non-finite number {} has no JSON form, writing null", n);
            self.out.extend_from_slice(b"null");
        } else if n % 1.0 == 0.0
            && n.abs() < EXACT_INTEGER_LIMIT
            && !(n == 0.0 && n.is_sign_negative())
        {
            let mut buffer = itoa::Buffer::new();
            self.out.extend_from_slice(buffer.format(n as i64).as_bytes());
        } else {
            let mut buffer = ryu::Buffer::new();
            self.out.extend_from_slice(buffer.format_finite(n).as_bytes());
        }
    }

    fn write_string(&mut self, s: &[u8]) {
        self.out.push(b'"');
        let mut rest = s;
        while !rest.is_empty() {
            let run = rest
                .iter()
                .position(|&b| b == b'"' || b == b'\\' || b < 0x20)
                .unwrap_or(rest.len());
            let (plain, tail) = rest.split_at(run);
            self.out.extend_from_slice(plain);
            let Some((&byte, tail)) = tail.split_first() else {
                break;
            };
            self.write_escaped_byte(byte);
            rest = tail;
        }
        self.out.push(b'"');
    }

    fn write_escaped_byte(&mut self, byte: u8) {
        match byte {
            b'"' => self.out.extend_from_slice(b"\\\""),
            b'\\' => self.out.extend_from_slice(b"\\\\"),
            0x08 => self.out.extend_from_slice(b"\\b"),
            0x0C => self.out.extend_from_slice(b"\\f"),
            b'\n' => self.out.extend_from_slice(b"\\n"),
            b'\r' => self.out.extend_from_slice(b"\\r"),
            b'\t' => self.out.extend_from_slice(b"\\t"),
            _ => {
                let escape = [
                    b'\\',
                    b'u',
                    b'0',
                    b'0',
                    HEX_DIGITS[(byte >> 4) as usize],
                    HEX_DIGITS[(byte & 0x0F) as usize],
                ];
                self.out.extend_from_slice(&escape);
            }
        }
    }
}
