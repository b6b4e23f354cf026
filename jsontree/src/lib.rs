// SPDX-License-Identifier: Apache-2.0

//! A small JSON document library.
//!
//! Text is parsed into an owned [`Value`] tree, which can be queried, edited
//! in place (including array and object containers with explicit capacity
//! control) and written back out as compact JSON.
//!
//! ```
//! use jsontree::{Value, ValueType};
//!
//! let mut doc = jsontree::parse(r#"{"name": "jsontree", "tags": ["json"]}"#).unwrap();
//! let tags = doc
//!     .as_object_mut()
//!     .and_then(|object| object.find_value_mut("tags"))
//!     .and_then(Value::as_array_mut)
//!     .unwrap();
//! tags.push_back().set_string("no-std");
//! assert_eq!(tags.get(1).map(Value::value_type), Some(ValueType::String));
//! assert_eq!(
//!     jsontree::stringify(&doc),
//!     r#"{"name":"jsontree","tags":["json","no-std"]}"#
//! );
//! ```
//!
//! Strings are stored as raw bytes. `\u` escapes are decoded to UTF-8, and an
//! unpaired low surrogate escape is kept as its three-byte encoding, so a
//! string payload is not guaranteed to be valid UTF-8; [`Value::as_str`]
//! returns `None` for such strings while [`Value::as_bytes`] always works.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod array;
mod escape_processor;
mod number_parser;
mod object;
mod parse_error;
mod parser;
mod scratch_stack;
mod slice_input_buffer;
mod stringify;
mod value;

pub use array::Array;
pub use object::{Member, Object};
pub use parse_error::ParseError;
pub use parser::{Parser, DEFAULT_MAX_DEPTH};
pub use stringify::{stringify, stringify_into, stringify_to_vec};
pub use value::{Value, ValueType};

/// Parses one complete JSON document.
///
/// Leading and trailing whitespace is allowed; anything else after the root
/// value is [`ParseError::RootNotSingular`]. Arrays and objects may nest up
/// to [`DEFAULT_MAX_DEPTH`] levels. Working memory is released before
/// returning. To reuse it across many documents, keep a [`Parser`].
///
/// # Example
/// ```
/// use jsontree::ParseError;
/// assert_eq!(jsontree::parse(" true ").unwrap().as_bool(), Some(true));
/// assert_eq!(jsontree::parse("nul"), Err(ParseError::InvalidValue));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Parser::new().parse(text)
}

/// Parses one complete JSON document from raw bytes. See [`parse`].
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new().parse_slice(input)
}
