// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::array::Array;
use crate::escape_processor::EscapeProcessor;
use crate::number_parser::{convert_number, scan_number};
use crate::object::{Member, Object};
use crate::parse_error::ParseError;
use crate::scratch_stack::ScratchStack;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// Default limit on how deeply arrays and objects may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A recursive-descent JSON parser that builds a [`Value`] tree.
///
/// The parser owns a [`ScratchStack`] that is reused across documents, so
/// parsing many documents with one `Parser` keeps a single warm set of
/// working buffers. Between calls the scratch stack is always empty.
///
/// Each nested array or object costs a few stack frames, here and in the
/// recursive `Drop`, `Clone`, equality and serialization of the tree. Nesting
/// is therefore limited to [`DEFAULT_MAX_DEPTH`] containers (see
/// [`Parser::with_max_depth`]); deeper input is rejected with
/// [`ParseError::MaxDepthReached`].
///
/// # Example
/// ```
/// use jsontree::Parser;
/// let mut parser = Parser::new();
/// let value = parser.parse(r#"{"name": ["value", 1, true]}"#).unwrap();
/// assert_eq!(value.as_object().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct Parser {
    scratch: ScratchStack,
    depth: usize,
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            scratch: ScratchStack::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a parser whose string buffer holds `capacity` bytes before
    /// its first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: ScratchStack::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Sets how many arrays and objects may be open at once. A limit of zero
    /// accepts only scalar documents.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses one complete JSON document.
    pub fn parse(&mut self, text: &str) -> Result<Value, ParseError> {
        self.parse_slice(text.as_bytes())
    }

    /// Parses one complete JSON document from raw bytes.
    ///
    /// The end of the slice is the end of the document. A NUL byte inside a
    /// string is reported as [`ParseError::MissQuotationMark`], as if the
    /// text had ended there; anywhere else it is ordinary (invalid) input.
    pub fn parse_slice(&mut self, input: &[u8]) -> Result<Value, ParseError> {
        let mut input = SliceInputBuffer::new(input);
        let result = self.parse_document(&mut input);
        debug_assert!(
            self.scratch.is_empty(),
            "scratch stack not drained: {} slots left",
            self.scratch.len()
        );
        debug_assert_eq!(self.depth, 0, "unbalanced container depth");
        if let Err(err) = &result {
            log::debug!(
                "rejected JSON document: {} (at byte {})",
                err,
                input.current_pos()
            );
        }
        result
    }

    /// Number of scratch slots currently in use. Zero whenever no parse is
    /// in progress.
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    /// Frees the scratch buffers kept between documents.
    pub fn release_scratch(&mut self) {
        self.scratch.release();
    }

    fn parse_document(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        input.skip_whitespace();
        let value = self.parse_value(input)?;
        input.skip_whitespace();
        if !input.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn parse_value(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        match input.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => parse_literal(input, b"null", Value::Null),
            Some(b't') => parse_literal(input, b"true", Value::Bool(true)),
            Some(b'f') => parse_literal(input, b"false", Value::Bool(false)),
            Some(b'"') => self.parse_string(input).map(Value::String),
            Some(b'[') => self.parse_nested(input, Self::parse_array),
            Some(b'{') => self.parse_nested(input, Self::parse_object),
            Some(_) => parse_number(input),
        }
    }

    /// Runs `parse_container` one nesting level deeper, failing before any
    /// recursion once the depth limit is reached.
    fn parse_nested(
        &mut self,
        input: &mut SliceInputBuffer<'_>,
        parse_container: fn(&mut Self, &mut SliceInputBuffer<'_>) -> Result<Value, ParseError>,
    ) -> Result<Value, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::MaxDepthReached);
        }
        self.depth += 1;
        let result = parse_container(self, input);
        self.depth -= 1;
        result
    }

    /// Decodes a string token into a freshly allocated, exactly sized buffer.
    /// On error nothing decoded so far stays on the scratch stack.
    fn parse_string(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Vec<u8>, ParseError> {
        let mark = self.scratch.bytes.mark();
        match self.decode_string(input) {
            Ok(()) => Ok(self.scratch.bytes.pop_from(mark)),
            Err(err) => {
                self.scratch.bytes.rewind(mark);
                Err(err)
            }
        }
    }

    fn decode_string(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        debug_assert_eq!(input.peek(), Some(b'"'));
        input.advance(1);
        loop {
            // Copy the run of bytes that need no decoding in one go
            let remaining = input.remaining();
            let run = remaining
                .iter()
                .position(|&b| b == b'"' || b == b'\\' || b < 0x20)
                .unwrap_or(remaining.len());
            if run > 0 {
                self.scratch
                    .bytes
                    .extend_from_slice(remaining.get(..run).unwrap_or_default());
                input.advance(run);
            }

            match input.consume_byte() {
                // A NUL byte ends the text for C callers, so it leaves the
                // string unterminated
                None | Some(0) => return Err(ParseError::MissQuotationMark),
                Some(b'"') => return Ok(()),
                Some(b'\\') => match input.consume_byte() {
                    Some(b'u') => self.decode_unicode_escape(input)?,
                    Some(escape) => {
                        let byte = EscapeProcessor::process_simple_escape(escape)?;
                        self.scratch.bytes.push(byte);
                    }
                    None => return Err(ParseError::InvalidStringEscape),
                },
                Some(_) => return Err(ParseError::InvalidStringChar),
            }
        }
    }

    /// Decodes the `XXXX` of a `\uXXXX` escape (and its low surrogate
    /// partner, if it is a high surrogate) as UTF-8 onto the scratch stack.
    fn decode_unicode_escape(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        let mut codepoint = EscapeProcessor::parse_hex4(input.remaining())?;
        input.advance(4);
        if EscapeProcessor::is_high_surrogate(codepoint) {
            if !input.consume_literal(b"\\u") {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            let low = EscapeProcessor::parse_hex4(input.remaining())?;
            input.advance(4);
            codepoint = EscapeProcessor::combine_surrogate_pair(codepoint, low)?;
        }
        let mut utf8 = [0u8; 4];
        self.scratch
            .bytes
            .extend_from_slice(EscapeProcessor::encode_utf8(codepoint, &mut utf8));
        Ok(())
    }

    fn parse_array(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        debug_assert_eq!(input.peek(), Some(b'['));
        input.advance(1);
        input.skip_whitespace();
        if input.consume_if(b']') {
            return Ok(Value::Array(Array::new()));
        }
        let mark = self.scratch.elements.mark();
        match self.parse_elements(input) {
            Ok(()) => {
                let elements = self.scratch.elements.pop_from(mark);
                log::trace!("parsed array of {} elements", elements.len());
                Ok(Value::Array(Array::from_vec(elements)))
            }
            Err(err) => {
                // Drops (and so frees) every element parsed so far
                self.scratch.elements.rewind(mark);
                Err(err)
            }
        }
    }

    fn parse_elements(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        loop {
            input.skip_whitespace();
            let element = self.parse_value(input)?;
            self.scratch.elements.push(element);
            input.skip_whitespace();
            match input.consume_byte() {
                Some(b',') => {}
                Some(b']') => return Ok(()),
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        debug_assert_eq!(input.peek(), Some(b'{'));
        input.advance(1);
        input.skip_whitespace();
        if input.consume_if(b'}') {
            return Ok(Value::Object(Object::new()));
        }
        let mark = self.scratch.members.mark();
        match self.parse_members(input) {
            Ok(()) => {
                let members = self.scratch.members.pop_from(mark);
                log::trace!("parsed object of {} members", members.len());
                Ok(Value::Object(Object::from_vec(members)))
            }
            Err(err) => {
                self.scratch.members.rewind(mark);
                Err(err)
            }
        }
    }

    fn parse_members(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        loop {
            input.skip_whitespace();
            if input.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            // The key is owned here until the member is pushed, so an error
            // below releases it on return
            let key = self.parse_string(input)?;
            input.skip_whitespace();
            if !input.consume_if(b':') {
                return Err(ParseError::MissColon);
            }
            input.skip_whitespace();
            let value = self.parse_value(input)?;
            self.scratch.members.push(Member::new(key, value));
            input.skip_whitespace();
            match input.consume_byte() {
                Some(b',') => {}
                Some(b'}') => return Ok(()),
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}

fn parse_literal(
    input: &mut SliceInputBuffer<'_>,
    literal: &[u8],
    value: Value,
) -> Result<Value, ParseError> {
    if input.consume_literal(literal) {
        Ok(value)
    } else {
        Err(ParseError::InvalidValue)
    }
}

fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
    let remaining = input.remaining();
    let len = scan_number(remaining)?;
    let token = remaining.get(..len).ok_or(ParseError::InvalidValue)?;
    let number = convert_number(token)?;
    input.advance(len);
    Ok(Value::Number(number))
}
