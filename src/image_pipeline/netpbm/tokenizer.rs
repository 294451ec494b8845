//! Header token reader.
//!
//! Whitespace separates tokens and `#` starts a comment running to the end
//! of the line. A token ends at whitespace, `#` or end of input; exactly one
//! terminating whitespace byte is consumed, a terminating `#` is left in
//! place. After the last header token the cursor therefore sits on the
//! first pixel byte.

use crate::image_pipeline::common::error::{Result, VisionError};

pub(crate) struct HeaderTokenizer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderTokenizer<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the first byte not consumed by the header.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn skip_blank(&mut self) {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.data.len() || self.data[self.pos] != b'#' {
                return;
            }
            while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                self.pos += 1;
            }
        }
    }

    pub(crate) fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.skip_blank();

        let start = self.pos;
        while self.pos < self.data.len()
            && !self.data[self.pos].is_ascii_whitespace()
            && self.data[self.pos] != b'#'
        {
            self.pos += 1;
        }
        let end = self.pos;

        if self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        if start == end {
            return Err(VisionError::MalformedHeader(format!("missing {what}")));
        }
        let data: &'a [u8] = self.data;
        std::str::from_utf8(&data[start..end])
            .map_err(|_| VisionError::MalformedHeader(format!("non-ASCII {what}")))
    }

    pub(crate) fn next_number(&mut self, what: &str) -> Result<usize> {
        let token = self.next_token(what)?;
        token
            .parse::<usize>()
            .map_err(|_| VisionError::MalformedHeader(format!("bad {what} '{token}'")))
    }
}
