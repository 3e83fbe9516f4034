//! Comment lexing.
//!
//! Comments are delivered to the callback like any other unit; the token
//! text includes the `//`, `/*` and `*/` delimiters.

use crate::error::LexResult;
use crate::Lexer;

impl<'a, 'd> Lexer<'a, 'd> {
    /// Consumes a line comment, leaving the terminating `\n` in place.
    ///
    /// The leading `/` has been consumed; the cursor is on the second one.
    pub(crate) fn read_line_comment(&mut self) {
        self.stream.read_sequence(|c| c != b'\n');
    }

    /// Consumes a block comment up to and including the first `*/`.
    ///
    /// The leading `/` has been consumed; the cursor is on the `*`. Nested
    /// `/*` has no meaning. Running out of input fails with "unexpected end
    /// of file".
    pub(crate) fn read_block_comment(&mut self) -> LexResult<()> {
        let mut c = self.stream.next()?;
        loop {
            if c == b'*' {
                c = self.stream.next()?;
                if c == b'/' {
                    self.stream.get();
                    return Ok(());
                }
            } else {
                c = self.stream.next()?;
            }
        }
    }
}
