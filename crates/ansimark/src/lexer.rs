//! The lexer for format strings.
//!
//! The lexer has two modes. In text mode, it produces runs of plain text,
//! placeholders `#$`, and the `#[` starting a block. In block mode, it skips
//! whitespace and produces numbers, identifiers, commas, colons, and the `]`
//! ending the block, which switches back to text mode.
//!
//! Escaped hashes `##` stay part of the surrounding text run and keep both
//! characters. The parser collapses them into one `#` after assembling its
//! output.
//!
//! ```
//! # use ansimark::lexer::{Lexer, TokenKind};
//! let tokens = Lexer::new("a##b #[Red, 1]#$").tokenize()?;
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(kinds, [
//!     TokenKind::PlainText,
//!     TokenKind::BlockStart,
//!     TokenKind::Identifier,
//!     TokenKind::Comma,
//!     TokenKind::Number,
//!     TokenKind::BlockEnd,
//!     TokenKind::Placeholder,
//!     TokenKind::EndOfInput,
//! ]);
//! assert_eq!(tokens[0].text(), "a##b ");
//! # Ok::<(), ansimark::FormatError>(())
//! ```

use crate::error::{ErrorKind, FormatError};

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The `#[` starting a block.
    BlockStart,
    /// The `]` ending a block.
    BlockEnd,
    /// The `,` separating clauses inside a block.
    Comma,
    /// The `:` separating the components of a 24-bit color.
    Colon,
    /// A run of ASCII letters inside a block.
    Identifier,
    /// A run of ASCII digits inside a block.
    Number,
    /// A run of text outside blocks, possibly containing escaped hashes.
    PlainText,
    /// The `#$` marking a value slot.
    Placeholder,
    /// The end of the format string, returned repeatedly once reached.
    EndOfInput,
}

/// A token.
///
/// The token's text is a slice of the format string, hence the token cannot
/// outlive the format string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    offset: usize,
}

impl<'a> Token<'a> {
    /// Get the kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the byte offset of the text within the format string.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Determine whether the text is empty, which is the case for the end of
    /// input only.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Text,
    Block,
}

/// A lexer for format strings.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    mode: Mode,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given format string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            mode: Mode::Text,
        }
    }

    /// Lex the entire format string.
    ///
    /// The returned tokens always end with [`TokenKind::EndOfInput`].
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, FormatError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if token.kind() == TokenKind::EndOfInput {
                return Ok(tokens);
            }
        }
    }

    /// Lex the next token.
    ///
    /// Upon error, the lexer does not advance, so that calling this method
    /// again fails the same way.
    pub fn next_token(&mut self) -> Result<Token<'a>, FormatError> {
        match self.mode {
            Mode::Text => self.next_text_token(),
            Mode::Block => self.next_block_token(),
        }
    }

    #[inline]
    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.cursor + offset).copied()
    }

    fn token(&mut self, kind: TokenKind, length: usize) -> Token<'a> {
        let offset = self.cursor;
        self.cursor += length;
        Token {
            kind,
            text: &self.input[offset..self.cursor],
            offset,
        }
    }

    fn end_of_input(&self) -> Token<'a> {
        Token {
            kind: TokenKind::EndOfInput,
            text: "",
            offset: self.input.len(),
        }
    }

    fn unexpected_symbol(&self, offset: usize) -> FormatError {
        let rest = &self.input[offset..];
        let symbol = rest.chars().next().map_or(rest, |c| &rest[..c.len_utf8()]);
        FormatError::new(ErrorKind::UnexpectedSymbol, offset).with_text(symbol)
    }

    fn next_text_token(&mut self) -> Result<Token<'a>, FormatError> {
        match (self.peek_byte(0), self.peek_byte(1)) {
            (None, _) => return Ok(self.end_of_input()),
            (Some(b'#'), Some(b'$')) => return Ok(self.token(TokenKind::Placeholder, 2)),
            (Some(b'#'), Some(b'[')) => {
                self.mode = Mode::Block;
                return Ok(self.token(TokenKind::BlockStart, 2));
            }
            (Some(b'#'), Some(b'#')) => (),
            (Some(b'#'), None) => {
                return Err(FormatError::new(ErrorKind::UnexpectedEnd, self.cursor).with_text("#"))
            }
            (Some(b'#'), Some(_)) => return Err(self.unexpected_symbol(self.cursor + 1)),
            (Some(_), _) => (),
        }

        // Consume text up to but excluding the next hash that does not start
        // an escaped hash.
        let mut length = 0;
        while let Some(byte) = self.peek_byte(length) {
            if byte == b'#' {
                if self.peek_byte(length + 1) == Some(b'#') {
                    length += 2;
                } else {
                    break;
                }
            } else {
                length += 1;
            }
        }

        Ok(self.token(TokenKind::PlainText, length))
    }

    fn next_block_token(&mut self) -> Result<Token<'a>, FormatError> {
        // Also skip vertical tabs, which C's isspace() treats as whitespace.
        while let Some(byte) = self.peek_byte(0) {
            if byte.is_ascii_whitespace() || byte == 0x0b {
                self.cursor += 1;
            } else {
                break;
            }
        }

        let Some(byte) = self.peek_byte(0) else {
            return Ok(self.end_of_input());
        };

        let token = match byte {
            b',' => self.token(TokenKind::Comma, 1),
            b':' => self.token(TokenKind::Colon, 1),
            b']' => {
                self.mode = Mode::Text;
                self.token(TokenKind::BlockEnd, 1)
            }
            b'0'..=b'9' => {
                let length = self.run_length(|b| b.is_ascii_digit());
                self.token(TokenKind::Number, length)
            }
            b'a'..=b'z' | b'A'..=b'Z' => {
                let length = self.run_length(|b| b.is_ascii_alphabetic());
                self.token(TokenKind::Identifier, length)
            }
            _ => return Err(self.unexpected_symbol(self.cursor)),
        };

        Ok(token)
    }

    fn run_length<P: Fn(u8) -> bool>(&self, predicate: P) -> usize {
        self.input.as_bytes()[self.cursor..]
            .iter()
            .take_while(|&&b| predicate(b))
            .count()
    }
}
