//! The recursive-descent parser compiling format strings.
//!
//! The grammar is:
//!
//! ```text
//! format ::= (text | placeholder | block)*
//! block  ::= "#[" clause ("," clause)* "]"
//! clause ::= identifier | number | number ":" number ":" number
//! ```
//!
//! An identifier names a modifier or a named color, with modifiers taking
//! precedence. A lone number is an index into the 256-color palette, whereas
//! three colon-separated numbers are a 24-bit color. Each block starts with a
//! reset, each placeholder compiles to `%s`, and the compiled string ends with
//! a reset.
//!
//! ```
//! # use ansimark::compile;
//! assert_eq!(
//!     compile("#[Bold, 123]Text #$")?,
//!     "\x1b[0m\x1b[1m\x1b[38;5;123mText %s\x1b[0m"
//! );
//! # Ok::<(), ansimark::FormatError>(())
//! ```

use crate::color::{AnsiColor, Color, Modifier};
use crate::error::{ErrorKind, FormatError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::sgr::{emit_color, emit_modifier, emit_reset};

/// The slot a placeholder compiles to.
pub const PLACEHOLDER: &str = "%s";

/// A parser for one format string.
///
/// Creating a parser lexes the entire format string. Lexical errors are
/// reported by [`Parser::new`], syntactic errors by
/// [`Parser::get_format_string`].
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given format string.
    pub fn new(input: &'a str) -> Result<Self, FormatError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            input,
            tokens,
            position: 0,
        })
    }

    /// Get the tokens, which always end with [`TokenKind::EndOfInput`].
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Compile the format string.
    pub fn get_format_string(&mut self) -> Result<String, FormatError> {
        self.position = 0;
        let mut output = String::with_capacity(self.input.len() + 16);

        loop {
            let token = self.peek();
            match token.kind() {
                TokenKind::EndOfInput => break,
                TokenKind::PlainText => {
                    output.push_str(token.text());
                    self.advance();
                }
                TokenKind::BlockStart => self.parse_block(&mut output)?,
                TokenKind::Placeholder => {
                    output.push_str(PLACEHOLDER);
                    self.advance();
                }
                _ => return Err(error(ErrorKind::InvalidFormat, &token)),
            }
        }

        output.push_str(emit_reset());

        // Escape sequences never contain a hash, so any remaining pair stems
        // from an escaped hash in plain text.
        Ok(output.replace("##", "#"))
    }

    // ---------------------------------------------------------------------------------------------

    // The position never moves past the trailing end of input.
    #[inline]
    fn peek(&self) -> Token<'a> {
        self.tokens[self.position]
    }

    #[inline]
    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token<'a>, FormatError> {
        let token = self.peek();
        if token.kind() == kind {
            self.advance();
            Ok(token)
        } else {
            Err(error(ErrorKind::UnexpectedToken, &token))
        }
    }

    fn parse_block(&mut self, output: &mut String) -> Result<(), FormatError> {
        self.consume(TokenKind::BlockStart)?;
        output.push_str(emit_reset());

        let mut is_first = true;
        loop {
            let token = self.peek();
            match token.kind() {
                TokenKind::BlockEnd => break,
                TokenKind::EndOfInput => return Err(error(ErrorKind::UnexpectedEnd, &token)),
                TokenKind::Comma if !is_first => self.advance(),
                _ if !is_first => {
                    return Err(FormatError::new(ErrorKind::ExpectedSymbol, token.offset())
                        .with_text(","))
                }
                _ => (),
            }

            is_first = false;
            self.parse_clause(output)?;
        }

        self.consume(TokenKind::BlockEnd)?;
        Ok(())
    }

    fn parse_clause(&mut self, output: &mut String) -> Result<(), FormatError> {
        let token = self.peek();
        match token.kind() {
            TokenKind::Identifier => {
                let name = token.text();
                if let Some(modifier) = Modifier::from_name(name) {
                    output.push_str(&emit_modifier(modifier, false));
                } else if let Some(color) = AnsiColor::from_name(name) {
                    output.push_str(&emit_color(Color::Ansi(color), false));
                } else {
                    return Err(error(ErrorKind::UnexpectedIdentifier, &token));
                }
                self.advance();
            }
            TokenKind::Number => {
                let first = self.parse_number()?;
                if self.peek().kind() != TokenKind::Colon {
                    output.push_str(&emit_color(Color::Indexed(first), false));
                    return Ok(());
                }

                self.advance();
                let second = self.parse_number()?;
                let colon = self.peek();
                if colon.kind() != TokenKind::Colon {
                    return Err(error(ErrorKind::ExpectedNumber, &colon));
                }
                self.advance();
                let third = self.parse_number()?;
                output.push_str(&emit_color(Color::Rgb(first, second, third), false));
            }
            TokenKind::EndOfInput => return Err(error(ErrorKind::UnexpectedEnd, &token)),
            _ => return Err(error(ErrorKind::UnexpectedToken, &token)),
        }

        Ok(())
    }

    fn parse_number(&mut self) -> Result<u8, FormatError> {
        let token = self.peek();
        if token.kind() != TokenKind::Number {
            return Err(error(ErrorKind::ExpectedNumber, &token));
        }

        let value = token
            .text()
            .parse::<u8>()
            .map_err(|e| FormatError::too_large(token.text(), token.offset(), e))?;
        self.advance();
        Ok(value)
    }
}

/// Create an error for the given token, including its text if it has any.
fn error(kind: ErrorKind, token: &Token<'_>) -> FormatError {
    let error = FormatError::new(kind, token.offset());
    if token.is_empty() {
        error
    } else {
        error.with_text(token.text())
    }
}

/// Compile the format string into a string with ANSI escape sequences and
/// `%s` slots.
///
/// This function is pure. Use a [`FormatCache`](crate::FormatCache) or
/// [`format_str`](crate::format_str) to avoid compiling the same format
/// string more than once.
pub fn compile(input: &str) -> Result<String, FormatError> {
    Parser::new(input)?.get_format_string()
}
