//! Utility module with ansimark's errors.
//!
//! Compiling a format string is all-or-nothing. The first lexical or
//! syntactic problem aborts compilation with a [`FormatError`], which
//! identifies the kind of problem, the offending text if any, and the byte
//! offset into the format string.

/// The enumeration of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The format string ends in the middle of an escape or a block.
    UnexpectedEnd,
    /// A character that may not appear at this position.
    UnexpectedSymbol,
    /// An identifier that names neither a modifier nor a color.
    UnexpectedIdentifier,
    /// A token that may not appear at this position inside a block.
    UnexpectedToken,
    /// A number outside the range `0..=255`.
    NumberTooLarge,
    /// A colon not followed by a number inside an RGB triple.
    ExpectedNumber,
    /// A missing punctuation symbol, such as the comma between clauses.
    ExpectedSymbol,
    /// A token that may not appear outside a block.
    InvalidFormat,
    /// A compiled string with more placeholders than values.
    TooFewValues,
    /// A compiled string with fewer placeholders than values.
    TooManyValues,
}

impl ErrorKind {
    /// Turn the error kind to an error message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnexpectedEnd => "unexpected end of string",
            Self::UnexpectedSymbol => "unexpected symbol",
            Self::UnexpectedIdentifier => "unexpected identifier",
            Self::UnexpectedToken => "unexpected token",
            Self::NumberTooLarge => "number too large for color format",
            Self::ExpectedNumber => "expected number",
            Self::ExpectedSymbol => "expected symbol",
            Self::InvalidFormat => "invalid format string",
            Self::TooFewValues => "too few values for placeholders",
            Self::TooManyValues => "too many values for placeholders",
        }
    }
}

/// An error compiling or filling a format string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatError {
    kind: ErrorKind,
    text: Option<String>,
    offset: usize,
    source: Option<std::num::ParseIntError>,
}

impl FormatError {
    /// Create a new format error at the given byte offset.
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            text: None,
            offset,
            source: None,
        }
    }

    /// Create a new error for a number that does not fit into a byte.
    pub fn too_large(text: &str, offset: usize, source: std::num::ParseIntError) -> Self {
        Self {
            kind: ErrorKind::NumberTooLarge,
            text: Some(text.to_owned()),
            offset,
            source: Some(source),
        }
    }

    /// Attach the offending text.
    #[must_use = "attaching text creates a new error"]
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the offending text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the byte offset into the format string.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(text) = &self.text {
            f.write_str(": ")?;
            f.write_str(text)?;
        }
        write!(f, " (at byte {})", self.offset)
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as _)
    }
}

impl From<FormatError> for std::io::Error {
    fn from(value: FormatError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

#[cfg(test)]
mod test {
    use super::{ErrorKind, FormatError};
    use std::error::Error;

    #[test]
    fn test_display() {
        let error = FormatError::new(ErrorKind::UnexpectedIdentifier, 2).with_text("Purple");
        assert_eq!(
            format!("{}", error),
            "unexpected identifier: Purple (at byte 2)"
        );
        assert_eq!(error.text(), Some("Purple"));

        let error = FormatError::new(ErrorKind::UnexpectedEnd, 7);
        assert_eq!(format!("{}", error), "unexpected end of string (at byte 7)");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_source_and_io() {
        let source = "256".parse::<u8>().unwrap_err();
        let error = FormatError::too_large("256", 2, source);
        assert_eq!(error.kind(), ErrorKind::NumberTooLarge);
        assert!(error.source().is_some());

        let io: std::io::Error = error.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
        assert_eq!(
            io.to_string(),
            "number too large for color format: 256 (at byte 2)"
        );
    }
}
