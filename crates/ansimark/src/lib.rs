//! # ansimark
//!
//! This crate compiles a compact markup for styled terminal text into
//! strings with ANSI escape sequences. A format string is compiled once, and
//! the result can be printed any number of times without parsing or
//! concatenating escape sequences again.
//!
//! The markup passes plain text through unchanged and recognizes three
//! escapes, all starting with `#`:
//!
//!   * `##` is a literal `#`.
//!   * `#$` is a slot for a value. It compiles to `%s`, which [`fill`] or the
//!     [`ansi!`] macro replace with values.
//!   * `#[…]` is a block with one or more comma-separated clauses. A clause is
//!     the name of a [`Modifier`](color::Modifier) such as `Bold`, the name of
//!     an [`AnsiColor`](color::AnsiColor) such as `Red` or `Default`, an index
//!     into the 256-color palette such as `220`, or a 24-bit color such as
//!     `1:1:255`. Each block starts with a reset.
//!
//! Every compiled string ends with a reset.
//!
//!
//! # Example
//!
//! ```
//! # use ansimark::compile;
//! let compiled = compile("#[Bold, Underline, Red, 1:1:255, 220]Text #$")?;
//! assert_eq!(
//!     compiled,
//!     "\x1b[0m\x1b[1m\x1b[4m\x1b[31m\x1b[38;2;1;1;255m\x1b[38;5;220mText %s\x1b[0m"
//! );
//! # Ok::<(), ansimark::FormatError>(())
//! ```
//!
//! Compilation is all-or-nothing. Errors identify the problem and its byte
//! offset:
//!
//! ```
//! # use ansimark::{compile, ErrorKind};
//! let error = compile("#[Bold, 256]").unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::NumberTooLarge);
//! assert_eq!(error.to_string(), "number too large for color format: 256 (at byte 8)");
//! ```
//!
//! A [`Style`] applies one color and several modifiers to arbitrary text,
//! without starting with a reset:
//!
//! ```
//! # use ansimark::{color::{AnsiColor, Modifier}, Style};
//! let style = Style::new(AnsiColor::Red, [Modifier::Bold, Modifier::Underline]);
//! assert_eq!(style.apply("x").as_str(), "\x1b[31m\x1b[1m\x1b[4mx\x1b[0m");
//! ```
//!
//! The terminal plumbing, i.e., the command traits, commands for the cursor
//! and erasing the screen, and raw mode, lives in the
//! [`marktty`](https://crates.io/crates/marktty) crate, which is re-exported
//! as [`tty`].

mod cache;
pub mod color;
mod error;
pub mod lexer;
mod parser;
pub mod sgr;
mod style;
mod template;

pub use cache::{format_str, FormatCache};
pub use error::{ErrorKind, FormatError};
pub use parser::{compile, Parser, PLACEHOLDER};
pub use style::{Painted, Style};
pub use template::{fill, slot_count};

pub use marktty as tty;

/// Compile a format string with the process-wide cache and optionally fill
/// its slots.
///
/// Without values, this macro returns the shared compiled string. With
/// values, it returns a new string with the slots filled.
///
/// ```
/// # use ansimark::ansi;
/// assert_eq!(&*ansi!("#[Italic]hi")?, "\x1b[0m\x1b[3mhi\x1b[0m");
/// assert_eq!(ansi!("#[Yellow]#$ apples", 3)?, "\x1b[0m\x1b[33m3 apples\x1b[0m");
/// # Ok::<(), ansimark::FormatError>(())
/// ```
#[macro_export]
macro_rules! ansi {
    ($format:expr) => {
        $crate::format_str($format)
    };
    ($format:expr, $($value:expr),+ $(,)?) => {
        $crate::format_str($format)
            .and_then(|compiled| $crate::fill(&compiled, &[$(&$value as &dyn ::std::fmt::Display),+]))
    };
}

#[cfg(test)]
mod test {
    use crate::tty::cmd::{EraseLine, MoveCursor, Direction};
    use crate::tty::fuse;

    #[test]
    fn test_macro() {
        let greeting = ansi!("#[Green]hello, #$!", "world").unwrap();
        assert_eq!(greeting, "\x1b[0m\x1b[32mhello, world!\x1b[0m");

        let error = ansi!("#[Green]#$ #$", 1).unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::TooFewValues);
    }

    #[test]
    fn test_with_commands() {
        let compiled = crate::compile("#[Red]status").unwrap();
        let line = format!("{}{}", fuse!(MoveCursor(Direction::Column, 1), EraseLine), compiled);
        assert_eq!(line, "\x1b[1G\x1b[2K\r\x1b[0m\x1b[31mstatus\x1b[0m");
    }
}
