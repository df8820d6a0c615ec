//! Filling the `%s` slots of compiled format strings.
//!
//! Compiled format strings follow the placeholder convention of C-style
//! formatted output. Since Rust's formatting macros require literal format
//! strings, [`fill`] substitutes the slots at runtime instead.
//!
//! ```
//! # use ansimark::{compile, fill};
//! let compiled = compile("#[Red]#$#[Default] of #$")?;
//! assert_eq!(
//!     fill(&compiled, &[&3, &"9"])?,
//!     "\x1b[0m\x1b[31m3\x1b[0m\x1b[39m of 9\x1b[0m"
//! );
//! # Ok::<(), ansimark::FormatError>(())
//! ```

use std::fmt::Display;

use crate::error::{ErrorKind, FormatError};
use crate::parser::PLACEHOLDER;

/// Count the slots in a compiled format string.
pub fn slot_count(compiled: &str) -> usize {
    compiled.matches(PLACEHOLDER).count()
}

/// Replace the slots of a compiled format string with the values, from left
/// to right.
///
/// The number of values must match the number of slots. Values are inserted
/// verbatim, so a value containing `%s` does not create another slot.
pub fn fill(compiled: &str, values: &[&dyn Display]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(compiled.len() + 8 * values.len());
    let mut values = values.iter();
    let mut rest = compiled;
    let mut offset = 0;

    while let Some(index) = rest.find(PLACEHOLDER) {
        output.push_str(&rest[..index]);
        let Some(value) = values.next() else {
            return Err(FormatError::new(ErrorKind::TooFewValues, offset + index));
        };
        output.push_str(&value.to_string());

        let skip = index + PLACEHOLDER.len();
        offset += skip;
        rest = &rest[skip..];
    }

    output.push_str(rest);
    if values.next().is_some() {
        return Err(FormatError::new(ErrorKind::TooManyValues, compiled.len()));
    }

    Ok(output)
}

#[cfg(test)]
mod test {
    use super::{fill, slot_count};
    use crate::error::ErrorKind;

    #[test]
    fn test_fill() {
        assert_eq!(fill("a%sb%sc", &[&1, &'x']).unwrap(), "a1bxc");
        assert_eq!(fill("no slots", &[]).unwrap(), "no slots");
        assert_eq!(fill("%s", &[&"%s"]).unwrap(), "%s");
        assert_eq!(slot_count("%s and %s and %"), 2);
    }

    #[test]
    fn test_mismatch() {
        let error = fill("x%sy%s", &[&1]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TooFewValues);
        assert_eq!(error.offset(), 4);

        let error = fill("x%s", &[&1, &2]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TooManyValues);
        assert_eq!(error.offset(), 3);
    }
}
