//! The escape emitter for colors and text modifiers.
//!
//! Each type in this module is an SGR command, i.e., it implements
//! [`marktty::Sgr`] and displays as one complete `ESC [ … m` escape sequence.
//! The free functions [`emit_modifier`], [`emit_color`], and [`emit_reset`]
//! wrap these commands for callers that just want the bytes.
//!
//! ```
//! # use ansimark::color::{AnsiColor, Color, Layer, Modifier};
//! # use ansimark::sgr::{ClearModifier, SetColor, SetModifier};
//! assert_eq!(format!("{}", SetModifier(Modifier::Italic)), "\x1b[3m");
//! assert_eq!(format!("{}", ClearModifier(Modifier::Italic)), "\x1b[23m");
//! assert_eq!(
//!     format!("{}", SetColor(Color::from(AnsiColor::Red), Layer::Background)),
//!     "\x1b[41m"
//! );
//! ```
//!
//! None of the emitted escape sequences contain a `#`. The parser relies on
//! that when collapsing escaped `##` in its output.

use marktty::{Command, Sgr};

use crate::color::{Color, Layer, Modifier};

macro_rules! implement_sgr_display {
    ($name:ident) => {
        impl Command for $name {}

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("\x1b[")?;
                self.write_param(f)?;
                f.write_str("m")
            }
        }
    };
}

/// The SGR command enabling a text modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetModifier(pub Modifier);

impl Sgr for SetModifier {
    fn write_param(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        <_ as ::core::fmt::Display>::fmt(&self.0.enable_sgr(), f)
    }
}

implement_sgr_display!(SetModifier);

/// The SGR command disabling a text modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearModifier(pub Modifier);

impl Sgr for ClearModifier {
    fn write_param(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        <_ as ::core::fmt::Display>::fmt(&self.0.disable_sgr(), f)
    }
}

implement_sgr_display!(ClearModifier);

/// The SGR command setting a color on a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetColor(pub Color, pub Layer);

impl Sgr for SetColor {
    fn write_param(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        let layer = self.1;
        match self.0 {
            Color::Ansi(color) => write!(f, "{}", color.sgr(layer)),
            Color::Indexed(index) => write!(f, "{};5;{}", layer.extended(), index),
            Color::Rgb(r, g, b) => write!(f, "{};2;{};{};{}", layer.extended(), r, g, b),
        }
    }
}

implement_sgr_display!(SetColor);

/// The SGR command restoring the terminal's default appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetStyle;

impl Sgr for ResetStyle {
    fn write_param(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str("0")
    }
}

implement_sgr_display!(ResetStyle);

/// The escape sequence for [`ResetStyle`].
pub const RESET: &str = "\x1b[0m";

// ------------------------------------------------------------------------------------------------

/// Get the escape sequence enabling or, if `reset` is set, disabling the
/// modifier.
pub fn emit_modifier(modifier: Modifier, reset: bool) -> String {
    if reset {
        ClearModifier(modifier).to_string()
    } else {
        SetModifier(modifier).to_string()
    }
}

/// Get the escape sequence setting the foreground or, if `is_background` is
/// set, the background color.
pub fn emit_color(color: Color, is_background: bool) -> String {
    let layer = if is_background {
        Layer::Background
    } else {
        Layer::Foreground
    };

    SetColor(color, layer).to_string()
}

/// Get the escape sequence restoring the terminal's default appearance.
pub const fn emit_reset() -> &'static str {
    RESET
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::AnsiColor;

    #[test]
    fn test_modifiers() {
        assert_eq!(emit_modifier(Modifier::Bold, false), "\x1b[1m");
        assert_eq!(emit_modifier(Modifier::Bold, true), "\x1b[22m");
        assert_eq!(emit_modifier(Modifier::Underline, false), "\x1b[4m");
        assert_eq!(emit_modifier(Modifier::Underline, true), "\x1b[24m");
        assert_eq!(emit_modifier(Modifier::Hidden, true), "\x1b[28m");
    }

    #[test]
    fn test_colors() {
        assert_eq!(emit_color(AnsiColor::Red.into(), false), "\x1b[31m");
        assert_eq!(emit_color(AnsiColor::Default.into(), false), "\x1b[39m");
        assert_eq!(emit_color(AnsiColor::Default.into(), true), "\x1b[49m");
        assert_eq!(emit_color(Color::from(123), false), "\x1b[38;5;123m");
        assert_eq!(emit_color(Color::from(0), true), "\x1b[48;5;0m");
        assert_eq!(emit_color(Color::from((1, 1, 255)), false), "\x1b[38;2;1;1;255m");
        assert_eq!(emit_color(Color::from((255, 0, 7)), true), "\x1b[48;2;255;0;7m");
        assert_eq!(emit_reset(), "\x1b[0m");
        assert_eq!(format!("{}", ResetStyle), emit_reset());
    }

    #[test]
    fn test_no_hash() {
        let mut sequences = vec![emit_reset().to_string()];
        for modifier in Modifier::all() {
            sequences.push(emit_modifier(modifier, false));
            sequences.push(emit_modifier(modifier, true));
        }
        for color in AnsiColor::all() {
            sequences.push(emit_color(color.into(), false));
            sequences.push(emit_color(color.into(), true));
        }
        sequences.push(emit_color(Color::from(255), true));
        sequences.push(emit_color(Color::from((255, 255, 255)), true));

        for sequence in sequences {
            assert!(sequence.starts_with("\x1b["));
            assert!(sequence.ends_with('m'));
            assert!(!sequence.contains('#'));
        }
    }

    #[test]
    fn test_sgr_objects() {
        let commands: [&dyn Sgr; 3] = [
            &SetModifier(Modifier::Blink),
            &SetColor(Color::from(42), Layer::Foreground),
            &ResetStyle,
        ];
        let rendered: String = commands.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, "\x1b[5m\x1b[38;5;42m\x1b[0m");
    }
}
