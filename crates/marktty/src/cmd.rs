//! A library of terminal commands.
//!
//! This module provides straight-forward struct and enum types that implement
//! the [`Command`](crate::Command) trait. Organized by topic, it covers:
//!
//!   * Cursor movement:
//!       * [`MoveHome`]
//!       * Relative [`MoveCursor`] in a [`Direction`]
//!       * Absolute [`MoveTo`] and [`DynMoveTo`]
//!   * Cursor visibility:
//!       * [`HideCursor`] and [`ShowCursor`]
//!   * Erasing content:
//!       * [`EraseScreenToEnd`], [`EraseScreenToBeginning`], and [`EraseScreen`]
//!       * [`EraseLineToEnd`], [`EraseLineToBeginning`], and [`EraseLine`]
//!
//! Styling commands, i.e., SGR escape sequences for colors and text
//! modifiers, live with the color model in the `ansimark` crate.
//!
//! Most commands are implemented by zero-sized unit structs. Commands that
//! require arguments may come in two flavors, a static flavor relying on const
//! generics and a dynamic flavor storing the arguments. The command name for
//! the latter flavor starts with `Dyn`.
//!
//!
//! # Example
//!
//! Executing a command is as simple as writing its display:
//! ```
//! # use marktty::cmd::{Direction, MoveCursor, MoveTo};
//! assert_eq!(format!("{}", MoveCursor(Direction::Up, 20)), "\x1b[20A");
//! assert_eq!(format!("{}", MoveTo::<3, 4>), "\x1b[3;4H");
//! ```

macro_rules! declare_unit_struct {
    ($name:ident) => {
        #[doc = concat!("The unit `",stringify!($name),"` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;
    };
}

macro_rules! declare_n_struct {
    ($name:ident( $( $arg:ident : $typ:ty ),+ $(,)? )) => {
        #[doc = concat!("The dynamic `",stringify!($name),"(",stringify!($($arg),+),")` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name( $( pub $typ ),+ );
    };
    ($name:ident< $( $arg:ident : $typ:ty ),+ >) => {
        #[doc = concat!("The static `",stringify!($name),"<",stringify!($($arg),+),">` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name< $(const $arg: $typ),+ >;
    }
}

macro_rules! implement_command {
    ($name:ident $(< $( $arg:ident : $typ:ty ),+ >)? : $selfish:ident ; $output:ident $body:block) => {
        impl $(< $(const $arg: $typ),+ >)? $crate::Command for $name $(< $($arg),+ >)? {}

        impl $(< $(const $arg: $typ),+ >)? ::core::fmt::Display for $name $(< $($arg),+ >)? {
            #[inline]
            fn fmt(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> core::fmt::Result {
                $body
            }
        }
    }
}

macro_rules! define_unit_command {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_command!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! define_cmd_2 {
    (
        $name:ident <$arg1:ident : $typ1:ty, $arg2:ident : $typ2:ty>,
            $dyn_name:ident, $prefix:literal, $suffix:literal
    ) => {
        declare_n_struct!($name<$arg1 : $typ1, $arg2 : $typ2>);
        implement_command!($name<$arg1 : $typ1, $arg2 : $typ2>: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&$arg1, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&$arg2, f)?;
            f.write_str($suffix)
        });

        declare_n_struct!($dyn_name($arg1 : $typ1, $arg2 : $typ2));
        implement_command!($dyn_name: self; f {
            f.write_str($prefix)?;
            <_ as ::core::fmt::Display>::fmt(&self.0, f)?;
            f.write_str(";")?;
            <_ as ::core::fmt::Display>::fmt(&self.1, f)?;
            f.write_str($suffix)
        });
    }
}

// ====================================== Library ======================================

// ---------------------------------- Cursor Movement ----------------------------------

define_unit_command!(MoveHome, "\x1b[H");

/// The direction of a relative cursor movement.
///
/// The discriminant is the final byte of the corresponding escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = b'A',
    Down = b'B',
    Right = b'C',
    Left = b'D',
    /// The beginning of a line further down.
    NextLine = b'E',
    /// The beginning of a line further up.
    PreviousLine = b'F',
    /// An absolute column on the current line.
    Column = b'G',
}

impl Direction {
    /// Get the final character of the escape sequence for this direction.
    pub const fn as_char(&self) -> char {
        *self as u8 as char
    }
}

/// The dynamic `MoveCursor(direction, amount)` command.
///
/// For [`Direction::Column`], the amount is the absolute column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCursor(pub Direction, pub u8);

implement_command!(MoveCursor: self; f {
    f.write_str("\x1b[")?;
    <_ as ::core::fmt::Display>::fmt(&self.1, f)?;
    <_ as ::core::fmt::Display>::fmt(&self.0.as_char(), f)
});

define_cmd_2!(MoveTo<X: u8, Y: u8>, DynMoveTo, "\x1b[", "H");

// --------------------------------- Cursor Visibility ---------------------------------

define_unit_command!(HideCursor, "\x1b[?25l");
define_unit_command!(ShowCursor, "\x1b[?25h");

// ---------------------------------- Erasing Content ----------------------------------

define_unit_command!(EraseScreenToEnd, "\x1b[0J");
define_unit_command!(EraseScreenToBeginning, "\x1b[1J");
define_unit_command!(EraseScreen, "\x1b[2J\r");
define_unit_command!(EraseLineToEnd, "\x1b[0K");
define_unit_command!(EraseLineToBeginning, "\x1b[1K");
define_unit_command!(EraseLine, "\x1b[2K\r");

#[cfg(test)]
mod test {
    use super::*;
    use crate::Command;

    fn unit_commands() -> [&'static dyn Command; 9] {
        [
            &MoveHome,
            &HideCursor,
            &ShowCursor,
            &EraseScreenToEnd,
            &EraseScreenToBeginning,
            &EraseScreen,
            &EraseLineToEnd,
            &EraseLineToBeginning,
            &EraseLine,
        ]
    }

    #[test]
    fn test_cursor_movement() {
        assert_eq!(format!("{}", MoveHome), "\x1b[H");
        assert_eq!(format!("{}", MoveCursor(Direction::Up, 20)), "\x1b[20A");
        assert_eq!(format!("{}", MoveCursor(Direction::Down, 1)), "\x1b[1B");
        assert_eq!(format!("{}", MoveCursor(Direction::Right, 7)), "\x1b[7C");
        assert_eq!(format!("{}", MoveCursor(Direction::Left, 0)), "\x1b[0D");
        assert_eq!(format!("{}", MoveCursor(Direction::NextLine, 2)), "\x1b[2E");
        assert_eq!(format!("{}", MoveCursor(Direction::PreviousLine, 3)), "\x1b[3F");
        assert_eq!(format!("{}", MoveCursor(Direction::Column, 42)), "\x1b[42G");
        assert_eq!(format!("{}", MoveTo::<5, 8>), "\x1b[5;8H");
        assert_eq!(format!("{}", DynMoveTo(255, 0)), "\x1b[255;0H");
    }

    #[test]
    fn test_erasing_and_visibility() {
        assert_eq!(format!("{}", EraseScreenToEnd), "\x1b[0J");
        assert_eq!(format!("{}", EraseScreenToBeginning), "\x1b[1J");
        assert_eq!(format!("{}", EraseScreen), "\x1b[2J\r");
        assert_eq!(format!("{}", EraseLineToEnd), "\x1b[0K");
        assert_eq!(format!("{}", EraseLineToBeginning), "\x1b[1K");
        assert_eq!(format!("{}", EraseLine), "\x1b[2K\r");
        assert_eq!(format!("{}", HideCursor), "\x1b[?25l");
        assert_eq!(format!("{}", ShowCursor), "\x1b[?25h");
    }

    #[test]
    fn test_unit_commands() {
        for command in unit_commands() {
            let text = format!("{}", command);
            assert!(text.starts_with("\x1b["), "{:?} should start with CSI", command);
            assert!(!text.contains('#'), "{:?} should not contain #", command);
        }
    }
}
