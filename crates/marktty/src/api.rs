/// A command for the terminal.
///
/// Commands provide instructions to the terminal and are communicated in-band
/// by writing ANSI escape codes. Doing so is the responsibility of the
/// [`core::fmt::Display`] implementation, whereas the [`core::fmt::Debug`]
/// implementation should simply identify the command.
///
/// This trait is object-safe.
pub trait Command: core::fmt::Debug + core::fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

/// A boxed command is a command.
impl<C: Command + ?Sized> Command for Box<C> {}

/// Combine several commands into a single new command.
///
/// The new command preserves the order of its component commands. Upon display,
/// it emits as many ANSI escape sequences as it has component commands. Upon
/// debug, it reveals the macro's source arguments.
///
/// # Example
///
/// ```
/// # use marktty::{cmd::{HideCursor, MoveHome}, fuse};
/// let home_and_hide = fuse!(MoveHome, HideCursor);
/// assert_eq!(format!("{}", home_and_hide), "\x1b[H\x1b[?25l");
/// ```
#[macro_export]
macro_rules! fuse {
    ($($command:expr),+ $(,)?) => {{
        /// One or more combined commands.
        #[derive(Copy, Clone, PartialEq, Eq)]
        struct Fused;

        impl $crate::Command for Fused {}

        impl ::core::fmt::Debug for Fused {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.write_str(concat!(stringify!(fuse!), "(", stringify!($($command),+), ")"))
            }
        }

        impl ::core::fmt::Display for Fused {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                $(::core::fmt::Display::fmt(&$command, f)?;)*
                Ok(())
            }
        }

        Fused
    }}
}

// ------------------------------------------------------------------------------------------------

/// A command using select-graphic-rendition ANSI escape sequences.
///
/// SGR commands implement [`Sgr::write_param`], which writes the parameter(s)
/// without the leading `CSI` and the trailing `m`. Their display writes one
/// complete escape sequence.
///
/// Declaring `out` to be a formatter instead of a generic writer keeps the
/// trait object-safe, and `write_param()` is most likely invoked inside an
/// implementation of `Display::fmt` anyways.
pub trait Sgr: Command {
    /// Write the parameter(s) for this SGR command.
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}

/// A borrowed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for &S {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).write_param(out)
    }
}

/// A boxed SGR is an SGR.
impl<S: Sgr + ?Sized> Sgr for Box<S> {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        (**self).write_param(out)
    }
}
