use core::ffi::c_void;
use core::ptr::from_ref;
use std::io::{Result, Write};
use std::os::fd::{AsRawFd, BorrowedFd};

use super::into_result::IntoResult;
use crate::opt::{Mode, Options};

// ----------------------------------------------------------------------------------------------------------

/// A terminal configuration.
#[derive(Clone, Copy)]
pub(crate) struct Config {
    state: libc::termios,
}

impl Config {
    /// Read the configuration of the terminal with the given file descriptor.
    pub fn read(fd: BorrowedFd<'_>) -> Result<Self> {
        let mut state = core::mem::MaybeUninit::uninit();
        // SAFETY: The descriptor is borrowed and hence open, and the pointer
        // refers to a correctly sized and aligned termios.
        unsafe { libc::tcgetattr(fd.as_raw_fd(), state.as_mut_ptr()) }.into_result()?;
        Ok(Self {
            // SAFETY: tcgetattr() succeeded and hence initialized the state.
            state: unsafe { state.assume_init() },
        })
    }

    /// Apply the options to create a new configuration.
    pub fn apply(&self, options: &Options) -> Self {
        let mut state = self.state;

        match options.mode() {
            Mode::Rare => {
                state.c_lflag &= !(libc::ECHO | libc::ICANON);
            }
            Mode::Raw => {
                state.c_iflag &=
                    !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
                state.c_oflag &= !libc::OPOST;
                state.c_cflag &= !(libc::CSIZE | libc::PARENB);
                state.c_cflag |= libc::CS8;
                state.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
            }
        }

        state.c_cc[libc::VMIN] = options.min_bytes();
        state.c_cc[libc::VTIME] = options.timeout();
        Self { state }
    }

    /// Write the configuration to the terminal with the given file
    /// descriptor.
    ///
    /// The change takes effect after all pending output has been written and
    /// discards any pending input.
    pub fn write(&self, fd: BorrowedFd<'_>) -> Result<()> {
        // SAFETY: The descriptor is borrowed and hence open, and the pointer
        // refers to a fully initialized termios.
        unsafe { libc::tcsetattr(fd.as_raw_fd(), libc::TCSAFLUSH, from_ref(&self.state)) }
            .into_result()?;
        Ok(())
    }

    /// Determine whether this configuration has echo disabled.
    #[cfg(test)]
    fn is_silent(&self) -> bool {
        self.state.c_lflag & libc::ECHO == 0
    }
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Determine enabled flags
        let mut flags = Vec::new();

        for (name, value) in [
            ("BRKINT", libc::BRKINT),
            ("ICRNL", libc::ICRNL),
            ("INPCK", libc::INPCK),
            ("ISTRIP", libc::ISTRIP),
            ("IXON", libc::IXON),
        ] {
            if self.state.c_iflag & value != 0 {
                flags.push(name);
            }
        }

        if self.state.c_oflag & libc::OPOST != 0 {
            flags.push("OPOST");
        }

        if self.state.c_cflag & libc::PARENB != 0 {
            flags.push("PARENB");
        }
        if self.state.c_cflag & libc::CSIZE == libc::CS8 {
            flags.push("CS8");
        }

        for (name, value) in [
            ("ECHO", libc::ECHO),
            ("ICANON", libc::ICANON),
            ("IEXTEN", libc::IEXTEN),
            ("ISIG", libc::ISIG),
        ] {
            if self.state.c_lflag & value != 0 {
                flags.push(name);
            }
        }

        struct Flags<'a>(Vec<&'a str>);

        impl core::fmt::Debug for Flags<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("Termios")
            .field("flags", &Flags(flags))
            .field("vmin", &self.state.c_cc[libc::VMIN])
            .field("vtime", &self.state.c_cc[libc::VTIME])
            .finish()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Unbuffered output to a file descriptor.
///
/// Writes go straight to the operating system and hence do not interleave
/// with buffered output of the standard library in surprising ways.
#[derive(Debug)]
pub(crate) struct RawOutput<'fd> {
    fd: BorrowedFd<'fd>,
}

impl<'fd> RawOutput<'fd> {
    pub fn new(fd: BorrowedFd<'fd>) -> Self {
        Self { fd }
    }
}

impl Write for RawOutput<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        // SAFETY: The descriptor is borrowed and hence open, and the pointer
        // and length describe a valid slice.
        unsafe {
            libc::write(
                self.fd.as_raw_fd(),
                buf.as_ptr().cast::<c_void>(),
                buf.len() as libc::size_t,
            )
        }
        .into_result()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
