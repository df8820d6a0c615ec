use std::io::{IsTerminal, Result, Write};
use std::os::fd::{AsRawFd, BorrowedFd};

use crate::opt::{Options, Volume};
use crate::sys::{Config, RawOutput};

/// A terminal in raw or rare mode.
///
/// Entering raw mode records the terminal's current configuration and hands
/// out this handle. Dropping the handle or calling [`RawMode::restore`]
/// reinstates the recorded configuration. There is no global state, so
/// several handles for different terminals may coexist.
///
/// If the file descriptor does not refer to a terminal, entering raw mode
/// succeeds but does nothing, and the handle is inert.
///
/// When the options enable diagnostic output, mode changes are logged to the
/// terminal itself.
#[derive(Debug)]
pub struct RawMode<'fd> {
    fd: BorrowedFd<'fd>,
    saved: Option<Config>,
    options: Options,
}

impl<'fd> RawMode<'fd> {
    /// Switch the terminal with the given file descriptor into the mode
    /// selected by the options.
    ///
    /// This method returns an error if the terminal configuration cannot be
    /// read or written.
    pub fn enter(fd: BorrowedFd<'fd>, options: &Options) -> Result<Self> {
        if !fd.is_terminal() {
            return Ok(Self {
                fd,
                saved: None,
                options: options.clone(),
            });
        }

        let saved = Config::read(fd)?;
        let config = saved.apply(options);
        config.write(fd)?;

        let this = Self {
            fd,
            saved: Some(saved),
            options: options.clone(),
        };

        this.log("raw-mode::enter")?;
        if this.options.volume() == Volume::Detailed {
            this.log(&format!("before {:?}", saved))?;
            this.log(&format!("after {:?}", config))?;
        }
        Ok(this)
    }

    /// Determine whether this handle changed the terminal configuration and
    /// has yet to restore it.
    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Restore the terminal's original configuration.
    ///
    /// Unlike dropping the handle, this method reports errors.
    pub fn restore(mut self) -> Result<()> {
        self.reset()
    }

    fn reset(&mut self) -> Result<()> {
        if let Some(saved) = self.saved.take() {
            let logged = self.log("raw-mode::restore");
            saved.write(self.fd)?;
            logged
        } else {
            Ok(())
        }
    }

    fn log(&self, message: &str) -> Result<()> {
        if self.options.verbose() {
            write!(
                RawOutput::new(self.fd),
                "{} pid={} fd={} mode={}\r\n",
                message,
                std::process::id(),
                self.fd.as_raw_fd(),
                self.options.mode().name(),
            )
        } else {
            Ok(())
        }
    }
}

impl Drop for RawMode<'_> {
    fn drop(&mut self) {
        let _ = self.reset();
    }
}

#[cfg(test)]
mod test {
    use super::RawMode;
    use crate::opt::{Mode, Options};
    use std::os::fd::AsFd;

    #[test]
    fn test_not_a_terminal() -> std::io::Result<()> {
        let file = std::fs::File::open("/dev/null")?;

        let raw = RawMode::enter(file.as_fd(), &Options::with_detailed_log())?;
        assert!(!raw.is_active());
        raw.restore()?;

        let options = Options::builder().mode(Mode::Rare).build();
        let rare = RawMode::enter(file.as_fd(), &options)?;
        assert!(!rare.is_active());
        assert_eq!(rare.options().mode(), Mode::Rare);
        drop(rare);
        Ok(())
    }
}
