//! Helper module with the options for switching terminal modes.
//!
//! This module provides the options for [`RawMode`](crate::RawMode) and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use marktty::opt::{Mode, Options};
//! let options = Options::builder()
//!     .mode(Mode::Rare)
//!     .timeout(5)
//!     .build();
//!
//! assert_eq!(options.mode(), Mode::Rare);
//! assert_eq!(options.min_bytes(), 1);
//! assert_eq!(options.timeout(), 5);
//! ```

/// The diagnostic logging volume.
///
/// Diagnostic output is written to the terminal itself, using `\r\n` line
/// endings so that it also renders correctly in raw mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    #[default]
    Silent,
    /// Log mode changes.
    Regular,
    /// Log mode changes and the terminal configuration flags.
    Detailed,
}

/// A terminal mode.
///
///   * __Rare mode__, also called cbreak mode, disables echo and the line
///     editor but leaves other terminal convenience features such as
///     processing control-c enabled.
///
///   * __Raw mode__ disables all features beyond character-based I/O and ANSI
///     escape sequences. In particular, input is neither echoed nor edited,
///     control-c is not turned into a signal, carriage returns are not
///     translated, and output is not post-processed. This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Rare or cbreak mode.
    Rare,
    /// Raw mode.
    #[default]
    Raw,
}

impl Mode {
    /// Get a lowercase name for this mode.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rare => "rare",
            Self::Raw => "raw",
        }
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    mode: Mode,
    min_bytes: u8,
    timeout: u8,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            mode: Mode::Raw,
            min_bytes: 1,
            timeout: 0,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set rare or raw mode.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.0.mode = mode;
        self
    }

    /// Set the minimum number of bytes a blocking read waits for.
    ///
    /// This is the terminal's `VMIN` parameter.
    pub fn min_bytes(&mut self, count: u8) -> &mut Self {
        self.0.min_bytes = count;
        self
    }

    /// Set the read timeout in deciseconds (0.1s).
    ///
    /// This is the terminal's `VTIME` parameter. Zero disables the timeout.
    pub fn timeout(&mut self, timeout: u8) -> &mut Self {
        self.0.timeout = timeout;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular debugging output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed debugging output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether any diagnostic output is enabled.
    pub fn verbose(&self) -> bool {
        self.0.volume != Volume::Silent
    }

    /// Get the terminal mode.
    pub fn mode(&self) -> Mode {
        self.0.mode
    }

    /// Get the minimum number of bytes for blocking reads.
    pub fn min_bytes(&self) -> u8 {
        self.0.min_bytes
    }

    /// Get the timeout in 0.1s increments for blocking reads.
    pub fn timeout(&self) -> u8 {
        self.0.timeout
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.volume(), Volume::Silent);
        assert!(!options.verbose());
        assert_eq!(options.mode(), Mode::Raw);
        assert_eq!(options.mode().name(), "raw");
        assert_eq!(options.min_bytes(), 1);
        assert_eq!(options.timeout(), 0);
    }

    #[test]
    fn test_builder() {
        let options = Options::builder()
            .volume(Volume::Detailed)
            .mode(Mode::Rare)
            .min_bytes(0)
            .timeout(10)
            .build();
        assert_eq!(options.volume(), Volume::Detailed);
        assert!(options.verbose());
        assert_eq!(options.mode(), Mode::Rare);
        assert_eq!(options.mode().name(), "rare");
        assert_eq!(options.min_bytes(), 0);
        assert_eq!(options.timeout(), 10);

        assert_eq!(Options::with_log().volume(), Volume::Regular);
        assert_eq!(Options::with_detailed_log().volume(), Volume::Detailed);
    }
}
