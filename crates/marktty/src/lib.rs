//! # Mark Tty
//!
//! This crate provides the **terminal plumbing** underneath
//! [ansimark](https://crates.io/crates/ansimark). Its only dependency is
//! [`libc`](https://crates.io/crates/libc) on Unix.
//!
//! It covers three concerns:
//!
//!   * The [`Command`] and [`Sgr`] traits describe in-band instructions to the
//!     terminal. A command's [`Display`](std::fmt::Display) implementation
//!     writes the ANSI escape sequence, so executing a command is as simple as
//!     printing it.
//!   * The [`cmd`] module provides a small library of commands for moving the
//!     cursor, erasing (parts of) the screen, and hiding or showing the
//!     cursor.
//!   * On Unix, [`RawMode`] switches a terminal into raw or rare mode and
//!     restores the original configuration when dropped. The [`opt`] module
//!     configures it.
//!
//!
//! # Example
//!
//! ```
//! # use marktty::{fuse, cmd::{EraseScreen, MoveHome}};
//! let clear = fuse!(EraseScreen, MoveHome);
//! assert_eq!(format!("{}", clear), "\x1b[2J\r\x1b[H");
//! ```
//!
//! Entering raw mode hands out an explicit handle. The terminal configuration
//! is restored as soon as the handle goes out of scope:
//!
//! ```no_run
//! # #[cfg(target_family = "unix")]
//! # fn main() -> std::io::Result<()> {
//! use std::os::fd::AsFd;
//! use marktty::RawMode;
//! use marktty::opt::Options;
//!
//! let stdin = std::io::stdin();
//! let raw = RawMode::enter(stdin.as_fd(), &Options::default())?;
//! // ... read individual key presses ...
//! drop(raw);
//! # Ok(())
//! # }
//! # #[cfg(not(target_family = "unix"))]
//! # fn main() {}
//! ```

mod api;
pub mod cmd;
pub mod opt;
#[cfg(target_family = "unix")]
mod raw;
#[cfg(target_family = "unix")]
mod sys;

pub use api::{Command, Sgr};
#[cfg(target_family = "unix")]
pub use raw::RawMode;
