// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Put the controlling terminal into raw mode so that keys arrive one at a time, without
//! echo, and without the terminal turning Ctrl+C into a signal.
//!
//! On Unix this uses rustix's termios API directly. The settings that were in effect
//! before the first [`enable_raw_mode`] call are saved and put back by
//! [`disable_raw_mode`]. Elsewhere it defers to crossterm.
//!
//! Prefer [`RawModeGuard`], which restores the terminal when it drops, even when the
//! editor returns early with an error.

/// Enables raw mode on construction and disables it on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if there is no terminal, or its attributes can not be changed.
    pub fn new() -> miette::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::error!(message = "RawModeGuard::drop -> failed to restore terminal", error = %error);
        }
    }
}

#[cfg(unix)]
pub use unix::{disable_raw_mode, enable_raw_mode};

#[cfg(not(unix))]
pub use other::{disable_raw_mode, enable_raw_mode};

#[cfg(unix)]
mod unix {
    use miette::miette;
    use rustix::{fd::{AsFd, BorrowedFd},
                 termios::{self, OptionalActions, Termios}};
    use std::{fs::File,
              io,
              sync::{LazyLock, Mutex}};

    /// Settings captured by the first successful [`enable_raw_mode`].
    static SAVED_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
        LazyLock::new(|| Mutex::new(None));

    /// stdin when it is a tty, otherwise `/dev/tty` (eg: when input is piped in).
    enum TtyHandle {
        Stdin(io::Stdin),
        DevTty(File),
    }

    impl AsFd for TtyHandle {
        fn as_fd(&self) -> BorrowedFd<'_> {
            match self {
                TtyHandle::Stdin(stdin) => stdin.as_fd(),
                TtyHandle::DevTty(file) => file.as_fd(),
            }
        }
    }

    fn open_tty() -> miette::Result<TtyHandle> {
        let stdin = io::stdin();
        if termios::isatty(&stdin) {
            return Ok(TtyHandle::Stdin(stdin));
        }
        File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .map(TtyHandle::DevTty)
            .map_err(|e| miette!("no controlling terminal: {e}"))
    }

    /// # Errors
    ///
    /// Returns an error if there is no terminal, or its attributes can not be read or
    /// written.
    pub fn enable_raw_mode() -> miette::Result<()> {
        let tty = open_tty()?;
        let mut settings = termios::tcgetattr(&tty)
            .map_err(|e| miette!("failed to read terminal attributes: {e}"))?;

        {
            let mut saved = SAVED_TERMIOS
                .lock()
                .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;
            if saved.is_none() {
                *saved = Some(settings.clone());
            }
        }

        // Same as cfmakeraw: no canonical mode, no echo, no signals, VMIN=1 VTIME=0.
        settings.make_raw();
        termios::tcsetattr(&tty, OptionalActions::Now, &settings)
            .map_err(|e| miette!("failed to write terminal attributes: {e}"))?;
        Ok(())
    }

    /// No-op if raw mode was never enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved attributes can not be written back.
    pub fn disable_raw_mode() -> miette::Result<()> {
        let saved = SAVED_TERMIOS
            .lock()
            .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;
        let Some(settings) = saved.as_ref() else {
            return Ok(());
        };
        let tty = open_tty()?;
        termios::tcsetattr(&tty, OptionalActions::Now, settings)
            .map_err(|e| miette!("failed to write terminal attributes: {e}"))?;
        Ok(())
    }
}

#[cfg(not(unix))]
mod other {
    use miette::IntoDiagnostic;

    /// # Errors
    ///
    /// Returns an error if crossterm can not switch the console mode.
    pub fn enable_raw_mode() -> miette::Result<()> {
        crossterm::terminal::enable_raw_mode().into_diagnostic()
    }

    /// # Errors
    ///
    /// Returns an error if crossterm can not switch the console mode.
    pub fn disable_raw_mode() -> miette::Result<()> {
        crossterm::terminal::disable_raw_mode().into_diagnostic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Without a prior enable there is nothing to restore.
    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_disable_without_enable_is_noop() {
        assert!(disable_raw_mode().is_ok());
    }
}
