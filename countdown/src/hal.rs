//! Hardware the countdown loop runs on.
//!
//! Board crates implement these for their timer and serial peripherals.

use core::fmt;

use crate::Error;

/// Counting mode of a [CounterTimer].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    /// Stop counting at the first overflow.
    OneShot { compare: bool },
    /// Reload the counter from the reload register at every overflow.
    AutoReload { compare: bool },
}

impl TimerMode {
    /// Mode used by the countdown demo.
    pub const AUTO_RELOAD_NO_COMPARE: TimerMode = TimerMode::AutoReload { compare: false };

    #[inline]
    pub fn auto_reload(self) -> bool {
        matches!(self, TimerMode::AutoReload { .. })
    }

    #[inline]
    pub fn compare(self) -> bool {
        match self {
            TimerMode::OneShot { compare } | TimerMode::AutoReload { compare } => compare,
        }
    }
}

/// Free running hardware counter.
///
/// Register access is infallible. The counter width is up to the
/// implementation, values wider than the register are truncated.
pub trait CounterTimer {
    /// Enable the peripheral clock.
    fn enable_clock(&mut self);

    /// Put the peripheral back into its reset state.
    fn reset(&mut self);

    /// Select the counting mode.
    fn configure(&mut self, mode: TimerMode);

    /// Write the counter register.
    fn set_counter(&mut self, count: u32);

    /// Read the counter register.
    fn counter(&self) -> u32;

    /// Write the value loaded into the counter on overflow.
    fn set_reload(&mut self, reload: u32);

    /// Write the compare match value.
    fn set_compare(&mut self, compare: u32);

    /// Start counting.
    fn enable(&mut self);

    /// Stop counting.
    fn disable(&mut self);
}

/// Available console backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleType {
    /// Serial port.
    Uart,
    /// Debugger host, through semihosting.
    Semihosting,
}

/// Text console.
///
/// Formatted output goes through [fmt::Write], so `write!` works on it.
pub trait Console: fmt::Write {
    /// Bring up the console hardware.
    fn init(&mut self);

    /// Route output to the given backend.
    ///
    /// Fails if the backend cannot be reached.
    fn set_type(&mut self, console: ConsoleType) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_mode_reloads_without_compare() {
        let mode = TimerMode::AUTO_RELOAD_NO_COMPARE;
        assert!(mode.auto_reload());
        assert!(!mode.compare());
    }

    #[test]
    fn one_shot_does_not_reload() {
        let mode = TimerMode::OneShot { compare: true };
        assert!(!mode.auto_reload());
        assert!(mode.compare());
    }
}
