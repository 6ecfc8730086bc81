//! Countdown run configuration.

use crate::{ConsoleType, TimerMode, TIMER_1MS_COUNT};

/// Value the countdown starts from. The first value printed is one less.
pub const COUNTDOWN_START: u32 = 10;

/// Milliseconds between two printed values.
pub const STEP_MILLIS: u32 = 5_000;

/// Counter value for the optional initial load.
pub const TIMER_INITIAL_COUNT: u32 = 0xFF00_0000;

/// Reload value for the optional reload register load.
pub const TIMER_RLD_COUNT: u32 = 0xFFFF_FF83;

/// Printed once, before the first value.
pub const LABEL: &str = "intCounter: ";

/// Countdown configuration.
///
/// `Config::default()` runs the demo: count down from 9 with five second
/// steps, on a UART console, timer in auto-reload mode without compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Countdown start value.
    pub start: u32,
    /// Delay after each printed value, in milliseconds.
    pub step_millis: u32,
    /// Counter ticks per millisecond.
    ///
    /// Must be reachable by the counter before it reloads: at most the
    /// reload value, and at most `0xFFFF` on a 16-bit counter. A threshold
    /// the counter never reaches blocks the delay forever.
    pub ticks_per_milli: u32,
    /// Timer mode applied during setup.
    pub mode: TimerMode,
    /// Console backend selected during setup.
    pub console: ConsoleType,
    /// Loaded into the counter during setup, if set.
    pub initial_count: Option<u32>,
    /// Loaded into the reload register during setup, if set.
    ///
    /// Left unset the reload register keeps its reset value.
    pub reload_count: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: COUNTDOWN_START,
            step_millis: STEP_MILLIS,
            ticks_per_milli: TIMER_1MS_COUNT,
            mode: TimerMode::AUTO_RELOAD_NO_COMPARE,
            console: ConsoleType::Uart,
            initial_count: None,
            reload_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_fits_16_bit_counter() {
        assert!(Config::default().ticks_per_milli <= u16::MAX as u32);
    }

    #[test]
    fn reload_stays_at_reset_value_by_default() {
        let config = Config::default();
        assert_eq!(config.reload_count, None);
        assert_eq!(config.initial_count, None);
    }
}
