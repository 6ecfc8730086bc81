//! Board-agnostic timer countdown demo.
//!
//! Prints `9` down to `0` on a console, waiting a fixed number of milliseconds
//! between values. The wait is a busy-poll on a hardware counter register, see
//! [delay::PollDelay]. The hardware is reached through the traits in [hal], so
//! the same loop runs against a board crate or a simulated timer.
//!
//! Example use:
//!
//! ```ignore
//! let mut demo = CountdownLoop::new(timer, console, Config::default());
//! demo.run().ok();
//! demo.halt()
//! ```

#![no_std]

pub mod config;
pub mod countdown;
pub mod delay;
pub mod hal;
pub mod status;

mod error;

pub use config::Config;
pub use countdown::{Countdown, CountdownLoop, State};
pub use delay::{ticks_per_millis, PollDelay, TIMER_1MS_COUNT};
pub use error::Error;
pub use hal::{Console, ConsoleType, CounterTimer, TimerMode};
pub use status::Status;
