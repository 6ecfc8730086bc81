//! General purpose timers.
//!
//! Example use:
//!
//! ```ignore
//! // Enable system clock.
//! clock::init();
//!
//! // TIM2 counting at 24MHz.
//! let mut counter = timer::Counter::new(timer::TIM2, 24_000_000);
//! counter.enable_clock();
//! counter.reset();
//! counter.configure(TimerMode::AUTO_RELOAD_NO_COMPARE);
//!
//! counter.set_counter(0);
//! counter.enable();
//! let ticks = counter.counter();
//! ```

mod counter;
mod pac;

pub use counter::Counter;
pub use pac::{Channel, OutputCompareMode, Timer};

pub const TIM1: Timer = Timer::Tim1;
pub const TIM2: Timer = Timer::Tim2;
pub const TIM3: Timer = Timer::Tim3;
pub const TIM4: Timer = Timer::Tim4;
