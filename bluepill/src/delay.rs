//! Block program for certain period of time, by counting CPU cycles.
//!
//! Only accurate once [clock::init][crate::clock::init()] has run. Use a
//! [Counter][crate::timer::Counter] when the delay has to follow a timer.

use crate::clock::SPEED;

const MILLIS_COUNT: u32 = SPEED / 1_000;

pub use cortex_m::asm::delay;

/// Blocks program for *atleast* `count` milliseconds.
#[inline]
pub fn millis(count: u32) {
    for _ in 0..count {
        delay(MILLIS_COUNT);
    }
}

