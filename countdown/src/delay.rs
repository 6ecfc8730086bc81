//! Block program by polling a hardware counter.

use embedded_hal::blocking::delay::DelayMs;

use crate::CounterTimer;

/// Counter ticks in one millisecond at a 24MHz counter clock.
pub const TIMER_1MS_COUNT: u32 = 0x5DC0;

/// Counter ticks in one millisecond at the given counter clock.
///
/// Never less than one tick.
#[inline]
pub const fn ticks_per_millis(clock_hz: u32) -> u32 {
    let ticks = clock_hz / 1_000;
    if ticks == 0 {
        1
    } else {
        ticks
    }
}

/// Millisecond delay on top of a [CounterTimer].
///
/// Each millisecond: clear the counter, start it, spin until it reaches the
/// threshold, stop it. The caller is blocked for the whole duration.
///
/// The threshold has to be a count the timer reaches before it reloads,
/// otherwise the poll never ends.
#[derive(Debug)]
pub struct PollDelay<T> {
    timer: T,
    ticks_per_milli: u32,
}

impl<T: CounterTimer> PollDelay<T> {
    #[inline]
    pub fn new(timer: T, ticks_per_milli: u32) -> Self {
        Self {
            timer,
            ticks_per_milli: ticks_per_milli.max(1),
        }
    }

    /// Blocks program for *atleast* `count` milliseconds.
    pub fn millis(&mut self, count: u32) {
        let mut remaining = count;
        while remaining != 0 {
            self.timer.set_counter(0);
            self.timer.enable();
            while self.timer.counter() < self.ticks_per_milli {}
            self.timer.disable();
            remaining -= 1;
        }
    }

    #[inline]
    pub fn ticks_per_milli(&self) -> u32 {
        self.ticks_per_milli
    }

    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    #[inline]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Release the timer.
    #[inline]
    pub fn free(self) -> T {
        self.timer
    }
}

impl<T: CounterTimer> DelayMs<u32> for PollDelay<T> {
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.millis(ms);
    }
}

impl<T: CounterTimer> DelayMs<u16> for PollDelay<T> {
    #[inline]
    fn delay_ms(&mut self, ms: u16) {
        self.millis(u32::from(ms));
    }
}

impl<T: CounterTimer> DelayMs<u8> for PollDelay<T> {
    #[inline]
    fn delay_ms(&mut self, ms: u8) {
        self.millis(u32::from(ms));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::TimerMode;
    use std::vec::Vec;

    /// Counter advancing `step` ticks per read while running.
    #[derive(Default)]
    struct SteppingTimer {
        count: core::cell::Cell<u32>,
        step: u32,
        running: bool,
        enables: u32,
        stopped_at: Vec<u32>,
    }

    impl CounterTimer for SteppingTimer {
        fn enable_clock(&mut self) {}
        fn reset(&mut self) {}
        fn configure(&mut self, _mode: TimerMode) {}
        fn set_counter(&mut self, count: u32) {
            self.count.set(count);
        }
        fn counter(&self) -> u32 {
            let count = self.count.get();
            if self.running {
                self.count.set(count + self.step);
            }
            count
        }
        fn set_reload(&mut self, _reload: u32) {}
        fn set_compare(&mut self, _compare: u32) {}
        fn enable(&mut self) {
            self.running = true;
            self.enables += 1;
        }
        fn disable(&mut self) {
            self.running = false;
            self.stopped_at.push(self.count.get());
        }
    }

    fn stepping(step: u32) -> SteppingTimer {
        SteppingTimer {
            step,
            ..SteppingTimer::default()
        }
    }

    #[test]
    fn one_millisecond_is_1ms_count_at_24mhz() {
        assert_eq!(ticks_per_millis(24_000_000), TIMER_1MS_COUNT);
    }

    #[test]
    fn slow_clock_still_needs_one_tick() {
        assert_eq!(ticks_per_millis(0), 1);
        assert_eq!(ticks_per_millis(999), 1);
        assert_eq!(PollDelay::new(stepping(1), 0).ticks_per_milli(), 1);
    }

    #[test]
    fn restarts_timer_once_per_millisecond() {
        let mut delay = PollDelay::new(stepping(3), 10);
        delay.millis(7);
        let timer = delay.free();
        assert_eq!(timer.enables, 7);
        assert_eq!(timer.stopped_at.len(), 7);
        assert!(!timer.running);
    }

    #[test]
    fn stops_only_after_threshold() {
        // 3 does not divide 10, the last read before stopping overshoots.
        let mut delay = PollDelay::new(stepping(3), 10);
        delay.millis(4);
        for &count in delay.timer().stopped_at.iter() {
            assert!(count >= 10);
            assert!(count < 10 + 3 + 3);
        }
    }

    #[test]
    fn zero_millis_leaves_timer_alone() {
        let mut delay = PollDelay::new(stepping(1), 10);
        delay.millis(0);
        assert_eq!(delay.timer().enables, 0);
        assert!(delay.timer().stopped_at.is_empty());
    }

    #[test]
    fn delay_ms_widths_agree() {
        let mut delay = PollDelay::new(stepping(5), 5);
        delay.delay_ms(2u8);
        delay.delay_ms(3u16);
        delay.delay_ms(4u32);
        assert_eq!(delay.timer().enables, 9);
    }
}
