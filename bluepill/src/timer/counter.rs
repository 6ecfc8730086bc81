use countdown::{CounterTimer, TimerMode};

use super::{Channel, OutputCompareMode, Timer};

/// Compare channel used when a [TimerMode] asks for compare.
const COMPARE_CHANNEL: Channel = Channel::C1;

/// Up-counting timer with a fixed tick rate.
///
/// The counter register is 16 bits wide, wider values are truncated. A
/// millisecond threshold polled on this counter must not exceed
/// [MAX_COUNT][Counter::MAX_COUNT], pick `tick_hz` accordingly.
#[derive(Debug)]
pub struct Counter {
    timer: Timer,
    tick_hz: u32,
}

impl Counter {
    /// Largest value the counter register holds.
    pub const MAX_COUNT: u32 = u16::MAX as u32;

    /// Counter on `timer` ticking at `tick_hz`.
    ///
    /// The rate is applied by [reset][CounterTimer::reset()], the prescaler
    /// is lost with every peripheral reset.
    #[inline]
    pub fn new(timer: Timer, tick_hz: u32) -> Self {
        Self { timer, tick_hz }
    }

    #[inline]
    pub fn timer(&self) -> Timer {
        self.timer
    }

    #[inline]
    pub fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    /// Prescaler value for the requested tick rate.
    ///
    /// Rounds to the nearest reachable rate.
    fn prescaler(&self) -> u16 {
        let clock = self.timer.clock_speed();
        let divider = (clock + self.tick_hz / 2) / self.tick_hz.max(1);
        (divider.max(1) - 1).min(u16::MAX as u32) as u16
    }
}

impl CounterTimer for Counter {
    #[inline]
    fn enable_clock(&mut self) {
        self.timer.enable_rcc();
    }

    fn reset(&mut self) {
        self.timer.reset();
        let psc = self.prescaler();
        self.timer.write_psc(psc);
        // Latch the prescaler, then drop the update flag this raises.
        self.timer.generate_update();
        self.timer.clear_update_interrupt_flag();
    }

    fn configure(&mut self, mode: TimerMode) {
        self.timer.one_pulse(!mode.auto_reload());
        if mode.compare() {
            self.timer
                .output_compare_mode(COMPARE_CHANNEL, OutputCompareMode::Frozen);
            self.timer.compare_enable(COMPARE_CHANNEL, true);
        } else {
            self.timer.compare_enable(COMPARE_CHANNEL, false);
        }
    }

    #[inline]
    fn set_counter(&mut self, count: u32) {
        self.timer.write_counter_value(count as u16);
    }

    #[inline]
    fn counter(&self) -> u32 {
        self.timer.read_counter_value() as u32
    }

    #[inline]
    fn set_reload(&mut self, reload: u32) {
        self.timer.write_arr(reload as u16);
    }

    #[inline]
    fn set_compare(&mut self, compare: u32) {
        self.timer.write_ccr(COMPARE_CHANNEL, compare as u16);
    }

    #[inline]
    fn enable(&mut self) {
        self.timer.enable();
    }

    #[inline]
    fn disable(&mut self) {
        self.timer.disable();
    }
}
