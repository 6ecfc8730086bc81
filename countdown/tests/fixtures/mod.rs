//! Simulated hardware for the countdown integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use countdown::{Console, ConsoleType, CounterTimer, Error, TimerMode};

/// Everything the simulated hardware was asked to do, in order.
///
/// Counter reads are not logged, they are counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    TimerClock,
    TimerReset,
    TimerMode(TimerMode),
    SetCounter(u32),
    SetReload(u32),
    SetCompare(u32),
    TimerEnable,
    TimerDisable(u32),
    ConsoleInit,
    ConsoleType(ConsoleType),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Counter advancing `step` ticks per read while enabled.
pub struct SimTimer {
    log: Log,
    count: Cell<u32>,
    reads: Cell<u64>,
    step: u32,
    running: bool,
}

impl SimTimer {
    pub fn new(log: &Log, step: u32) -> Self {
        Self {
            log: log.clone(),
            count: Cell::new(0),
            reads: Cell::new(0),
            step,
            running: false,
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.get()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl CounterTimer for SimTimer {
    fn enable_clock(&mut self) {
        self.push(Event::TimerClock);
    }

    fn reset(&mut self) {
        self.count.set(0);
        self.running = false;
        self.push(Event::TimerReset);
    }

    fn configure(&mut self, mode: TimerMode) {
        self.push(Event::TimerMode(mode));
    }

    fn set_counter(&mut self, count: u32) {
        self.count.set(count);
        self.push(Event::SetCounter(count));
    }

    fn counter(&self) -> u32 {
        self.reads.set(self.reads.get() + 1);
        let count = self.count.get();
        if self.running {
            self.count.set(count.wrapping_add(self.step));
        }
        count
    }

    fn set_reload(&mut self, reload: u32) {
        self.push(Event::SetReload(reload));
    }

    fn set_compare(&mut self, compare: u32) {
        self.push(Event::SetCompare(compare));
    }

    fn enable(&mut self) {
        self.running = true;
        self.push(Event::TimerEnable);
    }

    fn disable(&mut self) {
        self.running = false;
        self.push(Event::TimerDisable(self.count.get()));
    }
}

/// Console collecting its output into a string.
pub struct SimConsole {
    log: Log,
    pub output: String,
    pub semihosting_attached: bool,
    pub fail_writes: bool,
}

impl SimConsole {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            output: String::new(),
            semihosting_attached: true,
            fail_writes: false,
        }
    }
}

impl fmt::Write for SimConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.fail_writes {
            return Err(fmt::Error);
        }
        self.output.push_str(s);
        Ok(())
    }
}

impl Console for SimConsole {
    fn init(&mut self) {
        self.log.borrow_mut().push(Event::ConsoleInit);
    }

    fn set_type(&mut self, console: ConsoleType) -> Result<(), Error> {
        if console == ConsoleType::Semihosting && !self.semihosting_attached {
            return Err(Error::Console(console));
        }
        self.log.borrow_mut().push(Event::ConsoleType(console));
        Ok(())
    }
}

/// Events other than the per-millisecond delay traffic.
pub fn setup_events(log: &Log) -> Vec<Event> {
    log.borrow()
        .iter()
        .filter(|event| {
            !matches!(
                event,
                Event::TimerEnable | Event::TimerDisable(_) | Event::SetCounter(0)
            )
        })
        .cloned()
        .collect()
}

/// Counter values seen when the timer was stopped.
pub fn stop_counts(log: &Log) -> Vec<u32> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::TimerDisable(count) => Some(*count),
            _ => None,
        })
        .collect()
}
