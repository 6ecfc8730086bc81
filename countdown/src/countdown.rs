//! The countdown loop.
//!
//! Example use:
//!
//! ```ignore
//! let mut demo = CountdownLoop::new(timer, console, Config::default());
//!
//! // Enables the timer clock, brings up the console and configures the timer.
//! demo.setup()?;
//!
//! // Prints " 9", " 8", ... " 0", waiting between values, then the status.
//! while demo.step()?.is_some() {}
//!
//! demo.halt()
//! ```

use crate::config::LABEL;
use crate::status::{self, Status};
use crate::{Config, Console, CounterTimer, Error, PollDelay};

/// Values to print, from `start - 1` down to zero.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    value: u32,
}

impl Countdown {
    #[inline]
    pub const fn new(start: u32) -> Self {
        Self { value: start }
    }

    /// Values not yet yielded.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.value
    }
}

impl Iterator for Countdown {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.value == 0 {
            return None;
        }
        self.value -= 1;
        Some(self.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.value as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Countdown {}

/// Countdown loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Hardware not configured yet.
    Setup,
    /// Counting down.
    Running,
    /// Done. Never left.
    Halted,
}

/// Prints a countdown, pausing on a polled timer between values.
#[derive(Debug)]
pub struct CountdownLoop<T, C> {
    delay: PollDelay<T>,
    console: C,
    config: Config,
    countdown: Countdown,
    state: State,
}

impl<T: CounterTimer, C: Console> CountdownLoop<T, C> {
    #[inline]
    pub fn new(timer: T, console: C, config: Config) -> Self {
        Self {
            delay: PollDelay::new(timer, config.ticks_per_milli),
            console,
            config,
            countdown: Countdown::new(config.start),
            state: State::Setup,
        }
    }

    /// One time hardware setup, then the label.
    ///
    /// Timer clock first, then the console, then timer reset and mode.
    pub fn setup(&mut self) -> Result<(), Error> {
        if self.state != State::Setup {
            return Err(Error::AlreadyStarted);
        }

        let config = self.config;
        let timer = self.delay.timer_mut();
        timer.enable_clock();

        self.console.init();
        self.console.set_type(config.console)?;

        let timer = self.delay.timer_mut();
        timer.reset();
        if let Some(count) = config.initial_count {
            timer.set_counter(count);
        }
        if let Some(reload) = config.reload_count {
            timer.set_reload(reload);
        }
        timer.configure(config.mode);

        // Stays in setup until the label is out, a retry starts over.
        write!(self.console, "\r\n{}", LABEL)?;
        self.state = State::Running;
        Ok(())
    }

    /// Print the next value and wait.
    ///
    /// Returns the printed value. Once the countdown is exhausted the status
    /// line is printed, the loop halts and `None` is returned from then on
    /// without further output.
    pub fn step(&mut self) -> Result<Option<u32>, Error> {
        match self.state {
            State::Setup => Err(Error::NotStarted),
            State::Halted => Ok(None),
            State::Running => match self.countdown.next() {
                Some(value) => {
                    write!(self.console, " {}", value)?;
                    self.delay.millis(self.config.step_millis);
                    Ok(Some(value))
                }
                None => {
                    self.state = State::Halted;
                    status::write_status(&mut self.console, Status::Pass)?;
                    Ok(None)
                }
            },
        }
    }

    /// Set up and count down to zero.
    pub fn run(&mut self) -> Result<(), Error> {
        self.setup()?;
        while self.step()?.is_some() {}
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn delay(&self) -> &PollDelay<T> {
        &self.delay
    }

    #[inline]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[inline]
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Idle forever.
    pub fn halt(self) -> ! {
        loop {
            core::hint::spin_loop();
        }
    }
}
