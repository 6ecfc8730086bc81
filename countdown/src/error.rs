use core::fmt;

use crate::ConsoleType;

/// Countdown errors.
///
/// The timer itself never fails; these cover the console and misuse of the
/// loop's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Console backend is not available.
    Console(ConsoleType),
    /// Writing to the console failed.
    Format,
    /// The loop was stepped before [setup][crate::CountdownLoop::setup()].
    NotStarted,
    /// [setup][crate::CountdownLoop::setup()] was called twice.
    AlreadyStarted,
}

impl From<fmt::Error> for Error {
    #[inline]
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Console(ConsoleType::Uart) => f.write_str("uart console unavailable"),
            Error::Console(ConsoleType::Semihosting) => {
                f.write_str("semihosting console unavailable")
            }
            Error::Format => f.write_str("console write failed"),
            Error::NotStarted => f.write_str("countdown not set up"),
            Error::AlreadyStarted => f.write_str("countdown already set up"),
        }
    }
}
