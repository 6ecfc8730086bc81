//! Text console on a USART or on the debugger host.
//!
//! Example use:
//!
//! ```ignore
//! let mut console = Console::new(
//!     uart::Usart::Usart1(uart::Port::A),
//!     uart::Config {
//!         baudrate: 115_200,
//!         tx_pin: OutputMode::PushPull(Speed::Max50MHz),
//!     },
//! );
//! console.init();
//! console.set_type(ConsoleType::Uart)?;
//! write!(console, "intCounter: ")?;
//! ```

use core::fmt;

use countdown::{ConsoleType, Error};
use cortex_m_semihosting::hio::{self, HStdout};

use crate::uart;

/// Console writing to either backend.
///
/// Writes fail until the selected backend is up: the USART after
/// [init][countdown::Console::init()], the host once
/// [selected][countdown::Console::set_type()].
pub struct Console {
    usart: uart::Usart,
    config: uart::Config,
    bus: Option<uart::Bus>,
    host: Option<HStdout>,
    kind: ConsoleType,
}

impl Console {
    #[inline]
    pub fn new(usart: uart::Usart, config: uart::Config) -> Self {
        Self {
            usart,
            config,
            bus: None,
            host: None,
            kind: ConsoleType::Uart,
        }
    }

    /// Backend currently receiving output.
    #[inline]
    pub fn kind(&self) -> ConsoleType {
        self.kind
    }

    /// Wait for the USART to finish sending.
    #[inline]
    pub fn flush(&mut self) {
        if let Some(bus) = self.bus.as_mut() {
            bus.flush();
        }
    }
}

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.kind {
            ConsoleType::Uart => match self.bus.as_mut() {
                Some(bus) => fmt::Write::write_str(bus, s),
                None => Err(fmt::Error),
            },
            ConsoleType::Semihosting => match self.host.as_mut() {
                Some(host) => host.write_all(s.as_bytes()).map_err(|_| fmt::Error),
                None => Err(fmt::Error),
            },
        }
    }
}

impl countdown::Console for Console {
    fn init(&mut self) {
        if self.bus.is_none() {
            let mut bus = self.config.make(self.usart);
            bus.tx_enable(true);
            self.bus = Some(bus);
        }
    }

    fn set_type(&mut self, console: ConsoleType) -> Result<(), Error> {
        match console {
            ConsoleType::Uart => {
                if self.bus.is_none() {
                    return Err(Error::Console(console));
                }
            }
            ConsoleType::Semihosting => {
                if self.host.is_none() {
                    let host = hio::hstdout().map_err(|_| Error::Console(console))?;
                    self.host = Some(host);
                }
            }
        }
        self.flush();
        self.kind = console;
        Ok(())
    }
}
