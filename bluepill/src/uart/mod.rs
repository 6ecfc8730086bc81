//! USART peripheral, transmit side.
//!
//! Example use:
//!
//! ```ignore
//! // Enable system clock.
//! clock::init();
//!
//! // Create usart bus.
//! let peripheral = uart::Usart::Usart1(uart::Port::A);
//! let mut bus = uart::Config {
//!     baudrate: 115_200,
//!     tx_pin: OutputMode::PushPull(Speed::Max50MHz),
//! }.make(peripheral);
//! bus.tx_enable(true);
//!
//! // Write data to bus.
//! write!(bus, "count: {}", 9).ok();
//! ```

mod pac;

pub use pac::{Port, Usart};

use core::fmt;
use crate::gpio::{self, OutputMode};

/// Usart peripheral configuration.
///
/// Use [make][Config::make()] to create a new [Bus].
#[derive(Copy, Clone, Debug)]
pub struct Config {
    /// Baudrate.
    pub baudrate: u32,
    /// Set output mode of the TX pin.
    pub tx_pin: OutputMode,
}

impl Config {
    #[inline]
    pub fn make(self, usart: Usart) -> Bus {
        Bus::new(usart, self)
    }
}

/// Uart bus.
///
/// Can be constructed using [Config][Config::make()].
#[derive(Debug)]
pub struct Bus {
    usart: Usart,
    tx_pin: OutputMode,
}

impl Bus {
    #[inline]
    pub fn new(usart: Usart, config: Config) -> Self {
        usart.configure(config.baudrate);
        Self {
            usart,
            tx_pin: config.tx_pin,
        }
    }

    #[inline]
    pub fn usart(&self) -> Usart {
        self.usart
    }

    /// Write byte.
    ///
    /// Returns Error if buffer is not empty.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<(), ()> {
        if self.usart.tx_buffer_empty() {
            self.usart.write_data_reg(byte);
            Ok(())
        } else {
            Err(())
        }
    }

    /// Returns TX pin of current USART peripheral.
    #[inline]
    pub fn tx_pin(&self) -> gpio::Gpio {
        self.usart.tx_pin()
    }

    /// Enable or disable transmitter.
    ///
    /// When disabled, the TX pin will be configured as floating input.
    #[inline]
    pub fn tx_enable(&mut self, enable: bool) {
        self.usart.tx_enable(enable);
        self.usart.configure_tx_pin(if enable { Some(self.tx_pin) } else { None });
    }

    /// Blocking write byte.
    ///
    /// Blocks until the byte has been written to the transmit buffer.
    #[inline]
    pub fn wait_write_byte(&mut self, byte: u8) {
        while self.write_byte(byte).is_err() {}
    }

    /// Write multiple bytes.
    ///
    /// This method blocks until all bytes are in the transmit buffer.
    #[inline]
    pub fn write_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.wait_write_byte(byte);
        }
    }

    /// Blocks until the last byte has left the shift register.
    #[inline]
    pub fn flush(&mut self) {
        while !self.usart.is_transmission_complete() {}
    }
}

impl fmt::Write for Bus {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
