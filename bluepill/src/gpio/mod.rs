//! GPIO peripheral.
//!
//! Only pin configuration is exposed, the console drives its pins through
//! the USART alternate functions.
//!
//! Example usage:
//!
//! ```ignore
//! clock::init();
//! gpio::enable();
//!
//! gpio::configure(PA9, OutputMode::PushPull(Speed::Max50MHz).as_af().into());
//! ```

mod mode;
mod pac;
mod pinout;

pub use mode::*;
pub use pac::{Pin, Port};
pub use pinout::*;

use stm32f1xx_hal::pac::Peripherals as DevicePeripherals;

/// Enable GPIO ports.
///
/// Enables ports A, B and C, and enables the alternate function IO peripheral.
#[inline]
pub fn enable() {
    Port::A.enable();
    Port::B.enable();
    Port::C.enable();
    enable_alternate_function_io();
}

/// GPIO pin tuple struct, see [configure].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gpio(pub Port, pub Pin);

/// Configure the given GPIO pin mode.
#[inline]
pub fn configure(pin: Gpio, mode: Mode) {
    pac::configure(pin.0, pin.1, mode);
}

/// Enable the alternate function IO peripheral.
#[inline]
pub fn enable_alternate_function_io() {
    unsafe {
        let dp = DevicePeripherals::steal();
        dp.RCC.apb2enr.modify(|_, w| w.afioen().enabled());
    }
}
