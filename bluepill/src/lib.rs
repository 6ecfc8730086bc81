//! Minimal HAL crate for the STM32f103 microcontroller.
//!
//! Covers what the timer countdown demo needs: system clock, GPIO, USART,
//! the general purpose timers and a text console. Registers are reached
//! directly, peripherals are not owned. It is minimal in the sense that it
//! does not stop you from using a peripheral before its clock is enabled.
//!
//! The timer and console implement the [countdown] hardware traits.

#![no_std]

pub mod clock;
pub mod console;
pub mod delay;
pub mod gpio;
pub mod timer;
pub mod uart;

pub use console::Console;
pub use timer::Counter;
