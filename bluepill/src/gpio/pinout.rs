//! USART transmit pins of the blue pill board.

use super::{Gpio, Pin, Port};

pub const PA2: Gpio = Gpio(Port::A, Pin::P2);
pub const PA9: Gpio = Gpio(Port::A, Pin::P9);
pub const PB6: Gpio = Gpio(Port::B, Pin::P6);
pub const PB10: Gpio = Gpio(Port::B, Pin::P10);
