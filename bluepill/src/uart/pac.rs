use crate::{clock, gpio};
use stm32f1xx_hal::pac::{Peripherals as DevicePeripherals, USART1, USART2, USART3};

use gpio::{InputMode, OutputMode};

type UsartPtr = stm32f1xx_hal::pac::usart1::RegisterBlock;

/// Available USART peripherals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Usart {
    Usart1(Port),
    Usart2,
    Usart3,
}

/// Available GPIO ports for Usart1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
}

impl Usart {
    #[inline]
    fn regs(&self) -> &'static UsartPtr {
        unsafe {
            match self {
                Self::Usart1(_) => &*USART1::ptr(),
                Self::Usart2 => &*USART2::ptr(),
                Self::Usart3 => &*USART3::ptr(),
            }
        }
    }

    pub fn tx_pin(&self) -> gpio::Gpio {
        match self {
            Self::Usart1(Port::A) => gpio::PA9,
            Self::Usart1(Port::B) => gpio::PB6,
            Self::Usart2 => gpio::PA2,
            Self::Usart3 => gpio::PB10,
        }
    }

    /// Peripheral clock, in Hertz.
    #[inline]
    fn clock_speed(&self) -> u32 {
        unsafe {
            match self {
                Self::Usart1(_) => clock::apb2_speed(),
                _ => clock::apb1_speed(),
            }
        }
    }

    fn configure_af_remap(&self) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Self::Usart1(Port::A) => dp.AFIO.mapr.modify(|_, w| w.usart1_remap().clear_bit()),
                Self::Usart1(Port::B) => dp.AFIO.mapr.modify(|_, w| w.usart1_remap().set_bit()),
                _ => (),
            }
        }
    }

    /// Hand the TX pin to the USART, or float it.
    pub fn configure_tx_pin(&self, mode: Option<OutputMode>) {
        match mode {
            Some(mode) => gpio::configure(self.tx_pin(), mode.as_af().into()),
            None => gpio::configure(self.tx_pin(), InputMode::FloatingInput.into()),
        }
    }

    /// Enable the peripheral clock and set up an 8N1 frame at `baudrate`.
    #[inline]
    pub fn configure(&self, baudrate: u32) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Self::Usart1(_) => dp.RCC.apb2enr.modify(|_, w| w.usart1en().enabled()),
                Self::Usart2 => dp.RCC.apb1enr.modify(|_, w| w.usart2en().enabled()),
                Self::Usart3 => dp.RCC.apb1enr.modify(|_, w| w.usart3en().enabled()),
            }
        }
        gpio::enable_alternate_function_io();
        self.configure_af_remap();

        // USARTDIV in 1/16ths, rounded.
        let divider = (self.clock_speed() + baudrate / 2) / baudrate.max(1);
        let regs = self.regs();
        unsafe {
            regs.brr.modify(|_, w| {
                w.div_mantissa().bits((divider >> 4) as u16);
                w.div_fraction().bits((divider & 0xF) as u8)
            });
        }
        regs.cr1.modify(|_, w| {
            w.ue().enabled(); // Enable the USART.
            w.m().m8(); // 8 data bits.
            w.pce().disabled() // No parity check.
        });
        regs.cr2.modify(|_, w| w.stop().stop1());
    }

    #[inline]
    pub fn tx_enable(&self, enable: bool) {
        self.regs().cr1.modify(|_, w| w.te().bit(enable));
    }

    #[inline]
    pub fn write_data_reg(&self, byte: u8) {
        unsafe { self.regs().dr.write(|w| w.dr().bits(byte as u16)) };
    }

    #[inline]
    pub fn tx_buffer_empty(&self) -> bool {
        self.regs().sr.read().txe().bit_is_set()
    }

    #[inline]
    pub fn is_transmission_complete(&self) -> bool {
        self.regs().sr.read().tc().bit_is_set()
    }
}
