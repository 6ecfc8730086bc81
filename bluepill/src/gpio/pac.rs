use stm32f1xx_hal::pac::Peripherals as DevicePeripherals;
type GpioPtr = stm32f1xx_hal::pac::gpioa::RegisterBlock;
type GPIOA = stm32f1xx_hal::pac::GPIOA;
type GPIOB = stm32f1xx_hal::pac::GPIOB;
type GPIOC = stm32f1xx_hal::pac::GPIOC;

use super::Mode;

/// Available GPIO ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
}

/// Available GPIO pins.
#[repr(u8)]
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pin {
    P0  = 0,
    P1  = 1,
    P2  = 2,
    P3  = 3,
    P4  = 4,
    P5  = 5,
    P6  = 6,
    P7  = 7,
    P8  = 8,
    P9  = 9,
    P10 = 10,
    P11 = 11,
    P12 = 12,
    P13 = 13,
    P14 = 14,
    P15 = 15,
}

impl Port {
    #[inline]
    fn ptr(self) -> *const GpioPtr {
        match self {
            Port::A => GPIOA::ptr(),
            Port::B => GPIOB::ptr(),
            Port::C => GPIOC::ptr(),
        }
    }

    #[inline]
    pub(crate) fn enable(self) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Port::A => dp.RCC.apb2enr.modify(|_, w| w.iopaen().enabled()),
                Port::B => dp.RCC.apb2enr.modify(|_, w| w.iopben().enabled()),
                Port::C => dp.RCC.apb2enr.modify(|_, w| w.iopcen().enabled()),
            }
        }
    }
}

/// Configure this gpio pin with the given mode.
///
/// Pins 0..7 live in `CRL`, pins 8..15 in `CRH`. Pull direction of the
/// input modes is selected through `ODR`.
#[inline]
pub(crate) fn configure(port: Port, pin: Pin, mode: Mode) {
    let pin_nr = pin as u32;
    let shift = (pin_nr % 8) * 4;
    let mask = !(15 << shift);
    let nibble = mode.nibble() << shift;
    let regs = unsafe { &*port.ptr() };
    unsafe {
        if pin_nr < 8 {
            regs.crl.modify(|r, w| w.bits((r.bits() & mask) | nibble));
        } else {
            regs.crh.modify(|r, w| w.bits((r.bits() & mask) | nibble));
        }
    }
    match mode {
        Mode::InputPullUp => write_odr(port, pin, true),
        Mode::InputPullDown => write_odr(port, pin, false),
        _ => (),
    }
}

#[inline]
fn write_odr(port: Port, pin: Pin, value: bool) {
    let bit = 1 << pin as u8;
    unsafe {
        (*port.ptr()).odr.modify(|r, w| {
            w.bits(if value { r.bits() | bit } else { r.bits() & !bit })
        });
    }
}
