use crate::clock;
use stm32f1xx_hal::pac::{
    tim1::RegisterBlock as RegisterBlock1, tim2::RegisterBlock as RegisterBlock2,
    Peripherals as DevicePeripherals, TIM1, TIM2, TIM3, TIM4,
};

enum TimerPtr {
    Tim1(*const RegisterBlock1),
    Tim234(*const RegisterBlock2),
}

/// Runs `$body` with `$regs` bound to the register block of `$timer`.
///
/// TIM1 and TIM2..4 have distinct register block types with the same
/// register names, so the body is expanded once for each.
macro_rules! with_regs {
    ($timer:expr, |$regs:ident| $body:expr) => {
        unsafe {
            match $timer.ptr() {
                TimerPtr::Tim1(ptr) => {
                    let $regs = &*ptr;
                    $body
                }
                TimerPtr::Tim234(ptr) => {
                    let $regs = &*ptr;
                    $body
                }
            }
        }
    };
}

/// Available timer peripherals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    Tim1,
    Tim2,
    Tim3,
    Tim4,
}

/// Capture/compare channels.
#[repr(u8)]
#[derive(Clone, Copy, Debug)]
pub enum Channel {
    C1 = 0,
    C2 = 1,
    C3 = 2,
    C4 = 3,
}

/// Output compare modes, `OCxM` field of `CCMRx`.
#[repr(u8)]
#[derive(Clone, Copy, Debug)]
pub enum OutputCompareMode {
    Frozen = 0,
    ActiveMatch = 1,
    InactiveMatch = 2,
    Toggle = 3,
    ForceInactive = 4,
    ForceActive = 5,
    Pwm1 = 6,
    Pwm2 = 7,
}

impl Timer {
    #[inline]
    fn ptr(&self) -> TimerPtr {
        match self {
            Timer::Tim1 => TimerPtr::Tim1(TIM1::ptr()),
            Timer::Tim2 => TimerPtr::Tim234(TIM2::ptr()),
            Timer::Tim3 => TimerPtr::Tim234(TIM3::ptr()),
            Timer::Tim4 => TimerPtr::Tim234(TIM4::ptr()),
        }
    }

    /// Counter clock before the prescaler, in Hertz.
    #[inline]
    pub fn clock_speed(&self) -> u32 {
        unsafe {
            match self {
                Timer::Tim1 => clock::apb2_timer_speed(),
                _ => clock::apb1_timer_speed(),
            }
        }
    }

    #[inline]
    pub fn enable_rcc(&mut self) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Timer::Tim1 => dp.RCC.apb2enr.modify(|_, w| w.tim1en().enabled()),
                Timer::Tim2 => dp.RCC.apb1enr.modify(|_, w| w.tim2en().enabled()),
                Timer::Tim3 => dp.RCC.apb1enr.modify(|_, w| w.tim3en().enabled()),
                Timer::Tim4 => dp.RCC.apb1enr.modify(|_, w| w.tim4en().enabled()),
            }
        }
    }

    /// Pulse the peripheral reset line.
    ///
    /// All timer registers return to their reset values, `ARR` to `0xFFFF`.
    #[inline]
    pub fn reset(&mut self) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Timer::Tim1 => {
                    dp.RCC.apb2rstr.modify(|_, w| w.tim1rst().set_bit());
                    dp.RCC.apb2rstr.modify(|_, w| w.tim1rst().clear_bit());
                }
                Timer::Tim2 => {
                    dp.RCC.apb1rstr.modify(|_, w| w.tim2rst().set_bit());
                    dp.RCC.apb1rstr.modify(|_, w| w.tim2rst().clear_bit());
                }
                Timer::Tim3 => {
                    dp.RCC.apb1rstr.modify(|_, w| w.tim3rst().set_bit());
                    dp.RCC.apb1rstr.modify(|_, w| w.tim3rst().clear_bit());
                }
                Timer::Tim4 => {
                    dp.RCC.apb1rstr.modify(|_, w| w.tim4rst().set_bit());
                    dp.RCC.apb1rstr.modify(|_, w| w.tim4rst().clear_bit());
                }
            }
        }
    }

    #[inline]
    pub fn write_arr(&mut self, arr: u16) {
        with_regs!(self, |regs| regs.arr.write(|w| w.bits(arr as u32)))
    }

    #[inline]
    pub fn write_psc(&mut self, psc: u16) {
        with_regs!(self, |regs| regs.psc.write(|w| w.bits(psc as u32)))
    }

    /// Force an update event, latching the preloaded prescaler.
    ///
    /// Also clears the counter.
    #[inline]
    pub fn generate_update(&mut self) {
        with_regs!(self, |regs| regs.egr.write(|w| w.ug().set_bit()))
    }

    /// Stop at the next update event instead of reloading.
    #[inline]
    pub fn one_pulse(&mut self, enable: bool) {
        with_regs!(self, |regs| regs.cr1.modify(|_, w| w.opm().bit(enable)))
    }

    #[inline]
    pub fn enable(&mut self) {
        with_regs!(self, |regs| regs.cr1.modify(|_, w| w.cen().enabled()))
    }

    #[inline]
    pub fn disable(&mut self) {
        with_regs!(self, |regs| regs.cr1.modify(|_, w| w.cen().disabled()))
    }

    #[inline]
    pub fn read_counter_value(&self) -> u16 {
        with_regs!(self, |regs| regs.cnt.read().bits() as u16)
    }

    #[inline]
    pub fn write_counter_value(&mut self, count: u16) {
        with_regs!(self, |regs| regs.cnt.write(|w| w.bits(count as u32)))
    }

    #[inline]
    pub fn output_compare_mode(&mut self, channel: Channel, mode: OutputCompareMode) {
        let shift = match channel {
            Channel::C1 | Channel::C3 => 4,
            Channel::C2 | Channel::C4 => 4 + 8,
        };
        let mask = !(7 << shift);
        let bits = (mode as u32) << shift;
        match channel {
            Channel::C1 | Channel::C2 => with_regs!(self, |regs| regs
                .ccmr1_output()
                .modify(|r, w| w.bits((r.bits() & mask) | bits))),
            Channel::C3 | Channel::C4 => with_regs!(self, |regs| regs
                .ccmr2_output()
                .modify(|r, w| w.bits((r.bits() & mask) | bits))),
        }
    }

    /// Enable or disable the capture/compare channel.
    #[inline]
    pub fn compare_enable(&mut self, channel: Channel, enable: bool) {
        let bit = 1 << (4 * channel as u8);
        with_regs!(self, |regs| regs.ccer.modify(|r, w| {
            if enable {
                w.bits(r.bits() | bit)
            } else {
                w.bits(r.bits() & !bit)
            }
        }))
    }

    #[inline]
    pub fn write_ccr(&mut self, channel: Channel, ccr: u16) {
        let ccr = ccr as u32;
        match channel {
            Channel::C1 => with_regs!(self, |regs| regs.ccr1.write(|w| w.bits(ccr))),
            Channel::C2 => with_regs!(self, |regs| regs.ccr2.write(|w| w.bits(ccr))),
            Channel::C3 => with_regs!(self, |regs| regs.ccr3.write(|w| w.bits(ccr))),
            Channel::C4 => with_regs!(self, |regs| regs.ccr4.write(|w| w.bits(ccr))),
        }
    }

    #[inline]
    pub fn clear_update_interrupt_flag(&mut self) {
        with_regs!(self, |regs| regs.sr.modify(|_, w| w.uif().clear_bit()))
    }
}
