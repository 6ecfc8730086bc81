//! System clock setup.

use stm32f1xx_hal::pac::Peripherals as DevicePeripherals;

/// System clock speed in Hertz.
pub const SPEED: u32 = 72_000_000;

/// Setup of the system clock.
///
/// Assumes a `8Mhz` external crystal is used. SYSCLK runs at [SPEED], APB1
/// at half of it.
pub unsafe fn init() {
    let dp = DevicePeripherals::steal();

    dp.FLASH.acr.write(|w| {
        // Enable the prefetch buffer.
        w.prftbe().set_bit();
        // Flash half cycle access: disabled.
        w.hlfcya().clear_bit();
        // Latency: two wait states if 48MHz < SYSCLK <= 72MHz.
        w.latency().ws2()
    });

    while !dp.FLASH.acr.read().latency().is_ws2() {}

    dp.RCC.cfgr.write(|w| {
        // HSE oscillator clock selected as PLL input clock.
        w.pllsrc().hse_div_prediv();
        // PLL multitplication factor: mul 9
        w.pllmul().mul9();
        // APB low-speed prescaler: div 2
        w.ppre1().div2()
    });

    // Enable HSE (crystal), PLL and clock security.
    dp.RCC.cr.write(|w| {
        w.csson().set_bit();
        w.hseon().set_bit();
        w.pllon().set_bit()
    });

    while !dp.RCC.cr.read().pllrdy().is_ready() {}

    // Switch to PLL as system clock.
    dp.RCC.cfgr.modify(|_, w| w.sw().pll());

    while !dp.RCC.cfgr.read().sws().is_pll() {}
}

/// Bus speed for a given APB prescaler field.
///
/// The top bit of the field enables division, the low two bits select
/// div 2, 4, 8 or 16.
#[inline]
fn bus_speed(ppre: u8) -> u32 {
    if (ppre & 4) > 0 {
        SPEED >> ((ppre & 3) + 1)
    } else {
        SPEED
    }
}

/// Timers run at twice the bus speed whenever the bus is divided.
#[inline]
fn timer_speed(ppre: u8) -> u32 {
    if (ppre & 4) > 0 {
        bus_speed(ppre) * 2
    } else {
        bus_speed(ppre)
    }
}

/// Clock speed for Peripherals connected to APB1.
pub(crate) unsafe fn apb1_speed() -> u32 {
    let dp = DevicePeripherals::steal();
    bus_speed(dp.RCC.cfgr.read().ppre1().bits())
}

/// Clock speed for Peripherals connected to APB2.
pub(crate) unsafe fn apb2_speed() -> u32 {
    let dp = DevicePeripherals::steal();
    bus_speed(dp.RCC.cfgr.read().ppre2().bits())
}

/// Counter clock of TIM2, TIM3 and TIM4, before their prescaler.
pub(crate) unsafe fn apb1_timer_speed() -> u32 {
    let dp = DevicePeripherals::steal();
    timer_speed(dp.RCC.cfgr.read().ppre1().bits())
}

/// Counter clock of TIM1, before its prescaler.
pub(crate) unsafe fn apb2_timer_speed() -> u32 {
    let dp = DevicePeripherals::steal();
    timer_speed(dp.RCC.cfgr.read().ppre2().bits())
}
