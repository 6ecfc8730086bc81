//! Counts down from 9 to 0 on the serial console, one value every five
//! seconds, timed by polling TIM2. Prints a status line and idles.

#![no_main]
#![no_std]

extern crate panic_halt;

use bluepill::gpio::{OutputMode, Speed};
use bluepill::{clock, delay, gpio, timer, uart, Console, Counter};
use countdown::{ticks_per_millis, Config, ConsoleType, CountdownLoop};
use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;

/// Counter clock of the delay timer. One millisecond is `0x5DC0` ticks.
const COUNTER_CLOCK_HZ: u32 = 24_000_000;

/// Console on USART1, TX on PA9.
const CONSOLE_UART: uart::Usart = uart::Usart::Usart1(uart::Port::A);
const CONSOLE_BAUDRATE: u32 = 115_200;

#[entry]
fn main() -> ! {
    if cfg!(debug_assertions) {
        hprintln!("Hello! This is the timer counter example.").unwrap();
    }

    // System setup.
    unsafe {
        clock::init();
    }
    gpio::enable();

    // Wait for peripherals to enable.
    delay::millis(1);

    // The 16-bit counter has to reach one millisecond worth of ticks.
    debug_assert!(ticks_per_millis(COUNTER_CLOCK_HZ) <= Counter::MAX_COUNT);
    let counter = Counter::new(timer::TIM2, COUNTER_CLOCK_HZ);
    let console = Console::new(
        CONSOLE_UART,
        uart::Config {
            baudrate: CONSOLE_BAUDRATE,
            tx_pin: OutputMode::PushPull(Speed::Max50MHz),
        },
    );
    let config = Config {
        ticks_per_milli: ticks_per_millis(COUNTER_CLOCK_HZ),
        console: ConsoleType::Uart,
        ..Config::default()
    };

    let mut demo = CountdownLoop::new(counter, console, config);
    match demo.run() {
        Ok(()) => {
            demo.console_mut().flush();
            if cfg!(debug_assertions) {
                hprintln!("Countdown done.").unwrap();
            }
        }
        Err(err) => {
            if cfg!(debug_assertions) {
                hprintln!("Countdown stopped: {}", err).unwrap();
            }
        }
    }

    // Halt the program.
    demo.halt()
}
