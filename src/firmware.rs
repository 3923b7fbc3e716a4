// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board bring-up, interrupt handlers, and the polling loop.
//!
//! The main context owns the encoder inputs and runs the poller forever. TIM2 sends one frame per
//! tick and USART1 drains it; both handlers reach their peripherals through [`TELEMETRY`] and the
//! counters through [`SHARED`], nothing else.

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;

use hal::{
    gpio::{gpiob, Output, PushPull},
    pac::{self, interrupt, Interrupt},
    prelude::*,
    serial::{self, Instance, Serial},
};
use stm32f7xx_hal as hal;

use pendulum_telemetry::{
    config::{ConfigError, CONFIG},
    encoder::{Axis, Poller},
    heartbeat::Heartbeat,
    hw::{BoardPins, EncoderInputs, FrameLink, Led, TickTimer, Usart},
    protocol::{on_tick, FRAME_LEN, SYNC_BYTE},
    shared::SharedState,
};

// Lower value = higher urgency
const TIM2_PRIORITY: u8 = 0x10;
const USART1_PRIORITY: u8 = 0x20;

static SHARED: SharedState = SharedState::new(CONFIG.layout);

/// Peripherals used from interrupt context. Filled once before the interrupts are unmasked.
static TELEMETRY: Mutex<RefCell<Option<Telemetry>>> = Mutex::new(RefCell::new(None));

struct Telemetry {
    link: FrameLink,
    timer: TickTimer<pac::TIM2>,
    led: Led<gpiob::PB0<Output<PushPull>>>,
    heartbeat: Heartbeat,
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(216.MHz()).freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

    // USART3 (DBG)
    let console_cfg = serial::Config {
        baud_rate: CONFIG.console_baud.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        console_cfg,
    );
    let mut console = Usart::new(serial);

    console.println("");
    console.println("pendulum-telemetry");

    if let Err(e) = CONFIG.validate() {
        halt(&mut console, e);
    }
    let reload = match CONFIG.timer_reload(clocks.timclk1().raw()) {
        Ok(reload) => reload,
        Err(e) => halt(&mut console, e),
    };
    report(&mut console, reload);

    // USART1 (telemetry)
    let link_cfg = serial::Config {
        baud_rate: CONFIG.link_baud.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, link_cfg);
    let link = FrameLink::new(serial);

    // TIM2 tick
    let mut timer = TickTimer::tim2(dp.TIM2, reload);

    let mut led = Led::active_high(pins.leds.green);
    led.on();

    timer.start();
    critical_section::with(|cs| {
        TELEMETRY.borrow_ref_mut(cs).replace(Telemetry {
            link,
            timer,
            led,
            heartbeat: Heartbeat::new(CONFIG.heartbeat_ticks),
        });
    });

    unsafe {
        cp.NVIC.set_priority(Interrupt::TIM2, TIM2_PRIORITY);
        cp.NVIC.set_priority(Interrupt::USART1, USART1_PRIORITY);
        NVIC::unmask(Interrupt::TIM2);
        NVIC::unmask(Interrupt::USART1);
    }

    console.println("running");
    console.flush();

    let mut inputs = EncoderInputs::new(pins.encoders);
    let mut poller = Poller::new(CONFIG.decode_policy);
    poller.run(&mut inputs, &SHARED)
}

/// Print the effective configuration on the debug terminal.
fn report<U: Instance>(console: &mut Usart<U>, reload: u32) {
    console.write_str("link: ");
    console.print_u32(CONFIG.link_baud);
    console.println(" bps on USART1");

    console.write_str("tick: ");
    console.print_u32(CONFIG.tick_hz);
    console.write_str(" Hz, TIM2 reload ");
    console.print_u32(reload);
    console.println("");

    console.write_str("frame: ");
    console.print_u32(FRAME_LEN as u32);
    console.write_str(" bytes, sync ");
    console.print_hex_u8(SYNC_BYTE);
    console.println("");

    let layout = CONFIG.layout;
    let _ = writeln!(
        console,
        "layout: arm >> {}, motor >> {}, status mask {:#04b}\r",
        layout.shift(Axis::Arm),
        layout.shift(Axis::Motor),
        layout.status_mask
    );
    let _ = writeln!(console, "decode: {}\r", CONFIG.decode_policy);
}

fn halt<U: Instance>(console: &mut Usart<U>, err: ConfigError) -> ! {
    let _ = writeln!(console, "config error: {}\r", err);
    console.flush();
    loop {
        cortex_m::asm::nop();
    }
}

#[interrupt]
fn TIM2() {
    critical_section::with(|cs| {
        if let Some(t) = TELEMETRY.borrow_ref_mut(cs).as_mut() {
            on_tick(&SHARED, &mut t.link, &mut t.timer);
            if t.heartbeat.tick() {
                t.led.toggle();
            }
        }
    });
}

#[interrupt]
fn USART1() {
    critical_section::with(|cs| {
        if let Some(t) = TELEMETRY.borrow_ref_mut(cs).as_mut() {
            t.link.on_txe();
        }
    });
}
