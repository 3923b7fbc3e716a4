// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI devboard wired to the pendulum rig.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, gpioe, Alternate, Floating, Input, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub leds: Leds,
    pub usart1: Usart1Pins,
    pub usart3: Usart3Pins,
    pub encoders: EncoderPins,
}

pub struct Leds {
    pub green: gpiob::PB0<Output<PushPull>>, // LD1
}

/// Telemetry link to the host
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// Debug terminal on the ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Quadrature and status inputs, all on GPIOE so one IDR read captures them together.
pub struct EncoderPins {
    pub status0: gpioe::PE0<Input<Floating>>,
    pub status1: gpioe::PE1<Input<Floating>>,
    pub motor_b: gpioe::PE2<Input<Floating>>,
    pub motor_a: gpioe::PE3<Input<Floating>>,
    pub arm_b: gpioe::PE4<Input<Floating>>,
    pub arm_a: gpioe::PE5<Input<Floating>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: Leds {
                green: gpiob.pb0.into_push_pull_output(),
            },

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            encoders: EncoderPins {
                status0: gpioe.pe0.into_floating_input(),
                status1: gpioe.pe1.into_floating_input(),
                motor_b: gpioe.pe2.into_floating_input(),
                motor_a: gpioe.pe3.into_floating_input(),
                arm_b: gpioe.pe4.into_floating_input(),
                arm_a: gpioe.pe5.into_floating_input(),
            },
        }
    }
}
