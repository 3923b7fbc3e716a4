// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic tick from TIM2 (32-bit) in up-counting mode.
//!
//! The update interrupt fires once per period; [`TickTimer::acknowledge`] clears UIF from the
//! handler.

use stm32f7xx_hal::pac;

use crate::protocol::TickAck;

pub struct TickTimer<TIM> {
    tim: TIM,
}

impl TickTimer<pac::TIM2> {
    /// Configure TIM2 with prescaler 0 and the given auto-reload value, and enable the update
    /// interrupt. The counter is left stopped until [`TickTimer::start`].
    pub fn tim2(tim2: pac::TIM2, reload: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(0) });
        tim.arr.write(|w| w.bits(reload));

        // Latch PSC/ARR, then drop the update flag the UG event just raised
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        tim.dier.modify(|_, w| w.uie().set_bit());

        Self { tim }
    }

    /// Enable the counter.
    #[inline]
    pub fn start(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().set_bit());
    }
}

impl TickAck for TickTimer<pac::TIM2> {
    #[inline]
    fn acknowledge(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}
