// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Encoder input sampling.
//!
//! The six inputs sit on PE0..PE5 in the same order as the sample bits, so a single read of
//! GPIOE's input data register yields the sample directly. Reading the pins one by one would let
//! an edge land between two reads.

use stm32f7xx_hal::pac;

use crate::encoder::{Sample, SampleSource};
use crate::hw::pins::EncoderPins;

const SAMPLE_MASK: u32 = 0b11_1111;

/// Owns the encoder pins so nothing else can reconfigure them while they are being sampled.
pub struct EncoderInputs {
    _pins: EncoderPins,
}

impl EncoderInputs {
    pub fn new(pins: EncoderPins) -> Self {
        Self { _pins: pins }
    }
}

impl SampleSource for EncoderInputs {
    #[inline]
    fn sample(&mut self) -> Sample {
        // Read-only access to IDR; the pins are owned by `self`.
        let gpioe = unsafe { &*pac::GPIOE::ptr() };
        Sample::new((gpioe.idr.read().bits() & SAMPLE_MASK) as u8)
    }
}
