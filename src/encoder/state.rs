// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-axis decoder state.

use super::phase::{decode, Direction, Phase};
use super::sample::Axis;

/// Phase bookkeeping and accumulated position of one encoder.
///
/// `count` wraps like the 16-bit counter it is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderState {
    phase: Phase,
    last_phase: Phase,
    count: i16,
}

impl EncoderState {
    pub const fn new() -> Self {
        Self::with_count(0)
    }

    pub const fn with_count(count: i16) -> Self {
        Self {
            phase: Phase::P00,
            last_phase: Phase::P00,
            count,
        }
    }

    /// Record the transition `last_phase -> phase` and move the counter one step.
    pub fn step(&mut self, phase: Phase, last_phase: Phase) -> Direction {
        let direction = decode(phase, last_phase);
        self.phase = phase;
        self.last_phase = last_phase;
        self.count = self.count.wrapping_add(direction.delta());
        direction
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn last_phase(&self) -> Phase {
        self.last_phase
    }

    #[inline]
    pub fn count(&self) -> i16 {
        self.count
    }
}

/// Both encoders of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Axes {
    pub arm: EncoderState,
    pub motor: EncoderState,
}

impl Axes {
    pub const fn with_counts(arm: i16, motor: i16) -> Self {
        Self {
            arm: EncoderState::with_count(arm),
            motor: EncoderState::with_count(motor),
        }
    }

    pub fn get(&self, axis: Axis) -> &EncoderState {
        match axis {
            Axis::Arm => &self.arm,
            Axis::Motor => &self.motor,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut EncoderState {
        match axis {
            Axis::Arm => &mut self.arm,
            Axis::Motor => &mut self.motor,
        }
    }
}
