// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Raw input sample and the bit layout agreed with the board wiring.
//!
//! With the default layout a sample looks like:
//!
//! ```text
//!  bit  7 6 | 5 4 | 3 2 | 1 0
//!       --- | arm | mot | status
//!           | A B | A B |
//! ```

use super::phase::Phase;

/// One reading of every wired input pin, taken in a single port read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample(u8);

impl Sample {
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if any bit differs from `prev`.
    #[inline]
    pub const fn changed_from(self, prev: Sample) -> bool {
        (self.0 ^ prev.0) != 0
    }
}

/// Encoder axes wired to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Arm,
    Motor,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Arm, Axis::Motor];
}

/// Where each axis's 2-bit phase and the reported status bits sit inside a [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLayout {
    /// Right shift that brings the arm phase down to bits 1..0.
    pub arm_shift: u8,
    /// Right shift that brings the motor phase down to bits 1..0.
    pub motor_shift: u8,
    /// Bits copied into the frame's status byte.
    pub status_mask: u8,
}

impl SampleLayout {
    /// Arm on bits 5..4, motor on bits 3..2, status on bits 1..0.
    pub const DEFAULT: SampleLayout = SampleLayout {
        arm_shift: 4,
        motor_shift: 2,
        status_mask: 0b11,
    };

    /// The motor phase read from bits 1..0, sharing them with the status field.
    ///
    /// This is what `data & 0b1100 >> 2` evaluates to under C precedence. It is kept as an
    /// explicit opt-in for reproducing recorded data from the old PIC32 board.
    pub const ALIASED_MOTOR: SampleLayout = SampleLayout {
        arm_shift: 4,
        motor_shift: 0,
        status_mask: 0b11,
    };

    #[inline]
    pub const fn shift(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Arm => self.arm_shift,
            Axis::Motor => self.motor_shift,
        }
    }

    /// Mask covering the two phase bits of `axis`, or 0 if the shift is out of range.
    pub const fn field_mask(&self, axis: Axis) -> u8 {
        let shift = self.shift(axis);
        if shift > 6 {
            0
        } else {
            0b11 << shift
        }
    }

    /// Extract the phase of `axis` from `sample`.
    #[inline]
    pub const fn phase(&self, sample: Sample, axis: Axis) -> Phase {
        Phase::from_bits(sample.0 >> (self.shift(axis) & 7))
    }

    /// Status bits as they appear in the frame.
    #[inline]
    pub const fn status(&self, sample: Sample) -> u8 {
        sample.0 & self.status_mask
    }
}

impl Default for SampleLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Digital-input sampling interface.
///
/// Implementations must read every wired pin at once so that a sample never mixes two instants.
pub trait SampleSource {
    fn sample(&mut self) -> Sample;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_splits_fields() {
        let layout = SampleLayout::DEFAULT;
        let sample = Sample::new(0b10_01_11);

        assert_eq!(layout.phase(sample, Axis::Arm), Phase::P10);
        assert_eq!(layout.phase(sample, Axis::Motor), Phase::P01);
        assert_eq!(layout.status(sample), 0b11);
    }

    #[test]
    fn arm_phase_ignores_unwired_high_bits() {
        let layout = SampleLayout::DEFAULT;
        assert_eq!(layout.phase(Sample::new(0b1101_0000), Axis::Arm), Phase::P01);
    }

    #[test]
    fn aliased_motor_reads_status_bits() {
        let layout = SampleLayout::ALIASED_MOTOR;
        let sample = Sample::new(0b00_11_10);

        assert_eq!(layout.phase(sample, Axis::Motor), Phase::P10);
        assert_eq!(layout.phase(sample, Axis::Arm), Phase::P00);
    }

    #[test]
    fn field_masks() {
        let layout = SampleLayout::DEFAULT;
        assert_eq!(layout.field_mask(Axis::Arm), 0b11_0000);
        assert_eq!(layout.field_mask(Axis::Motor), 0b00_1100);

        let bad = SampleLayout {
            arm_shift: 7,
            ..SampleLayout::DEFAULT
        };
        assert_eq!(bad.field_mask(Axis::Arm), 0);
    }

    #[test]
    fn change_detection_is_bitwise() {
        let a = Sample::new(0b0010_0001);
        assert!(!a.changed_from(a));
        assert!(a.changed_from(Sample::new(0b0010_0000)));
        assert!(Sample::new(0x80).changed_from(Sample::default()));
    }
}
