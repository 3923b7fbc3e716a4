// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Gray-code phase of a single quadrature encoder and the direction table.
//!
//! Each phase has exactly one predecessor that counts as a clockwise step:
//!
//! | phase | clockwise predecessor |
//! | ----- | --------------------- |
//! | `00`  | `01` |
//! | `01`  | `11` |
//! | `11`  | `10` |
//! | `10`  | `00` |
//!
//! Every other predecessor, including the phase itself and a two-step jump, decodes as
//! counter-clockwise. There is no "invalid" outcome.

/// Current 2-bit (A, B) reading of one encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phase(u8);

impl Phase {
    pub const P00: Phase = Phase(0b00);
    pub const P01: Phase = Phase(0b01);
    pub const P10: Phase = Phase(0b10);
    pub const P11: Phase = Phase(0b11);

    /// Build a phase from the low two bits of `bits`; higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The only previous phase that makes a transition into `self` clockwise.
    pub const fn clockwise_predecessor(self) -> Phase {
        match self.0 {
            0b00 => Phase::P01,
            0b01 => Phase::P11,
            0b11 => Phase::P10,
            _ => Phase::P00,
        }
    }
}

/// Direction of a single decoded step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Signed counter delta for this step.
    #[inline]
    pub const fn delta(self) -> i16 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Decode the transition `last_phase -> phase`.
#[inline]
pub fn decode(phase: Phase, last_phase: Phase) -> Direction {
    if last_phase == phase.clockwise_predecessor() {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 4] = [Phase::P00, Phase::P01, Phase::P10, Phase::P11];

    #[test]
    fn from_bits_masks_upper_bits() {
        assert_eq!(Phase::from_bits(0b1111_0110), Phase::P10);
        assert_eq!(Phase::from_bits(0b0000_0011).bits(), 0b11);
    }

    #[test]
    fn exactly_one_clockwise_predecessor_per_phase() {
        for phase in ALL {
            let clockwise = ALL
                .iter()
                .filter(|&&last| decode(phase, last) == Direction::Clockwise)
                .count();
            assert_eq!(clockwise, 1, "phase {:02b}", phase.bits());
        }
    }

    #[test]
    fn table_matches_documented_predecessors() {
        assert_eq!(decode(Phase::P00, Phase::P01), Direction::Clockwise);
        assert_eq!(decode(Phase::P01, Phase::P11), Direction::Clockwise);
        assert_eq!(decode(Phase::P11, Phase::P10), Direction::Clockwise);
        assert_eq!(decode(Phase::P10, Phase::P00), Direction::Clockwise);

        assert_eq!(decode(Phase::P00, Phase::P10), Direction::CounterClockwise);
        assert_eq!(decode(Phase::P01, Phase::P00), Direction::CounterClockwise);
        assert_eq!(decode(Phase::P11, Phase::P01), Direction::CounterClockwise);
        assert_eq!(decode(Phase::P10, Phase::P11), Direction::CounterClockwise);
    }

    #[test]
    fn skipped_transition_reads_as_counter_clockwise() {
        // Two-phase jumps flip both bits.
        assert_eq!(decode(Phase::P00, Phase::P11), Direction::CounterClockwise);
        assert_eq!(decode(Phase::P11, Phase::P00), Direction::CounterClockwise);
        assert_eq!(decode(Phase::P01, Phase::P10), Direction::CounterClockwise);
        assert_eq!(decode(Phase::P10, Phase::P01), Direction::CounterClockwise);
    }

    #[test]
    fn unchanged_phase_reads_as_counter_clockwise() {
        for phase in ALL {
            assert_eq!(decode(phase, phase), Direction::CounterClockwise);
        }
    }

    #[test]
    fn deltas() {
        assert_eq!(Direction::Clockwise.delta(), 1);
        assert_eq!(Direction::CounterClockwise.delta(), -1);
    }
}
