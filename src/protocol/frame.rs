// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Telemetry frame sent to the host.
//!
//! | offset | field |
//! | ------ | ----- |
//! | 0 | sync byte `0x0A` |
//! | 1..=2 | arm count, big-endian two's complement |
//! | 3..=4 | motor count, big-endian two's complement |
//! | 5 | status bits from the raw sample |
//!
//! There is no length, checksum, or escaping. A receiver resynchronizes by scanning for the sync
//! byte and taking the next five bytes.

use crate::shared::Snapshot;

/// Sync byte for the protocol.
pub const SYNC_BYTE: u8 = 0x0A;

/// Bytes per frame, sync byte included.
pub const FRAME_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub arm_count: i16,
    pub motor_count: i16,
    pub status: u8,
}

impl Frame {
    pub const fn new(arm_count: i16, motor_count: i16, status: u8) -> Self {
        Self {
            arm_count,
            motor_count,
            status,
        }
    }

    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let arm = self.arm_count.to_be_bytes();
        let motor = self.motor_count.to_be_bytes();
        [SYNC_BYTE, arm[0], arm[1], motor[0], motor[1], self.status]
    }
}

impl From<Snapshot> for Frame {
    fn from(snap: Snapshot) -> Self {
        Self::new(snap.arm_count, snap.motor_count, snap.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reference_frame() {
        let frame = Frame::new(0x1234, -2, 0b10);
        assert_eq!(frame.encode(), [0x0A, 0x12, 0x34, 0xFF, 0xFE, 0x02]);
    }

    #[test]
    fn encodes_count_extremes() {
        assert_eq!(
            Frame::new(i16::MIN, i16::MAX, 0).encode(),
            [SYNC_BYTE, 0x80, 0x00, 0x7F, 0xFF, 0x00]
        );
        assert_eq!(
            Frame::new(-1, 0, 0b11).encode(),
            [SYNC_BYTE, 0xFF, 0xFF, 0x00, 0x00, 0x03]
        );
    }

    #[test]
    fn from_snapshot_keeps_fields() {
        let snap = Snapshot {
            arm_count: -300,
            motor_count: 300,
            status: 1,
        };
        assert_eq!(Frame::from(snap), Frame::new(-300, 300, 1));
    }
}
