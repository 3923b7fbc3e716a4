// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tick divider for the status LED.

pub struct Heartbeat {
    period: u32,
    elapsed: u32,
}

impl Heartbeat {
    /// Fire once every `period` ticks. A period of 0 never fires.
    pub const fn new(period: u32) -> Self {
        Self { period, elapsed: 0 }
    }

    /// Count one tick. Returns `true` when the LED should toggle.
    pub fn tick(&mut self) -> bool {
        if self.period == 0 {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}
