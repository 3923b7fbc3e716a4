// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State shared between the polling loop and the tick interrupt.
//!
//! The polling loop is the only writer of the encoder state; the tick handler only takes
//! snapshots. Every access to the 16-bit counters happens inside a critical section, so the
//! interrupt can never observe a half-written count. Critical sections only mask interrupts for a
//! few instructions and never wait, which keeps them usable from the handler itself.
//!
//! The latest raw sample is a single byte and is stored in an atomic outside the critical section,
//! since the loop refreshes it on every iteration.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU8, Ordering};

use critical_section::{CriticalSection, Mutex};

use crate::encoder::{Axes, Sample, SampleLayout};

/// Counters and status bits as seen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub arm_count: i16,
    pub motor_count: i16,
    pub status: u8,
}

/// Process-wide state, constructed once and borrowed by both contexts.
pub struct SharedState {
    layout: SampleLayout,
    axes: Mutex<RefCell<Axes>>,
    latest: AtomicU8,
}

impl SharedState {
    pub const fn new(layout: SampleLayout) -> Self {
        Self::with_counts(layout, 0, 0)
    }

    pub const fn with_counts(layout: SampleLayout, arm: i16, motor: i16) -> Self {
        Self {
            layout,
            axes: Mutex::new(RefCell::new(Axes::with_counts(arm, motor))),
            latest: AtomicU8::new(0),
        }
    }

    #[inline]
    pub fn layout(&self) -> SampleLayout {
        self.layout
    }

    /// Publish the sample taken by the current polling iteration.
    #[inline]
    pub fn record_sample(&self, sample: Sample) {
        self.latest.store(sample.bits(), Ordering::Relaxed);
    }

    #[inline]
    pub fn latest_sample(&self) -> Sample {
        Sample::new(self.latest.load(Ordering::Relaxed))
    }

    /// Mutate the encoder state with interrupts masked.
    ///
    /// Keep `f` short: the tick interrupt is held off until it returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut Axes) -> R) -> R {
        critical_section::with(|cs| {
            let mut axes = self.axes.borrow_ref_mut(cs);
            f(&mut *axes)
        })
    }

    /// Copy of both encoder states.
    pub fn axes(&self) -> Axes {
        critical_section::with(|cs| *self.axes.borrow_ref(cs))
    }

    /// Snapshot for a caller that already holds a critical section.
    pub fn snapshot_in(&self, cs: CriticalSection<'_>) -> Snapshot {
        let axes = self.axes.borrow_ref(cs);
        Snapshot {
            arm_count: axes.arm.count(),
            motor_count: axes.motor.count(),
            status: self.layout.status(self.latest_sample()),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        critical_section::with(|cs| self.snapshot_in(cs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Phase;

    #[test]
    fn snapshot_masks_status_bits() {
        let shared = SharedState::with_counts(SampleLayout::DEFAULT, 7, -7);
        shared.record_sample(Sample::new(0b11_0110));

        let snap = shared.snapshot();
        assert_eq!(snap.arm_count, 7);
        assert_eq!(snap.motor_count, -7);
        assert_eq!(snap.status, 0b10);
    }

    #[test]
    fn update_is_visible_to_snapshot() {
        let shared = SharedState::new(SampleLayout::DEFAULT);
        let dir = shared.update(|axes| axes.arm.step(Phase::P10, Phase::P00));

        assert_eq!(dir.delta(), 1);
        assert_eq!(shared.snapshot().arm_count, 1);
        assert_eq!(shared.axes().arm.phase(), Phase::P10);
    }

    #[test]
    fn snapshot_inside_existing_critical_section() {
        let shared = SharedState::with_counts(SampleLayout::DEFAULT, -1, 2);
        let snap = critical_section::with(|cs| shared.snapshot_in(cs));
        assert_eq!((snap.arm_count, snap.motor_count), (-1, 2));
    }
}
