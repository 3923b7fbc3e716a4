// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One iteration of the input polling loop.
//!
//! The loop compares each sample against the previous one with a single XOR. Only a change runs
//! the decoder, and then the policy decides which axes see the transition.

use core::fmt;

use super::sample::{Axis, Sample, SampleLayout, SampleSource};
use crate::shared::SharedState;

/// Which axes are decoded when the combined sample changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Decode both axes on any change of the sample, including a change in the status bits.
    ///
    /// An axis whose own bits did not move is decoded against an identical previous phase and
    /// therefore steps down by one. This matches the counters produced by the PIC32 board.
    EveryChange,
    /// Decode an axis only when its own two bits changed.
    PerAxisChange,
}

impl DecodePolicy {
    fn decodes(self, layout: &SampleLayout, axis: Axis, prev: Sample, sample: Sample) -> bool {
        match self {
            DecodePolicy::EveryChange => true,
            DecodePolicy::PerAxisChange => layout.phase(prev, axis) != layout.phase(sample, axis),
        }
    }
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodePolicy::EveryChange => write!(f, "every-change"),
            DecodePolicy::PerAxisChange => write!(f, "per-axis-change"),
        }
    }
}

/// Polling-side decoder: remembers the previous sample and feeds transitions into the shared
/// encoder state.
pub struct Poller {
    prev: Sample,
    policy: DecodePolicy,
}

impl Poller {
    /// The previous sample starts out as all zeros, so a non-zero first reading is decoded.
    pub const fn new(policy: DecodePolicy) -> Self {
        Self {
            prev: Sample::new(0),
            policy,
        }
    }

    /// Process one sample. Returns `true` if the decoder ran.
    pub fn step(&mut self, sample: Sample, shared: &SharedState) -> bool {
        shared.record_sample(sample);

        if !sample.changed_from(self.prev) {
            return false;
        }

        let layout = shared.layout();
        let prev = self.prev;
        let policy = self.policy;

        shared.update(|axes| {
            for axis in Axis::ALL {
                if policy.decodes(&layout, axis, prev, sample) {
                    axes.get_mut(axis)
                        .step(layout.phase(sample, axis), layout.phase(prev, axis));
                }
            }
        });

        self.prev = sample;
        true
    }

    /// Poll `source` forever.
    pub fn run<S: SampleSource>(&mut self, source: &mut S, shared: &SharedState) -> ! {
        loop {
            let sample = source.sample();
            self.step(sample, shared);
        }
    }
}
