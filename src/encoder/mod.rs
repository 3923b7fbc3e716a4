// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Quadrature Decoding
//!
//! Everything between the raw input sample and the position counters.
//!
//! ## Modules
//!
//! - [`sample`] - Raw pin bitfield and the bit layout of each axis inside it.
//! - [`phase`] - 2-bit Gray-code phase and the transition table.
//! - [`state`] - Per-axis phase bookkeeping and signed position counter.
//! - [`poller`] - One iteration of the polling loop, with change detection.

pub mod phase;
pub mod poller;
pub mod sample;
pub mod state;

pub use phase::{Direction, Phase};
pub use poller::{DecodePolicy, Poller};
pub use sample::{Axis, Sample, SampleLayout, SampleSource};
pub use state::{Axes, EncoderState};
