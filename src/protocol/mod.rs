// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Telemetry Protocol
//!
//! Fixed 6-byte frames streamed to the host, one per timer tick.
//!
//! ## Modules
//!
//! - [`frame`] - Frame layout and encoding.
//! - [`transmitter`] - Per-tick snapshot, encode, and hand-off to the serial link.

pub mod frame;
pub mod transmitter;

pub use frame::{Frame, FRAME_LEN, SYNC_BYTE};
pub use transmitter::{on_tick, TickAck, Transmit};
