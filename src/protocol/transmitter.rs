// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Packet transmitter run from the periodic tick interrupt.
//!
//! Each tick snapshots whatever the polling loop has reached, encodes one frame, hands it to the
//! link, and acknowledges the timer. Frames are never queued or retried: if the link is still busy
//! with an older frame, the link decides what happens to it.

use super::frame::Frame;
use crate::shared::SharedState;

/// Byte-stream transmit interface of a serial channel.
///
/// Must not block; the caller runs in interrupt context.
pub trait Transmit {
    fn transmit(&mut self, bytes: &[u8]);
}

/// Clears the pending flag of the interrupt that triggered the tick.
pub trait TickAck {
    fn acknowledge(&mut self);
}

/// Handle one timer tick.
///
/// Runs entirely with interrupts masked and only touches the state it is handed.
pub fn on_tick<L, T>(shared: &SharedState, link: &mut L, timer: &mut T) -> Frame
where
    L: Transmit + ?Sized,
    T: TickAck + ?Sized,
{
    critical_section::with(|cs| {
        let frame = Frame::from(shared.snapshot_in(cs));
        link.transmit(&frame.encode());
        timer.acknowledge();
        frame
    })
}
