// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! - [`Usart`] is the blocking debug terminal used for boot logging. Only call it from `main`,
//!   never from the polling loop or an interrupt.
//! - [`FrameLink`] is the non-blocking telemetry link. It keeps one frame, pushes bytes while the
//!   data register accepts them, and drains the rest from the USART1 TXE interrupt.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    pac,
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

use crate::protocol::{Transmit, FRAME_LEN};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }

    pub fn print_hex_u8(&mut self, n: u8) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        self.write_str("0x");
        self.write_byte(HEX[((n >> 4) & 0xF) as usize]);
        self.write_byte(HEX[(n & 0xF) as usize]);
    }

    pub fn print_u32(&mut self, mut n: u32) {
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        if n == 0 {
            self.write_byte(b'0');
            return;
        }
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.write_byte(b);
        }
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// Telemetry link on USART1.
///
/// Handing it a new frame overwrites whatever is left of the previous one; the host resyncs on
/// the next sync byte.
pub struct FrameLink {
    tx: Tx<pac::USART1>,
    buf: [u8; FRAME_LEN],
    head: usize,
    len: usize,
}

impl FrameLink {
    pub fn new<PINS: Pins<pac::USART1>>(serial: Serial<pac::USART1, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self {
            tx,
            buf: [0; FRAME_LEN],
            head: 0,
            len: 0,
        }
    }

    /// Call from the USART1 interrupt.
    #[inline]
    pub fn on_txe(&mut self) {
        self.pump();
    }

    fn pump(&mut self) {
        while self.head < self.len {
            match self.tx.write(self.buf[self.head]) {
                Ok(()) => self.head += 1,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(_)) => self.head = self.len,
            }
        }
        set_txe_interrupt(self.head < self.len);
    }
}

impl Transmit for FrameLink {
    fn transmit(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(self.buf.len());
        self.buf[..n].copy_from_slice(&bytes[..n]);
        self.head = 0;
        self.len = n;
        self.pump();
    }
}

/// TXEIE stays set only while bytes are pending, otherwise the empty data register would keep
/// the interrupt firing.
fn set_txe_interrupt(enabled: bool) {
    let usart = unsafe { &*pac::USART1::ptr() };
    usart.cr1.modify(|_, w| w.txeie().bit(enabled));
}
