// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Pendulum Telemetry Firmware
//!
//! Firmware for the inverted pendulum rig, written in Rust, targeting an STM32F767 MCU. It decodes
//! two incremental quadrature encoders (the pendulum arm and the drive motor) by polling their
//! input pins, and streams both position counters to the host as fixed 6-byte frames from a
//! periodic timer interrupt.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`encoder`] | Sample layout, Gray-code phase decoding, and the polling step |
//! | [`shared`] | State shared between the polling loop and the tick interrupt |
//! | [`protocol`] | Telemetry frame layout and the per-tick transmitter |
//! | [`config`] | Compile-time configuration and its validation |
//! | [`heartbeat`] | Divider for the status LED blink |
//! | `hw` | MCU-level wrappers around GPIO, USART, and TIM2 (target builds only) |
//!
//! ## Getting Started
//!
//! Run the host unit tests:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod encoder;
pub mod heartbeat;
pub mod protocol;
pub mod shared;

#[cfg(target_os = "none")]
pub mod hw;
