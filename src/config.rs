// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time firmware configuration.
//!
//! The firmware is configured by editing [`CONFIG`] (or enabling the `per-axis-decode` feature)
//! and reflashing. [`Config::validate`] runs once at boot before any interrupt is enabled.

use core::fmt;

use crate::encoder::{Axis, DecodePolicy, SampleLayout};

/// Configuration flashed into the firmware.
pub const CONFIG: Config = Config::DEFAULT;

const DEFAULT_POLICY: DecodePolicy = if cfg!(feature = "per-axis-decode") {
    DecodePolicy::PerAxisChange
} else {
    DecodePolicy::EveryChange
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Telemetry link (USART1) baud rate.
    pub link_baud: u32,
    /// Debug terminal (USART3) baud rate.
    pub console_baud: u32,
    /// Frames per second.
    pub tick_hz: u32,
    /// Ticks between LED toggles.
    pub heartbeat_ticks: u32,
    pub layout: SampleLayout,
    pub decode_policy: DecodePolicy,
}

impl Config {
    pub const DEFAULT: Config = Config {
        link_baud: 2_000_000,
        console_baud: 115_200,
        tick_hz: 1_000,
        heartbeat_ticks: 500,
        layout: SampleLayout::DEFAULT,
        decode_policy: DEFAULT_POLICY,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link_baud == 0 || self.console_baud == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.heartbeat_ticks == 0 {
            return Err(ConfigError::ZeroHeartbeat);
        }
        for axis in Axis::ALL {
            if self.layout.field_mask(axis) == 0 {
                return Err(ConfigError::FieldOutOfRange(axis));
            }
        }
        if self.layout.field_mask(Axis::Arm) & self.layout.field_mask(Axis::Motor) != 0 {
            return Err(ConfigError::AxesOverlap);
        }
        Ok(())
    }

    /// Auto-reload value for a 32-bit timer counting at `timer_clk_hz` with prescaler 0.
    ///
    /// The shortest representable period is two timer clocks (reload 1).
    pub fn timer_reload(&self, timer_clk_hz: u32) -> Result<u32, ConfigError> {
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let period = timer_clk_hz / self.tick_hz;
        if period < 2 {
            return Err(ConfigError::TickTooFast {
                timer_clk_hz,
                tick_hz: self.tick_hz,
            });
        }
        Ok(period - 1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration rejected at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBaudRate,
    ZeroTickRate,
    ZeroHeartbeat,
    /// The axis's phase bits do not fit in the 8-bit sample.
    FieldOutOfRange(Axis),
    /// Arm and motor phase bits share a sample bit.
    AxesOverlap,
    /// Tick rate shorter than two timer clocks.
    TickTooFast { timer_clk_hz: u32, tick_hz: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroBaudRate => write!(f, "baud rate must be non-zero"),
            ConfigError::ZeroTickRate => write!(f, "tick rate must be non-zero"),
            ConfigError::ZeroHeartbeat => write!(f, "heartbeat period must be non-zero"),
            ConfigError::FieldOutOfRange(axis) => {
                write!(f, "{:?} phase bits do not fit in the sample", axis)
            }
            ConfigError::AxesOverlap => write!(f, "arm and motor phase bits overlap"),
            ConfigError::TickTooFast {
                timer_clk_hz,
                tick_hz,
            } => write!(
                f,
                "tick rate {} Hz too fast for a {} Hz timer clock",
                tick_hz, timer_clk_hz
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CONFIG.validate(), Ok(()));
        assert_eq!(CONFIG.layout, SampleLayout::DEFAULT);
    }

    #[cfg(not(feature = "per-axis-decode"))]
    #[test]
    fn default_policy_decodes_every_change() {
        assert_eq!(CONFIG.decode_policy, DecodePolicy::EveryChange);
    }

    #[cfg(feature = "per-axis-decode")]
    #[test]
    fn feature_selects_per_axis_policy() {
        assert_eq!(CONFIG.decode_policy, DecodePolicy::PerAxisChange);
    }

    #[test]
    fn aliased_layout_is_accepted() {
        let cfg = Config {
            layout: SampleLayout::ALIASED_MOTOR,
            ..Config::DEFAULT
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_rates() {
        let cfg = Config {
            link_baud: 0,
            ..Config::DEFAULT
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroBaudRate));

        let cfg = Config {
            tick_hz: 0,
            ..Config::DEFAULT
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTickRate));
        assert_eq!(cfg.timer_reload(108_000_000), Err(ConfigError::ZeroTickRate));

        let cfg = Config {
            heartbeat_ticks: 0,
            ..Config::DEFAULT
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroHeartbeat));
    }

    #[test]
    fn rejects_bad_layouts() {
        let cfg = Config {
            layout: SampleLayout {
                arm_shift: 3,
                ..SampleLayout::DEFAULT
            },
            ..Config::DEFAULT
        };
        assert_eq!(cfg.validate(), Err(ConfigError::AxesOverlap));

        let cfg = Config {
            layout: SampleLayout {
                motor_shift: 7,
                ..SampleLayout::DEFAULT
            },
            ..Config::DEFAULT
        };
        assert_eq!(cfg.validate(), Err(ConfigError::FieldOutOfRange(Axis::Motor)));
    }

    #[test]
    fn reload_for_default_tick() {
        // TIM2 runs at 108 MHz with SYSCLK at 216 MHz.
        assert_eq!(CONFIG.timer_reload(108_000_000), Ok(107_999));
    }

    #[test]
    fn reload_at_shortest_period() {
        let cfg = Config {
            tick_hz: 54_000_000,
            ..Config::DEFAULT
        };
        assert_eq!(cfg.timer_reload(108_000_000), Ok(1));

        let cfg = Config {
            tick_hz: 54_000_001,
            ..Config::DEFAULT
        };
        assert_eq!(
            cfg.timer_reload(108_000_000),
            Err(ConfigError::TickTooFast {
                timer_clk_hz: 108_000_000,
                tick_hz: 54_000_001
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::FieldOutOfRange(Axis::Arm).to_string(),
            "Arm phase bits do not fit in the sample"
        );
        assert_eq!(
            ConfigError::TickTooFast {
                timer_clk_hz: 16,
                tick_hz: 10
            }
            .to_string(),
            "tick rate 10 Hz too fast for a 16 Hz timer clock"
        );
    }
}
