//! Host settings read from the environment. A `.env` file is loaded first.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tankarena_core::constants::TICK_RATE;
use tankarena_sim::SimConfig;

pub const DEFAULT_MAP_PATH: &str = "resources/map.txt";
pub const DEFAULT_SEED: u64 = 42;

pub fn map_path() -> PathBuf {
    env::var("TANKARENA_MAP")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MAP_PATH))
}

pub fn seed() -> u64 {
    parse_or(env::var("TANKARENA_SEED").ok(), DEFAULT_SEED)
}

pub fn tick_hz() -> u32 {
    let hz = parse_or(env::var("TANKARENA_TICK_HZ").ok(), TICK_RATE);
    if hz == 0 {
        TICK_RATE
    } else {
        hz
    }
}

/// Settings for one game loop thread.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub sim: SimConfig,
    pub tick_interval: Duration,
}

impl LoopConfig {
    pub fn from_env() -> Self {
        Self {
            sim: SimConfig { seed: seed() },
            tick_interval: tick_interval(tick_hz()),
        }
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_interval: tick_interval(TICK_RATE),
        }
    }
}

/// Duration of one tick at `hz` ticks per second.
pub fn tick_interval(hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1)))
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
