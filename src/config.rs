//! Runtime configuration.
//!
//! Read from environment variables, then overridden by command-line flags.
//!
//! - `TETRIS_STACK_SEED`: RNG seed (default: derived from the clock)
//! - `TETRIS_STACK_QUEUE_CAPACITY`: upcoming pieces kept in the queue (default 5)
//! - `TETRIS_STACK_RESERVE_CAPACITY`: reserve stack size (default 3, `0` disables it)
//! - `TETRIS_STACK_BASIC`: `1` or `true` runs without a reserve stack
//! - `TETRIS_STACK_LOG_PATH`: wire log for the headless JSON mode
//!
//! Values that fail to parse fall back to the default. The reserve stack is
//! kept smaller than the queue: a larger reserve capacity is lowered to
//! `queue - 1`, and a queue of 1 leaves no room for a reserve at all.

use anyhow::{anyhow, Result};

use crate::core::ControllerConfig;
use crate::types::{QUEUE_CAPACITY, RESERVE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub queue_capacity: usize,
    /// `None` runs the queue-only variant.
    pub reserve_capacity: Option<usize>,
    /// Headless runner speaks JSON instead of the numbered menu.
    pub json: bool,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            queue_capacity: QUEUE_CAPACITY,
            reserve_capacity: Some(RESERVE_CAPACITY),
            json: false,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parsed(&lookup, "TETRIS_STACK_SEED") {
            config.seed = seed;
        }
        if let Some(cap) = parsed::<usize>(&lookup, "TETRIS_STACK_QUEUE_CAPACITY") {
            config.queue_capacity = cap.max(1);
        }
        if let Some(cap) = parsed::<usize>(&lookup, "TETRIS_STACK_RESERVE_CAPACITY") {
            config.reserve_capacity = (cap > 0).then_some(cap);
        }
        let basic = lookup("TETRIS_STACK_BASIC")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        if basic {
            config.reserve_capacity = None;
        }
        config.reserve_capacity =
            reserve_below_queue(config.reserve_capacity, config.queue_capacity);
        config.log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        config
    }

    /// Apply command-line flags: `--seed N`, `--basic`, `--json`, `--log PATH`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                "--basic" => self.reserve_capacity = None,
                "--json" => self.json = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            queue_capacity: self.queue_capacity,
            reserve_capacity: self.reserve_capacity,
            seed: self.seed,
        }
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("[config] ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

/// Clamp the reserve capacity to strictly less than the queue capacity.
fn reserve_below_queue(reserve: Option<usize>, queue: usize) -> Option<usize> {
    let cap = reserve?;
    if cap < queue {
        return Some(cap);
    }
    let lowered = queue.saturating_sub(1);
    if lowered == 0 {
        eprintln!(
            "[config] reserve capacity {} needs a queue larger than {}; running without reserve",
            cap, queue
        );
        return None;
    }
    eprintln!(
        "[config] reserve capacity {} is not below queue capacity {}; using {}",
        cap, queue, lowered
    );
    Some(lowered)
}

/// Seed derived from the wall clock, so separate runs differ.
pub fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos as u32) ^ ((nanos >> 32) as u32)
}
