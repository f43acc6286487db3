//! Game configuration
//!
//! Defaults match the reference game. [`GameConfig::from_env`] reads
//! overrides from `BLOCKFALL_*` environment variables; anything unparseable or
//! out of range is logged and replaced by the default.

use std::str::FromStr;

use log::warn;

use crate::core::FallSpeed;
use crate::types::{ScoringPolicy, BOARD_HEIGHT, BOARD_WIDTH};

/// Accepted board widths
pub const WIDTH_RANGE: std::ops::RangeInclusive<u8> = 4..=40;

/// Accepted board heights
pub const HEIGHT_RANGE: std::ops::RangeInclusive<u8> = 4..=60;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub scoring: ScoringPolicy,
    pub fall_speed: FallSpeed,
    /// Fixed seed for the piece sequence; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            scoring: ScoringPolicy::default(),
            fall_speed: FallSpeed::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `BLOCKFALL_WIDTH`, `BLOCKFALL_HEIGHT`: board size
    /// - `BLOCKFALL_SCORING`: `linear` or `exponential`
    /// - `BLOCKFALL_SEED`: u64 seed for a reproducible piece sequence
    /// - `BLOCKFALL_BASE_FALL_MS`, `BLOCKFALL_FALL_FLOOR_MS`: gravity curve
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` is this over the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = parse_in_range(&lookup, "BLOCKFALL_WIDTH", WIDTH_RANGE).unwrap_or(defaults.width);
        let height =
            parse_in_range(&lookup, "BLOCKFALL_HEIGHT", HEIGHT_RANGE).unwrap_or(defaults.height);

        let scoring = lookup("BLOCKFALL_SCORING")
            .and_then(|raw| {
                let parsed = ScoringPolicy::from_str(&raw);
                if parsed.is_none() {
                    warn!("ignoring BLOCKFALL_SCORING={raw:?}: expected linear or exponential");
                }
                parsed
            })
            .unwrap_or(defaults.scoring);

        let seed = parse(&lookup, "BLOCKFALL_SEED");

        let mut fall_speed = defaults.fall_speed;
        if let Some(base) = parse_in_range(&lookup, "BLOCKFALL_BASE_FALL_MS", 1..=10_000) {
            fall_speed.base_ms = base;
        }
        if let Some(floor) = parse_in_range(&lookup, "BLOCKFALL_FALL_FLOOR_MS", 1..=10_000) {
            fall_speed.floor_ms = floor;
        }
        if fall_speed.floor_ms > fall_speed.base_ms {
            warn!(
                "fall floor {}ms exceeds base {}ms; clamping floor to base",
                fall_speed.floor_ms, fall_speed.base_ms
            );
            fall_speed.floor_ms = fall_speed.base_ms;
        }

        Self {
            width,
            height,
            scoring,
            fall_speed,
            seed,
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}

fn parse_in_range<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    range: std::ops::RangeInclusive<T>,
) -> Option<T>
where
    T: FromStr + PartialOrd + std::fmt::Debug,
{
    let value = parse(lookup, key)?;
    if range.contains(&value) {
        Some(value)
    } else {
        warn!("ignoring {key}={value:?}: outside {range:?}");
        None
    }
}
