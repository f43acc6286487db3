//! Scoring module - line-clear points and gravity speed-up
//!
//! Two policies are supported:
//! - Linear: `100 * lines`, gravity stays at the base interval.
//! - Exponential: `100 * 2^(lines - 1)`, and after every score change the
//!   fall interval is recomputed as
//!   `max(floor, base - (score / 1000) * step)`.
//!
//! Since the score only ever grows, the exponential interval never increases
//! within a session.

use crate::types::{
    ScoringPolicy, BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, LINE_SCORE, SCORE_PER_SPEED_STEP,
};

/// Gravity speed curve parameters (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallSpeed {
    pub base_ms: u32,
    pub floor_ms: u32,
    pub step_ms: u32,
    pub score_per_step: u32,
}

impl Default for FallSpeed {
    fn default() -> Self {
        Self {
            base_ms: BASE_FALL_MS,
            floor_ms: FALL_FLOOR_MS,
            step_ms: FALL_STEP_MS,
            score_per_step: SCORE_PER_SPEED_STEP,
        }
    }
}

/// Points awarded for clearing `lines` rows at once
pub fn calculate_line_score(policy: ScoringPolicy, lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    match policy {
        ScoringPolicy::Linear => LINE_SCORE.saturating_mul(lines as u32),
        ScoringPolicy::Exponential => {
            let bonus = 1u32.checked_shl(lines as u32 - 1).unwrap_or(u32::MAX);
            LINE_SCORE.saturating_mul(bonus)
        }
    }
}

/// Fall interval for the given score
pub fn fall_interval_ms(policy: ScoringPolicy, score: u32, speed: &FallSpeed) -> u32 {
    match policy {
        ScoringPolicy::Linear => speed.base_ms,
        ScoringPolicy::Exponential => {
            let steps = score / speed.score_per_step.max(1);
            let reduction = steps.saturating_mul(speed.step_ms);
            speed
                .base_ms
                .saturating_sub(reduction)
                .max(speed.floor_ms)
        }
    }
}
