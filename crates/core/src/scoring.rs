//! Scoring module - line-clear points, level progression, drop cadence
//!
//! Points for one landing are `lines * 100 * level`, the level is
//! `lines / 10 + 1`, and the suggested gravity interval shrinks by 100ms
//! per level down to a 100ms floor. The interval is advisory: the core
//! holds no timer, the external driver derives its cadence from it.

use blockfall_types::{
    BASE_DROP_MS, LEVEL_SPEEDUP_MS, LINES_PER_LEVEL, MIN_DROP_MS, POINTS_PER_LINE,
};

/// Points awarded for clearing `lines` rows in one landing at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines * POINTS_PER_LINE * level
}

/// Level reached after `total_lines` cleared; starts at 1
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Suggested interval between gravity ticks at `level` (milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(LEVEL_SPEEDUP_MS))
        .max(MIN_DROP_MS)
}
