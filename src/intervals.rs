//! Period-of-day interval classification
//!
//! Maps clock hours onto a named period of the day (day/evening/night by
//! default) and computes where the current period ends. Intervals are
//! half-open `[start_hour, end_hour)`; `start == end` means a full
//! 24-hour interval and `start > end` wraps past midnight (e.g. night
//! 23→7). A well-formed table covers every hour exactly once, but the
//! classifier itself only applies first-match order and never validates.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Label returned when no configured interval covers the hour.
pub const UNKNOWN_LABEL: &str = "unknown";

/// A named hour range on the 24h clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInterval {
    pub label: String,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DayInterval {
    pub fn new(label: impl Into<String>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            label: label.into(),
            start_hour,
            end_hour,
        }
    }
}

/// The standard day/evening/night partition of the clock.
pub fn default_intervals() -> Vec<DayInterval> {
    vec![
        DayInterval::new("day", 7, 15),
        DayInterval::new("evening", 15, 23),
        DayInterval::new("night", 23, 7),
    ]
}

/// Find the label for a clock hour, first match wins.
///
/// With `use_custom_intervals` the label is the interval's literal clock
/// range (`"07:00:00-15:00:00"`) instead of its name, so user-defined
/// tables self-describe in the output. A full-day interval labels as
/// `"24h"` (named) or `"00:00:00-24:00:00"` (custom).
pub fn interval_label(hour: u32, intervals: &[DayInterval], use_custom_intervals: bool) -> String {
    for iv in intervals {
        if iv.start_hour < iv.end_hour {
            if iv.start_hour <= hour && hour < iv.end_hour {
                if use_custom_intervals {
                    return format!("{:02}:00:00-{:02}:00:00", iv.start_hour, iv.end_hour);
                }
                return iv.label.clone();
            }
        } else if iv.start_hour == iv.end_hour {
            // Full 24-hour interval matches any hour.
            if use_custom_intervals {
                return "00:00:00-24:00:00".to_string();
            }
            return "24h".to_string();
        } else if hour >= iv.start_hour || hour < iv.end_hour {
            if use_custom_intervals {
                return format!("{:02}:00:00-{:02}:00:00", iv.start_hour, iv.end_hour);
            }
            return iv.label.clone();
        }
    }
    error!("no configured interval covers hour {hour}, check the interval table");
    UNKNOWN_LABEL.to_string()
}

/// Compute when the interval containing `current_time` ends, projected
/// onto the correct calendar day.
///
/// Always returns a time strictly after `current_time`; the generator
/// walks this boundary in a loop and a non-advancing result would never
/// terminate. If the table covers no interval for the hour, the cursor
/// is advanced by a fixed eight hours so a malformed table degrades to
/// coarse samples instead of hanging.
pub fn next_interval_end(current_time: TimeDelta, intervals: &[DayInterval]) -> TimeDelta {
    let total = current_time.num_seconds();
    let hour = ((total / 3600) % 24) as u32;
    let today = TimeDelta::days(total / 86_400);

    for iv in intervals {
        if iv.start_hour < iv.end_hour {
            if iv.start_hour <= hour && hour < iv.end_hour {
                let mut interval_end = today + TimeDelta::hours(iv.end_hour as i64);
                if interval_end <= current_time {
                    interval_end = interval_end + TimeDelta::days(1);
                }
                return interval_end;
            }
        } else if iv.start_hour == iv.end_hour {
            // Full-day interval always ends exactly 24h later.
            return current_time + TimeDelta::days(1);
        } else if hour >= iv.start_hour || hour < iv.end_hour {
            let mut interval_end = if hour >= iv.start_hour {
                // Wraparound interval entered before midnight ends on the next day.
                today + TimeDelta::days(1) + TimeDelta::hours(iv.end_hour as i64)
            } else {
                today + TimeDelta::hours(iv.end_hour as i64)
            };
            if interval_end <= current_time {
                interval_end = interval_end + TimeDelta::days(1);
            }
            return interval_end;
        }
    }

    warn!(
        "no interval end found at {}s, advancing cursor by 8h",
        total
    );
    current_time + TimeDelta::hours(8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_label_first_match_order() {
        let ivs = default_intervals();
        assert_eq!(interval_label(7, &ivs, false), "day");
        assert_eq!(interval_label(14, &ivs, false), "day");
        assert_eq!(interval_label(15, &ivs, false), "evening");
        assert_eq!(interval_label(22, &ivs, false), "evening");
        assert_eq!(interval_label(23, &ivs, false), "night");
        assert_eq!(interval_label(3, &ivs, false), "night");
    }

    #[test]
    fn test_label_custom_interval_format() {
        let ivs = default_intervals();
        assert_eq!(interval_label(8, &ivs, true), "07:00:00-15:00:00");
        assert_eq!(interval_label(2, &ivs, true), "23:00:00-07:00:00");

        let full_day = vec![DayInterval::new("all", 0, 0)];
        assert_eq!(interval_label(13, &full_day, false), "24h");
        assert_eq!(interval_label(13, &full_day, true), "00:00:00-24:00:00");
    }

    #[test]
    fn test_label_uncovered_hour_is_unknown() {
        let gappy = vec![DayInterval::new("morning", 6, 12)];
        assert_eq!(interval_label(15, &gappy, false), UNKNOWN_LABEL);
    }

    #[test]
    fn test_next_end_plain_interval() {
        let ivs = default_intervals();
        // 08:53:47 on day 0 is "day", which ends at 15:00.
        let t = TimeDelta::seconds(8 * 3600 + 53 * 60 + 47);
        assert_eq!(next_interval_end(t, &ivs), TimeDelta::hours(15));
        // Same hour on day 2 projects onto day 2.
        let t2 = t + TimeDelta::days(2);
        assert_eq!(
            next_interval_end(t2, &ivs),
            TimeDelta::days(2) + TimeDelta::hours(15)
        );
    }

    #[test]
    fn test_next_end_wraparound_before_and_after_midnight() {
        let ivs = default_intervals();
        // 23:30 day 0: night runs to 07:00 on day 1.
        let before = TimeDelta::hours(23) + TimeDelta::minutes(30);
        assert_eq!(
            next_interval_end(before, &ivs),
            TimeDelta::days(1) + TimeDelta::hours(7)
        );
        // 02:00 day 1: still night, ends 07:00 the same day.
        let after = TimeDelta::days(1) + TimeDelta::hours(2);
        assert_eq!(
            next_interval_end(after, &ivs),
            TimeDelta::days(1) + TimeDelta::hours(7)
        );
    }

    #[test]
    fn test_next_end_full_day_interval() {
        let full_day = vec![DayInterval::new("all", 5, 5)];
        let t = TimeDelta::hours(30);
        assert_eq!(next_interval_end(t, &full_day), t + TimeDelta::days(1));
    }

    #[test]
    fn test_next_end_exact_boundary_advances() {
        let ivs = default_intervals();
        // Exactly 15:00 is already "evening", must return 23:00 not 15:00.
        let t = TimeDelta::hours(15);
        assert_eq!(next_interval_end(t, &ivs), TimeDelta::hours(23));
    }

    #[test]
    fn test_next_end_always_advances_random_tables() {
        // Termination property: the generator loops on this boundary, so
        // next_interval_end(t) > t must hold for arbitrary times and
        // arbitrary (even degenerate) interval tables.
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let n_intervals = rng.gen_range(0..4);
            let intervals: Vec<DayInterval> = (0..n_intervals)
                .map(|i| {
                    DayInterval::new(
                        format!("iv{i}"),
                        rng.gen_range(0..24),
                        rng.gen_range(0..24),
                    )
                })
                .collect();
            let t = TimeDelta::seconds(rng.gen_range(0..10 * 86_400));
            let end = next_interval_end(t, &intervals);
            assert!(
                end > t,
                "next_interval_end did not advance: t={}s end={}s table={:?}",
                t.num_seconds(),
                end.num_seconds(),
                intervals
            );
        }
    }
}
