//! Session counters and human-readable formatting
//!
//! Counters accumulate for the life of the page. Replaying after a win keeps
//! adding to the same totals; nothing here ever resets.

use serde::{Deserialize, Serialize};

/// Cumulative session statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    /// Tickets played
    pub plays: u64,
    /// Plays where at least three base slots matched
    pub three_number_matches: u64,
    /// Plays where at least four base slots matched
    pub four_number_matches: u64,
    /// Plays where all five base slots matched
    pub five_number_matches: u64,
    /// Celebrations triggered
    pub wins: u64,
    /// Full-line jackpots landed
    pub real_wins: u64,
    /// Dollars spent on tickets
    pub total_cost: u64,
    /// Dollars won across all prize tiers
    pub total_won: u64,
    /// Plays counted in the most recent rate window
    pub plays_per_second: u64,
    /// Spend rate over the most recent rate window
    pub cost_per_second: u64,
    /// Reduced spend-to-winnings ratio, recomputed once per rate window
    pub cost_to_won_ratio: String,
    /// Session start, milliseconds since the epoch
    pub time_started_ms: f64,
}

impl Stats {
    pub fn new(now_ms: f64) -> Self {
        Self {
            plays: 0,
            three_number_matches: 0,
            four_number_matches: 0,
            five_number_matches: 0,
            wins: 0,
            real_wins: 0,
            total_cost: 0,
            total_won: 0,
            plays_per_second: 0,
            cost_per_second: 0,
            cost_to_won_ratio: String::from("n/a"),
            time_started_ms: now_ms,
        }
    }
}

/// Wall-clock checkpoint the per-second readouts are measured against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateClock {
    /// When the window last rolled
    pub last_ms: f64,
    /// Play counter at that moment
    pub plays_at_last: u64,
}

impl RateClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_ms: now_ms,
            plays_at_last: 0,
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

const ABBREVIATIONS: [(u128, &str); 8] = [
    (1_000_000_000_000_000_000_000_000, " septillion"),
    (1_000_000_000_000_000_000_000, " sextillion"),
    (1_000_000_000_000_000_000, " quintillion"),
    (1_000_000_000_000_000, " quadrillion"),
    (1_000_000_000_000, " trillion"),
    (1_000_000_000, "b"),
    (1_000_000, "m"),
    (1_000, "k"),
];

/// Shorten a large count to its biggest whole unit: 1500 becomes "1k",
/// 2_500_000 becomes "2m". Numbers under a thousand pass through.
pub fn abbreviate(n: u128) -> String {
    for (scale, suffix) in ABBREVIATIONS {
        if n >= scale {
            return format!("{}{}", n / scale, suffix);
        }
    }
    n.to_string()
}

/// Dollar amount as prose
pub fn money(n: u64) -> String {
    format!("{} dollars", n)
}

/// Reduced spend-to-winnings ratio, abbreviated on both sides. Returns "n/a"
/// before anything has been spent or won.
pub fn ratio(cost: u64, won: u64) -> String {
    let divisor = gcd(cost, won);
    if divisor == 0 {
        return String::from("n/a");
    }
    format!(
        "{} to {}",
        abbreviate((cost / divisor) as u128),
        abbreviate((won / divisor) as u128)
    )
}

const INTERVALS: [(u64, &str); 6] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
    (1, "second"),
];

/// Largest whole unit elapsed since `start_ms`, like "4 minutes"
pub fn time_since(start_ms: f64, now_ms: f64) -> String {
    let seconds = ((now_ms - start_ms) / 1000.0) as u64;
    for (span, label) in INTERVALS {
        let count = seconds / span;
        if count >= 1 {
            return if count == 1 {
                format!("1 {}", label)
            } else {
                format!("{} {}s", count, label)
            };
        }
    }
    String::from("just now")
}
