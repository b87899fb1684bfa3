//! Line generation and comparison
//!
//! A line is five base numbers shuffled out of a shared 69-number pool plus
//! one power number rolled independently. Matching is positional: slot
//! against slot, never value-anywhere.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{BASE_NUMBERS, BASE_POOL_MAX, LINE_LEN, POWER_MAX};

/// The persistent pool base numbers are shuffled out of
pub type BasePool = [u8; BASE_POOL_MAX as usize];

/// Fresh pool holding 1..=BASE_POOL_MAX in order
pub fn new_pool() -> BasePool {
    let mut pool = [0u8; BASE_POOL_MAX as usize];
    for (i, slot) in pool.iter_mut().enumerate() {
        *slot = (i + 1) as u8;
    }
    pool
}

/// A drawn line: five base numbers followed by the power number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw(pub [u8; LINE_LEN]);

impl Draw {
    /// The five base numbers, in draw order
    pub fn base(&self) -> &[u8] {
        &self.0[..BASE_NUMBERS]
    }

    /// The power number
    pub fn power(&self) -> u8 {
        self.0[BASE_NUMBERS]
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for n in self.base() {
            write!(f, "{:>2} ", n)?;
        }
        write!(f, "| {:>2}", self.power())
    }
}

/// Result of comparing two lines slot by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// How many of the first five slots matched by position
    pub base: u8,
    /// Whether the power numbers matched
    pub power: bool,
}

/// Draw a line: shuffle the pool in place, take the first five, then roll
/// the power number. The power number may coincide with a base number.
pub fn draw_line(pool: &mut BasePool, rng: &mut Pcg32) -> Draw {
    pool.shuffle(rng);
    let mut line = [0u8; LINE_LEN];
    line[..BASE_NUMBERS].copy_from_slice(&pool[..BASE_NUMBERS]);
    line[BASE_NUMBERS] = rng.random_range(1..=POWER_MAX);
    Draw(line)
}

/// Positional comparison over the first five slots plus the power slot
pub fn compare(ours: &Draw, winning: &Draw) -> MatchResult {
    let mut base = 0u8;
    for i in 0..BASE_NUMBERS {
        if ours.0[i] == winning.0[i] {
            base += 1;
        }
    }
    MatchResult {
        base,
        power: ours.power() == winning.power(),
    }
}
