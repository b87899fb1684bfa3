//! Deterministic lottery simulation
//!
//! All draw logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Wall-clock timestamps are passed in, never read here

pub mod draw;
pub mod payout;
pub mod state;
pub mod stats;
pub mod tick;

pub use draw::{Draw, MatchResult};
pub use payout::{MatchTier, payout, tiers_hit};
pub use state::{LotteryState, Phase};
pub use stats::{RateClock, Stats, abbreviate, money, ratio, time_since};
pub use tick::{TickOutcome, tick};
