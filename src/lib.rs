//! Jackpot Rain - a lottery odds simulator with WebGPU confetti
//!
//! Core modules:
//! - `lottery`: Deterministic draw simulation (number generation, payouts, stats)
//! - `confetti`: Celebration particle pool (frame-gated, fixed size)
//! - `renderer`: WebGPU rendering pipeline

pub mod confetti;
pub mod lottery;
pub mod renderer;

pub use confetti::{ConfettiOptions, ConfettiSystem};
pub use lottery::{LotteryState, Phase};

/// Simulation constants
pub mod consts {
    /// Price of one ticket in dollars
    pub const TICKET_COST: u64 = 2;

    /// Base numbers are shuffled out of 1..=BASE_POOL_MAX without replacement
    pub const BASE_POOL_MAX: u8 = 69;
    /// Base numbers per line
    pub const BASE_NUMBERS: usize = 5;
    /// The power number is drawn from 1..=POWER_MAX, independent of the pool
    pub const POWER_MAX: u8 = 26;
    /// Slots per line (base numbers plus the power number)
    pub const LINE_LEN: usize = 6;

    /// Wall-clock window for the plays/cost per-second readouts
    pub const RATE_WINDOW_MS: f64 = 1000.0;
    /// Minimum elapsed time between visible confetti updates
    pub const MIN_FRAME_MS: f64 = 16.0;
}
