//! Lottery session state
//!
//! Everything the draw loop mutates lives here. The session moves
//! Init -> Playing -> Done and back to Playing on replay; counters survive
//! every transition.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::draw::{BasePool, Draw, new_pool};
use super::payout::jackpot_payout;
use super::stats::{RateClock, Stats};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh page, nothing played yet
    Init,
    /// Draw loop running
    Playing,
    /// Celebrating a jackpot
    Done,
}

/// Complete lottery session state
#[derive(Debug, Clone)]
pub struct LotteryState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: Phase,
    /// Winning line of the most recent play
    pub winning: Option<Draw>,
    /// Our ticket for the most recent play
    pub ours: Option<Draw>,
    pub stats: Stats,
    pub rate: RateClock,
    /// Persistent shuffle pool the base numbers come from
    pub pool: BasePool,
    pub rng: Pcg32,
}

impl LotteryState {
    /// Create a fresh session
    pub fn new(seed: u64, now_ms: f64) -> Self {
        Self {
            seed,
            phase: Phase::Init,
            winning: None,
            ours: None,
            stats: Stats::new(now_ms),
            rate: RateClock::new(now_ms),
            pool: new_pool(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin playing. Once a jackpot has landed this does nothing; resuming
    /// from a celebration goes through `again`.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Init | Phase::Playing => self.phase = Phase::Playing,
            Phase::Done => {}
        }
    }

    /// Land the jackpot: pay the top prize, snap our line onto the winning
    /// one so the board shows the match, and move to Done.
    pub fn win(&mut self) {
        self.stats.wins += 1;
        self.stats.total_won += jackpot_payout();
        self.phase = Phase::Done;
        self.ours = self.winning;
    }

    /// Dismiss the celebration and resume playing. Counters keep
    /// accumulating; only the phase changes.
    pub fn again(&mut self) {
        if self.phase == Phase::Done {
            self.phase = Phase::Playing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_from_init() {
        let mut state = LotteryState::new(1, 0.0);
        assert_eq!(state.phase, Phase::Init);
        state.start();
        assert_eq!(state.phase, Phase::Playing);

        // Starting again while playing is a no-op
        state.start();
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_start_ignored_when_done() {
        let mut state = LotteryState::new(1, 0.0);
        state.phase = Phase::Done;
        state.start();
        assert_eq!(state.phase, Phase::Done);
    }

    #[test]
    fn test_win_snaps_our_line_to_winning() {
        let mut state = LotteryState::new(1, 0.0);
        state.start();
        let winning = Draw([5, 12, 23, 41, 67, 19]);
        state.winning = Some(winning);
        state.ours = Some(Draw([1, 2, 3, 4, 5, 6]));

        state.win();

        assert_eq!(state.phase, Phase::Done);
        assert_eq!(state.ours, Some(winning));
        assert_eq!(state.stats.wins, 1);
        assert_eq!(state.stats.total_won, 141_000_000);
    }

    #[test]
    fn test_again_resumes_and_keeps_stats() {
        let mut state = LotteryState::new(1, 0.0);
        state.start();
        state.stats.plays = 500;
        state.stats.total_cost = 1000;
        state.winning = Some(Draw([5, 12, 23, 41, 67, 19]));
        state.win();

        state.again();

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.stats.plays, 500);
        assert_eq!(state.stats.total_cost, 1000);
        assert_eq!(state.stats.wins, 1);
    }

    #[test]
    fn test_again_only_from_done() {
        let mut state = LotteryState::new(1, 0.0);
        state.again();
        assert_eq!(state.phase, Phase::Init);
    }
}
