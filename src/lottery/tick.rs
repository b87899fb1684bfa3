//! One pass of the draw loop
//!
//! Each tick buys a ticket, draws a winning line and our line, compares them
//! slot by slot, and settles the outcome into the session counters. The
//! caller owns the timer; winning tells it to stop via the outcome.

use crate::consts::{BASE_NUMBERS, RATE_WINDOW_MS, TICKET_COST};

use super::draw::{self, MatchResult};
use super::payout::{MatchTier, payout, tiers_hit};
use super::state::{LotteryState, Phase};
use super::stats::ratio;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing happened
    Idle,
    /// A normal play, with its comparison
    Played(MatchResult),
    /// The whole line matched; the session is now Done
    Jackpot,
}

/// Play one ticket
pub fn tick(state: &mut LotteryState, now_ms: f64) -> TickOutcome {
    if state.phase != Phase::Playing {
        return TickOutcome::Idle;
    }

    state.stats.plays += 1;
    state.stats.total_cost += TICKET_COST;

    // Roll the rate window once a second of wall clock has passed. The
    // ratio is refreshed here too, so it lags the totals by up to a window.
    if now_ms - state.rate.last_ms > RATE_WINDOW_MS {
        state.stats.plays_per_second = state.stats.plays - state.rate.plays_at_last;
        state.stats.cost_per_second = state.stats.plays_per_second * TICKET_COST;
        state.stats.cost_to_won_ratio = ratio(state.stats.total_cost, state.stats.total_won);
        state.rate.last_ms = now_ms;
        state.rate.plays_at_last = state.stats.plays;
    }

    let winning = draw::draw_line(&mut state.pool, &mut state.rng);
    let ours = draw::draw_line(&mut state.pool, &mut state.rng);
    state.winning = Some(winning);
    state.ours = Some(ours);

    settle(state, draw::compare(&ours, &winning))
}

/// Apply a comparison to the counters. A full line is the jackpot; anything
/// else bumps its near-miss tiers and collects the scheduled prize.
pub(crate) fn settle(state: &mut LotteryState, result: MatchResult) -> TickOutcome {
    if result.base as usize == BASE_NUMBERS && result.power {
        state.stats.real_wins += 1;
        state.win();
        return TickOutcome::Jackpot;
    }

    for tier in tiers_hit(result.base) {
        match tier {
            MatchTier::Three => state.stats.three_number_matches += 1,
            MatchTier::Four => state.stats.four_number_matches += 1,
            MatchTier::Five => state.stats.five_number_matches += 1,
        }
    }
    state.stats.total_won += payout(result.base, result.power);

    TickOutcome::Played(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lottery::draw::Draw;

    #[test]
    fn test_tick_idle_until_started() {
        let mut state = LotteryState::new(123, 0.0);
        assert_eq!(tick(&mut state, 10.0), TickOutcome::Idle);
        assert_eq!(state.stats.plays, 0);
        assert!(state.winning.is_none());
    }

    #[test]
    fn test_tick_plays_and_charges() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();

        for i in 1..=3u64 {
            tick(&mut state, i as f64 * 10.0);
        }

        assert_eq!(state.stats.plays, 3);
        assert_eq!(state.stats.total_cost, 3 * TICKET_COST);
        assert!(state.winning.is_some());
        assert!(state.ours.is_some());
    }

    #[test]
    fn test_tick_regenerates_both_lines() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();

        tick(&mut state, 10.0);
        let first = (state.winning, state.ours);
        tick(&mut state, 20.0);
        let second = (state.winning, state.ours);

        assert_ne!(first, second);
    }

    #[test]
    fn test_rate_window_recompute() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();

        tick(&mut state, 10.0);
        tick(&mut state, 20.0);
        assert_eq!(state.stats.plays_per_second, 0);

        // Third play lands past the window: all three count toward the rate
        tick(&mut state, 1500.0);
        assert_eq!(state.stats.plays_per_second, 3);
        assert_eq!(state.stats.cost_per_second, 3 * TICKET_COST);
        assert_eq!(state.rate.last_ms, 1500.0);
        assert_eq!(state.rate.plays_at_last, 3);
        assert_ne!(state.stats.cost_to_won_ratio, "n/a");
    }

    #[test]
    fn test_settle_cascades_tiers() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();

        let outcome = settle(
            &mut state,
            MatchResult {
                base: 5,
                power: false,
            },
        );

        // Five base matches bump every tier below on the same play
        assert_eq!(state.stats.five_number_matches, 1);
        assert_eq!(state.stats.four_number_matches, 1);
        assert_eq!(state.stats.three_number_matches, 1);
        assert_eq!(state.stats.total_won, 1_000_000);
        assert_eq!(state.phase, Phase::Playing);
        assert!(matches!(outcome, TickOutcome::Played(_)));
    }

    #[test]
    fn test_settle_four_and_three() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();

        settle(
            &mut state,
            MatchResult {
                base: 4,
                power: false,
            },
        );
        assert_eq!(state.stats.four_number_matches, 1);
        assert_eq!(state.stats.three_number_matches, 1);
        assert_eq!(state.stats.five_number_matches, 0);

        settle(
            &mut state,
            MatchResult {
                base: 3,
                power: true,
            },
        );
        assert_eq!(state.stats.three_number_matches, 2);
        assert_eq!(state.stats.total_won, 100 + 100);
    }

    #[test]
    fn test_settle_jackpot() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();
        let winning = Draw([5, 12, 23, 41, 67, 19]);
        state.winning = Some(winning);

        let outcome = settle(
            &mut state,
            MatchResult {
                base: 5,
                power: true,
            },
        );

        assert_eq!(outcome, TickOutcome::Jackpot);
        assert_eq!(state.phase, Phase::Done);
        assert_eq!(state.stats.real_wins, 1);
        assert_eq!(state.stats.wins, 1);
        assert_eq!(state.stats.total_won, 141_000_000);
        assert_eq!(state.ours, Some(winning));
        // The jackpot path skips the near-miss counters
        assert_eq!(state.stats.five_number_matches, 0);
    }

    #[test]
    fn test_tick_ignored_when_done() {
        let mut state = LotteryState::new(123, 0.0);
        state.start();
        state.winning = Some(Draw([5, 12, 23, 41, 67, 19]));
        state.win();

        assert_eq!(tick(&mut state, 50.0), TickOutcome::Idle);
        assert_eq!(state.stats.plays, 0);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and timestamps stay identical
        let mut a = LotteryState::new(99999, 0.0);
        let mut b = LotteryState::new(99999, 0.0);
        a.start();
        b.start();

        for i in 0..200u64 {
            let now = i as f64 * 7.0;
            assert_eq!(tick(&mut a, now), tick(&mut b, now));
        }

        assert_eq!(a.winning, b.winning);
        assert_eq!(a.ours, b.ours);
        assert_eq!(a.stats.total_won, b.stats.total_won);
        assert_eq!(
            a.stats.three_number_matches,
            b.stats.three_number_matches
        );
    }
}
