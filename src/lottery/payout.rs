//! Prize schedule and near-miss tiers

use serde::{Deserialize, Serialize};

use crate::consts::BASE_NUMBERS;

/// Prize per outcome in dollars, indexed by matched base slots; entries past
/// POWER_OFFSET are the same counts with the power number matched too
const PAYOUTS: [u64; 12] = [
    0,
    0,
    0,
    4,
    100,
    1_000_000,
    4,
    4,
    7,
    100,
    50_000,
    141_000_000,
];

const POWER_OFFSET: usize = 6;

/// Prize for a line with `base` positional matches
pub fn payout(base: u8, power: bool) -> u64 {
    let idx = if power {
        base as usize + POWER_OFFSET
    } else {
        base as usize
    };
    PAYOUTS[idx]
}

/// The jackpot prize, paid when the whole line matches
pub fn jackpot_payout() -> u64 {
    payout(BASE_NUMBERS as u8, true)
}

/// Near-miss tiers the session counters track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Three,
    Four,
    Five,
}

/// Which counters a play with `base` matches bumps. A higher tier counts
/// toward every tier below it, down to three.
pub fn tiers_hit(base: u8) -> &'static [MatchTier] {
    match base {
        5 => &[MatchTier::Five, MatchTier::Four, MatchTier::Three],
        4 => &[MatchTier::Four, MatchTier::Three],
        3 => &[MatchTier::Three],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_without_power() {
        assert_eq!(payout(0, false), 0);
        assert_eq!(payout(1, false), 0);
        assert_eq!(payout(2, false), 0);
        assert_eq!(payout(3, false), 4);
        assert_eq!(payout(4, false), 100);
        assert_eq!(payout(5, false), 1_000_000);
    }

    #[test]
    fn test_payout_with_power() {
        assert_eq!(payout(0, true), 4);
        assert_eq!(payout(1, true), 4);
        assert_eq!(payout(2, true), 7);
        assert_eq!(payout(3, true), 100);
        assert_eq!(payout(4, true), 50_000);
        assert_eq!(payout(5, true), 141_000_000);
    }

    #[test]
    fn test_jackpot_payout_is_top_prize() {
        assert_eq!(jackpot_payout(), 141_000_000);
    }

    #[test]
    fn test_tiers_cascade_downward() {
        assert_eq!(
            tiers_hit(5),
            &[MatchTier::Five, MatchTier::Four, MatchTier::Three]
        );
        assert_eq!(tiers_hit(4), &[MatchTier::Four, MatchTier::Three]);
        assert_eq!(tiers_hit(3), &[MatchTier::Three]);
    }

    #[test]
    fn test_low_matches_hit_no_tiers() {
        assert!(tiers_hit(0).is_empty());
        assert!(tiers_hit(1).is_empty());
        assert!(tiers_hit(2).is_empty());
    }
}
