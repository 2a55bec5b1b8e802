//! Scoring module - fewer moves, higher score
//!
//! The score is derived from the total number of player actions (clicks and
//! redos add one, undos remove one). The denominator is clamped so a victory
//! straight out of `start_new_game` scores `cols * 100`.

/// Calculate the victory score: `cols * 100 / total_actions`, integer
/// division, with the denominator clamped to at least 1.
pub fn calculate_score(cols: usize, total_actions: u32) -> u32 {
    (cols as u32 * 100) / total_actions.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rewards_fewer_moves() {
        assert!(calculate_score(4, 2) > calculate_score(4, 8));
    }

    #[test]
    fn test_score_values() {
        assert_eq!(calculate_score(4, 1), 400);
        assert_eq!(calculate_score(4, 2), 200);
        assert_eq!(calculate_score(4, 3), 133);
        assert_eq!(calculate_score(10, 50), 20);
    }

    #[test]
    fn test_zero_actions_clamped() {
        assert_eq!(calculate_score(4, 0), 400);
        assert_eq!(calculate_score(1, 0), 100);
    }
}
