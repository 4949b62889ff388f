//! Opponent selection

use crate::error::AutomationError;
use crate::types::OpponentCandidate;

/// Pick the lowest-rated candidate.
///
/// Ties go to the candidate listed first. An empty pool means the opponent
/// query came back with nothing to fight, which the caller must not paper
/// over.
pub fn select_weakest<'a>(
    creature_id: &str,
    candidates: &'a [OpponentCandidate],
) -> Result<&'a OpponentCandidate, AutomationError> {
    candidates
        .iter()
        .min_by_key(|c| c.rating)
        .ok_or_else(|| AutomationError::EmptyCandidateSet {
            creature: creature_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, rating: i64) -> OpponentCandidate {
        OpponentCandidate {
            id: id.to_string(),
            token_id: String::new(),
            rarity: "N".to_string(),
            rating,
        }
    }

    #[test]
    fn test_picks_lowest_rating() {
        let pool = vec![candidate("a", 5), candidate("b", 2), candidate("c", 9)];
        assert_eq!(select_weakest("me", &pool).unwrap().id, "b");
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let pool = vec![candidate("a", 5), candidate("b", 2), candidate("c", 2)];
        assert_eq!(select_weakest("me", &pool).unwrap().id, "b");
    }

    #[test]
    fn test_single_candidate() {
        let pool = vec![candidate("only", 400)];
        assert_eq!(select_weakest("me", &pool).unwrap().id, "only");
    }

    #[test]
    fn test_empty_pool_fails() {
        let result = select_weakest("me", &[]);
        match result {
            Err(AutomationError::EmptyCandidateSet { creature }) => assert_eq!(creature, "me"),
            other => panic!("expected EmptyCandidateSet, got {:?}", other),
        }
    }
}
