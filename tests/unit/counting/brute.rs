//! Tests for exhaustive candidate generation and brute-force counting

#[cfg(test)]
mod tests {
    use strip_tilings::TilingError;
    use strip_tilings::counting::brute::{BruteEnumerator, CandidateProduct};
    use strip_tilings::io::configuration::MAX_BRUTE_LENGTH;
    use strip_tilings::tiling::validator::is_valid_tiling;

    // Verifies the product covers every sequence exactly once
    // Verified by stopping the odometer one step early
    #[test]
    fn test_candidate_product_size() {
        assert_eq!(CandidateProduct::new(0).count(), 1);
        assert_eq!(CandidateProduct::new(1).count(), 3);
        assert_eq!(CandidateProduct::new(4).count(), 81);

        let mut candidates: Vec<_> = CandidateProduct::new(3).collect();
        let produced = candidates.len();
        candidates.sort();
        candidates.dedup();
        assert_eq!(candidates.len(), produced);
    }

    // Tests lexicographic order with the last column varying fastest
    #[test]
    fn test_candidate_product_order() {
        let rendered: Vec<String> = CandidateProduct::new(2)
            .map(|tiling| tiling.to_string())
            .collect();

        assert_eq!(
            rendered,
            vec!["UU", "U[", "U]", "[U", "[[", "[]", "]U", "][", "]]"]
        );
    }

    // Tests known totals for short strips
    // Verified by skipping the validity filter during enumeration
    #[test]
    fn test_count_all_known_values() {
        let mut brute = BruteEnumerator::new();
        let counts: Vec<usize> = (0..=6)
            .map(|length| brute.count_all(length).unwrap_or_default())
            .collect();

        assert_eq!(counts, vec![1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_empty_strip_has_single_empty_tiling() {
        let mut brute = BruteEnumerator::new();
        let tilings = brute.all_tilings(0).unwrap_or_default();

        assert_eq!(tilings.len(), 1);
        assert!(tilings.iter().all(|tiling| tiling.is_empty()));
    }

    // Tests per-domino counts against C(n - k, k)
    // Verified by filtering on tail count instead of head count
    #[test]
    fn test_count_with_dominoes() {
        let mut brute = BruteEnumerator::new();
        let counts: Vec<usize> = (0..=4)
            .map(|dominoes| brute.count_with_dominoes(dominoes, 6).unwrap_or_default())
            .collect();

        assert_eq!(counts, vec![1, 5, 6, 1, 0]);
    }

    // Tests that every retained tiling passes validation
    #[test]
    fn test_all_tilings_are_valid() {
        let mut brute = BruteEnumerator::new();
        for length in 0..=8 {
            let tilings = brute.all_tilings(length).unwrap_or_default();
            assert!(
                tilings
                    .iter()
                    .all(|tiling| tiling.len() == length && is_valid_tiling(tiling, None))
            );
        }
    }

    // Tests that each length is enumerated once
    // Verified by bypassing the memo table in `all_tilings`
    #[test]
    fn test_valid_sets_are_cached() {
        let mut brute = BruteEnumerator::new();

        let _ = brute.count_all(5);
        let _ = brute.count_with_dominoes(1, 5);
        let _ = brute.count_with_dominoes(2, 5);

        assert_eq!(brute.stats().misses, 1);
        assert_eq!(brute.stats().hits, 2);
    }

    // Tests that lengths above the limit fail loudly
    #[test]
    fn test_length_limit() {
        let mut brute = BruteEnumerator::with_limit(3).unwrap_or_default();
        assert_eq!(brute.limit(), 3);
        assert_eq!(brute.count_all(3).ok(), Some(3));

        assert_eq!(
            brute.count_all(4),
            Err(TilingError::LengthLimitExceeded {
                requested: 4,
                limit: 3,
            })
        );
        assert!(brute.count_with_dominoes(0, 4).is_err());
    }

    #[test]
    fn test_limit_cannot_exceed_maximum() {
        assert!(BruteEnumerator::with_limit(MAX_BRUTE_LENGTH).is_ok());
        assert!(matches!(
            BruteEnumerator::with_limit(MAX_BRUTE_LENGTH + 1),
            Err(TilingError::InvalidParameter {
                parameter: "brute_limit",
                ..
            })
        ));
        assert_eq!(BruteEnumerator::new().limit(), MAX_BRUTE_LENGTH);
    }
}
