//! Tests for domino pairing and domino count validation

#[cfg(test)]
mod tests {
    use strip_tilings::tiling::marker::{Marker, Tiling};
    use strip_tilings::tiling::validator::{is_valid, is_valid_symbols, is_valid_tiling};

    // Verifies the empty strip is trivially tiled
    #[test]
    fn test_empty_sequence_is_valid() {
        assert!(is_valid(&[], None));
        assert!(is_valid(&[], Some(0)));
        assert!(!is_valid(&[], Some(1)));
    }

    // Tests well-formed sequences of units and dominoes
    // Verified by requiring a unit after every domino tail
    #[test]
    fn test_valid_sequences() {
        assert!(is_valid_symbols(&[1], None));
        assert!(is_valid_symbols(&[2, 3], None));
        assert!(is_valid_symbols(&[1, 2, 3, 1], None));
        assert!(is_valid_symbols(&[2, 3, 2, 3], None));
        assert!(is_valid_symbols(&[1, 1, 1, 1], None));
    }

    // Tests a head that is not directly followed by a tail
    // Verified by accepting heads at the end of the sequence
    #[test]
    fn test_unpaired_head_is_invalid() {
        assert!(!is_valid_symbols(&[2], None));
        assert!(!is_valid_symbols(&[1, 2], None));
        assert!(!is_valid_symbols(&[2, 1, 3], None));
        assert!(!is_valid_symbols(&[2, 2, 3, 3], None));
    }

    // Tests a tail that is not directly preceded by a head
    // Verified by removing the previous-position check for tails
    #[test]
    fn test_unpaired_tail_is_invalid() {
        assert!(!is_valid_symbols(&[3], None));
        assert!(!is_valid_symbols(&[3, 2], None));
        assert!(!is_valid_symbols(&[1, 3], None));
        assert!(!is_valid_symbols(&[2, 3, 3], None));
    }

    // Tests that foreign symbols invalidate the sequence instead of erroring
    #[test]
    fn test_unknown_symbol_is_invalid() {
        assert!(!is_valid_symbols(&[1, 0, 1], None));
        assert!(!is_valid_symbols(&[2, 3, 4], None));
        assert!(!is_valid_symbols(&[7], Some(0)));
    }

    // Tests the expected domino count check
    // Verified by counting tails instead of heads
    #[test]
    fn test_expected_domino_count() {
        let tiling = Tiling::from_symbols(&[2, 3, 1, 2, 3]).unwrap_or_default();

        assert!(is_valid_tiling(&tiling, None));
        assert!(is_valid_tiling(&tiling, Some(2)));
        assert!(!is_valid_tiling(&tiling, Some(1)));
        assert!(!is_valid_tiling(&tiling, Some(3)));
    }

    // Tests that a matching count does not excuse broken pairing
    #[test]
    fn test_count_match_still_checks_pairing() {
        assert!(!is_valid(&[Marker::DominoHead, Marker::Unit], Some(1)));
        assert!(!is_valid(&[Marker::DominoTail, Marker::DominoHead], Some(1)));
    }
}
