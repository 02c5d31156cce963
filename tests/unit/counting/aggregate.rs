//! Tests for totals and per-domino breakdowns

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use strip_tilings::counting::aggregate::{breakdown, count_all};
    use strip_tilings::counting::recurrence::RecurrenceCounter;

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    // Verifies the smallest strips
    #[test]
    fn test_boundary_totals() {
        let mut counter = RecurrenceCounter::new();
        assert_eq!(count_all(&mut counter, 0), big(1));
        assert_eq!(count_all(&mut counter, 1), big(1));
    }

    // Tests known totals, which follow the Fibonacci numbers
    // Verified by summing only up to length / 2 - 1 dominoes
    #[test]
    fn test_known_totals() {
        let mut counter = RecurrenceCounter::new();
        let totals: Vec<BigUint> = (2..=8).map(|length| count_all(&mut counter, length)).collect();
        let expected: Vec<BigUint> = [2, 3, 5, 8, 13, 21, 34].into_iter().map(big).collect();

        assert_eq!(totals, expected);
        assert_eq!(count_all(&mut counter, 14), big(610));
        assert!(count_all(&mut counter, 14) > big(500));
    }

    // Tests the per-domino split for six columns
    #[test]
    fn test_breakdown() {
        let mut counter = RecurrenceCounter::new();
        let counts = breakdown(&mut counter, 6);

        assert_eq!(counts.length(), 6);
        assert_eq!(counts.max_dominoes(), 3);
        let pairs: Vec<(usize, BigUint)> = counts
            .counts()
            .map(|(dominoes, count)| (dominoes, count.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![(0, big(1)), (1, big(5)), (2, big(6)), (3, big(1))]
        );
        assert_eq!(counts.count_with_dominoes(2), Some(&big(6)));
        assert_eq!(counts.count_with_dominoes(4), None);
        assert_eq!(counts.total(), &big(13));
    }

    #[test]
    fn test_empty_strip_breakdown() {
        let mut counter = RecurrenceCounter::new();
        let counts = breakdown(&mut counter, 0);

        assert_eq!(counts.counts().count(), 1);
        assert_eq!(counts.count_with_dominoes(0), Some(&big(1)));
        assert_eq!(counts.total(), &big(1));
    }

    // Tests totals that overflow 64-bit integers
    // Verified by accumulating the total in a u64
    #[test]
    fn test_large_totals_are_exact() {
        let mut counter = RecurrenceCounter::new();
        assert_eq!(count_all(&mut counter, 90), big(4_660_046_610_375_530_309));

        let expected = "453973694165307953197296969697410619233826"
            .parse::<BigUint>()
            .unwrap_or_default();
        assert_eq!(count_all(&mut counter, 200), expected);
    }
}
