use crate::decimal::Money;

/// map a principal amount to the one permitted term, in months
///
/// brackets are closed and non-overlapping: [6000,10000] -> 6,
/// [10001,50000] -> 12, [50001,100000] -> 24, above -> 36. amounts below
/// 6000 have no permitted term; callers must treat that as a rejection
/// of the requested amount, not a zero-term loan.
pub fn resolve_term(amount: Money) -> Option<u32> {
    if amount < Money::from_major(6_000) {
        None
    } else if amount <= Money::from_major(10_000) {
        Some(6)
    } else if amount <= Money::from_major(50_000) {
        Some(12)
    } else if amount <= Money::from_major(100_000) {
        Some(24)
    } else {
        Some(36)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_minimum_has_no_term() {
        assert_eq!(resolve_term(Money::ZERO), None);
        assert_eq!(resolve_term(Money::from_major(5_999)), None);
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(resolve_term(Money::from_major(6_000)), Some(6));
        assert_eq!(resolve_term(Money::from_major(10_000)), Some(6));
        assert_eq!(resolve_term(Money::from_major(10_001)), Some(12));
        assert_eq!(resolve_term(Money::from_major(50_000)), Some(12));
        assert_eq!(resolve_term(Money::from_major(50_001)), Some(24));
        assert_eq!(resolve_term(Money::from_major(100_000)), Some(24));
        assert_eq!(resolve_term(Money::from_major(100_001)), Some(36));
        assert_eq!(resolve_term(Money::from_major(1_000_000)), Some(36));
    }
}
