use crate::decimal::Money;
use crate::types::{LoanPurpose, LoanProductType};

/// maximum sacks a member may borrow against, by share-capital tier
///
/// exactly 20000 and above 20000 are distinct bands. feeds ignores the
/// stated purpose; rice business tiers require an explicit business
/// purpose, anything else takes the personal tiers. non-commodity
/// products resolve to 0 as a defined no-op, so callers may invoke this
/// unconditionally.
pub fn max_sacks(
    share_capital: Money,
    product: LoanProductType,
    purpose: Option<LoanPurpose>,
) -> u32 {
    let threshold = Money::from_major(20_000);

    match product {
        LoanProductType::Feeds => {
            if share_capital == threshold {
                15
            } else if share_capital > threshold {
                30
            } else {
                0
            }
        }
        LoanProductType::Rice => match purpose {
            Some(LoanPurpose::Business) => {
                if share_capital == threshold {
                    30
                } else if share_capital > threshold {
                    50
                } else {
                    0
                }
            }
            _ => {
                if share_capital >= Money::from_major(6_000) {
                    4
                } else {
                    2
                }
            }
        },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeds_tiers() {
        let feeds = LoanProductType::Feeds;
        assert_eq!(max_sacks(Money::from_major(19_999), feeds, None), 0);
        assert_eq!(max_sacks(Money::from_major(20_000), feeds, None), 15);
        assert_eq!(max_sacks(Money::from_major(20_001), feeds, None), 30);
        assert_eq!(max_sacks(Money::ZERO, feeds, None), 0);
    }

    #[test]
    fn test_rice_business_tiers() {
        let rice = LoanProductType::Rice;
        let business = Some(LoanPurpose::Business);
        assert_eq!(max_sacks(Money::from_major(15_000), rice, business), 0);
        assert_eq!(max_sacks(Money::from_major(20_000), rice, business), 30);
        assert_eq!(max_sacks(Money::from_major(25_000), rice, business), 50);
    }

    #[test]
    fn test_rice_personal_tiers() {
        let rice = LoanProductType::Rice;
        let personal = Some(LoanPurpose::Personal);
        assert_eq!(max_sacks(Money::from_major(5_999), rice, personal), 2);
        assert_eq!(max_sacks(Money::from_major(6_000), rice, personal), 4);
        assert_eq!(max_sacks(Money::from_major(50_000), rice, personal), 4);
    }

    #[test]
    fn test_non_commodity_is_zero() {
        assert_eq!(
            max_sacks(Money::from_major(100_000), LoanProductType::Regular, None),
            0
        );
        assert_eq!(
            max_sacks(
                Money::from_major(100_000),
                LoanProductType::Marketing,
                Some(LoanPurpose::Business)
            ),
            0
        );
    }
}
