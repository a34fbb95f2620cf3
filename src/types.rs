use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// loan product catalogue of the cooperative
///
/// wire names keep the camelCase tags used by the application tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanProductType {
    Feeds,
    Rice,
    Marketing,
    BackToBack,
    Regular,
    Livelihood,
    Educational,
    Emergency,
    QuickCash,
    Car,
    Housing,
    Motorcycle,
    MemorialLot,
    IntermentLot,
    Travel,
    Ofw,
    Savings,
    Health,
    Special,
    Reconstruction,
}

impl LoanProductType {
    /// commodity loans are priced in sacks, not percentage rates
    pub fn is_commodity(&self) -> bool {
        matches!(self, LoanProductType::Feeds | LoanProductType::Rice)
    }

    /// resolve the policy bundle governing this product
    pub fn policy(&self) -> ProductPolicy {
        use LoanProductType::*;

        match self {
            Feeds | Rice => ProductPolicy {
                schedule: ScheduleRule::Commodity,
                ceiling: CeilingRule::CommoditySacks,
                principal: PrincipalRule::CommoditySacks,
            },
            Marketing => ProductPolicy {
                schedule: ScheduleRule::Rated,
                ceiling: CeilingRule::Fixed(Money::from_major(75_000)),
                principal: PrincipalRule::CallerAmount,
            },
            BackToBack => ProductPolicy {
                schedule: ScheduleRule::Rated,
                ceiling: CeilingRule::ShareCapitalMultiple(1),
                principal: PrincipalRule::CallerAmount,
            },
            Regular => ProductPolicy {
                schedule: ScheduleRule::Rated,
                ceiling: CeilingRule::ShareCapitalMultiple(2),
                principal: PrincipalRule::CallerAmount,
            },
            IntermentLot => ProductPolicy {
                schedule: ScheduleRule::FeeOnly {
                    fee: Rate::from_percentage(dec!(2)),
                },
                ceiling: CeilingRule::Undefined,
                principal: PrincipalRule::Undefined,
            },
            Livelihood | Educational | Emergency | QuickCash | Car | Housing | Motorcycle
            | MemorialLot | Travel | Ofw | Savings | Health | Special | Reconstruction => {
                ProductPolicy {
                    schedule: ScheduleRule::Rated,
                    ceiling: CeilingRule::Undefined,
                    principal: PrincipalRule::Undefined,
                }
            }
        }
    }
}

/// policy bundle for one product, making "no rule defined" a visible
/// state instead of a silent zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductPolicy {
    pub schedule: ScheduleRule,
    pub ceiling: CeilingRule,
    pub principal: PrincipalRule,
}

/// how the repayment schedule is priced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleRule {
    /// interest and fee come from the rate table
    Rated,
    /// fee is fixed; interest is supplied per application (interment lot)
    FeeOnly { fee: Rate },
    /// no percentage schedule, governed by sack limits instead
    Commodity,
}

/// how the maximum loanable amount is derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CeilingRule {
    /// sack limit times unit price
    CommoditySacks,
    /// fixed ceiling regardless of member state
    Fixed(Money),
    /// multiple of the member's share capital
    ShareCapitalMultiple(u32),
    /// no ceiling rule in this engine; caller applies eligibility elsewhere
    Undefined,
}

/// how the requested principal is derived from the raw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrincipalRule {
    /// unit price times requested sacks
    CommoditySacks,
    /// the caller-entered loan amount directly
    CallerAmount,
    /// no rule in this engine; caller supplies the principal directly
    Undefined,
}

/// stated purpose of a commodity loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanPurpose {
    Business,
    Personal,
}

/// member financial standing, supplied by the member-record store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberFinancialProfile {
    pub share_capital: Money,
}

/// pricing context for commodity loans, supplied by the pricing service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommodityContext {
    /// current unit price; when absent the engine falls back to the
    /// caller-entered amount (logged degraded mode)
    pub price_per_unit: Option<Money>,
    pub purpose: LoanPurpose,
    /// accepted for wire compatibility; has no effect on any computation
    pub loan_percentage: Rate,
}

/// caller-supplied loan intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub product_type: LoanProductType,
    pub loan_amount: Money,
    pub sacks: u32,
    /// may be unset for variable-term products; resolved from the amount
    pub term: Option<u32>,
}

/// terminal output of the schedule calculator, at full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculationResult {
    pub total_interest: Money,
    pub service_fee: Money,
    pub total_repayment: Money,
    pub monthly_payment: Money,
}

impl LoanCalculationResult {
    /// presentation view with every field rounded to 2 decimal places
    pub fn rounded(&self) -> LoanCalculationResult {
        LoanCalculationResult {
            total_interest: self.total_interest.round_currency(),
            service_fee: self.service_fee.round_currency(),
            total_repayment: self.total_repayment.round_currency(),
            monthly_payment: self.monthly_payment.round_currency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_names() {
        let json = serde_json::to_string(&LoanProductType::BackToBack).unwrap();
        assert_eq!(json, "\"backToBack\"");

        let parsed: LoanProductType = serde_json::from_str("\"quickCash\"").unwrap();
        assert_eq!(parsed, LoanProductType::QuickCash);

        let parsed: LoanProductType = serde_json::from_str("\"intermentLot\"").unwrap();
        assert_eq!(parsed, LoanProductType::IntermentLot);
    }

    #[test]
    fn test_commodity_products() {
        assert!(LoanProductType::Feeds.is_commodity());
        assert!(LoanProductType::Rice.is_commodity());
        assert!(!LoanProductType::Regular.is_commodity());
    }

    #[test]
    fn test_policy_bundles() {
        let p = LoanProductType::Regular.policy();
        assert_eq!(p.ceiling, CeilingRule::ShareCapitalMultiple(2));
        assert_eq!(p.principal, PrincipalRule::CallerAmount);
        assert_eq!(p.schedule, ScheduleRule::Rated);

        let p = LoanProductType::Marketing.policy();
        assert_eq!(p.ceiling, CeilingRule::Fixed(Money::from_major(75_000)));

        // products with rates but no amount rules stay visibly undefined
        let p = LoanProductType::Educational.policy();
        assert_eq!(p.ceiling, CeilingRule::Undefined);
        assert_eq!(p.principal, PrincipalRule::Undefined);

        let p = LoanProductType::Rice.policy();
        assert_eq!(p.schedule, ScheduleRule::Commodity);
    }
}
