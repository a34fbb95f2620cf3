use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::eligibility::{max_loanable, max_sacks, requested_amount, resolve_term};
use crate::errors::{EngineError, Result};
use crate::rates::LoanRateTable;
use crate::schedule::ScheduleCalculator;
use crate::types::{
    CommodityContext, LoanCalculationResult, LoanProductType, LoanRequest,
    MemberFinancialProfile, PrincipalRule,
};

/// full evaluation of one loan request, handed to the approval workflow
///
/// the engine computes both sides of the eligibility comparison but does
/// not enforce it; whether `requested <= max_loanable` blocks the
/// application is the workflow's decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanEvaluation {
    pub max_loanable: Money,
    pub requested: Money,
    pub sack_limit: Option<u32>,
    pub term: Option<u32>,
    pub schedule: Option<LoanCalculationResult>,
}

impl LoanEvaluation {
    /// convenience view of the eligibility comparison; advisory only
    pub fn within_limit(&self) -> bool {
        self.requested <= self.max_loanable
    }
}

/// loan engine over an injected, immutable rate table
///
/// stateless per call; safe to share across threads
#[derive(Debug, Clone)]
pub struct LoanEngine {
    table: LoanRateTable,
}

impl LoanEngine {
    pub fn new(table: LoanRateTable) -> Self {
        Self { table }
    }

    pub fn rate_table(&self) -> &LoanRateTable {
        &self.table
    }

    /// commodity sack ceiling for a member; 0 for non-commodity products
    pub fn sack_limit(
        &self,
        profile: &MemberFinancialProfile,
        product: LoanProductType,
        commodity: Option<&CommodityContext>,
    ) -> Result<u32> {
        if profile.share_capital.is_negative() {
            return Err(EngineError::InvalidShareCapital {
                amount: profile.share_capital,
            });
        }
        Ok(max_sacks(
            profile.share_capital,
            product,
            commodity.map(|c| c.purpose),
        ))
    }

    /// permitted term for a variable-term principal
    pub fn resolve_term(&self, amount: Money) -> Option<u32> {
        resolve_term(amount)
    }

    /// maximum amount the member may borrow for the requested product
    pub fn max_loanable(
        &self,
        profile: &MemberFinancialProfile,
        request: &LoanRequest,
        commodity: Option<&CommodityContext>,
    ) -> Result<Money> {
        let sacks = self.sack_limit(profile, request.product_type, commodity)?;
        max_loanable(
            request.product_type,
            profile,
            commodity,
            sacks,
            request.loan_amount,
        )
    }

    /// principal the member is actually asking for
    pub fn requested_amount(
        &self,
        request: &LoanRequest,
        commodity: Option<&CommodityContext>,
    ) -> Result<Money> {
        requested_amount(request.product_type, request, commodity)
    }

    /// monetary breakdown for a fixed-rate loan
    pub fn schedule(
        &self,
        amount: Money,
        term: u32,
        product: LoanProductType,
        interment_interest: Option<Rate>,
    ) -> Result<LoanCalculationResult> {
        ScheduleCalculator::new(&self.table).schedule(amount, term, product, interment_interest)
    }

    /// run the full calculation flow for one request
    ///
    /// sack limit and term are resolved where the product calls for them,
    /// the ceiling and principal are computed, and for non-commodity
    /// products the repayment schedule is produced. commodity products
    /// get no schedule; their evaluation ends at the sack-limit ceiling.
    pub fn evaluate(
        &self,
        profile: &MemberFinancialProfile,
        request: &LoanRequest,
        commodity: Option<&CommodityContext>,
        interment_interest: Option<Rate>,
    ) -> Result<LoanEvaluation> {
        let product = request.product_type;

        let sacks = self.sack_limit(profile, product, commodity)?;
        let ceiling = max_loanable(product, profile, commodity, sacks, request.loan_amount)?;

        // products without a principal rule take the caller's amount directly
        let requested = match product.policy().principal {
            PrincipalRule::Undefined => {
                if request.loan_amount.is_negative() {
                    return Err(EngineError::InvalidAmount {
                        amount: request.loan_amount,
                    });
                }
                request.loan_amount
            }
            _ => self.requested_amount(request, commodity)?,
        };

        if product.is_commodity() {
            debug!(?product, %requested, %ceiling, "commodity evaluation; no rate schedule");
            return Ok(LoanEvaluation {
                max_loanable: ceiling,
                requested,
                sack_limit: Some(sacks),
                term: request.term,
                schedule: None,
            });
        }

        let term = match request.term.or_else(|| resolve_term(requested)) {
            Some(term) if term > 0 => term,
            _ => {
                return Err(EngineError::NoPermittedTerm { amount: requested });
            }
        };

        let schedule = self.schedule(requested, term, product, interment_interest)?;

        Ok(LoanEvaluation {
            max_loanable: ceiling,
            requested,
            sack_limit: None,
            term: Some(term),
            schedule: Some(schedule),
        })
    }
}

impl Default for LoanEngine {
    fn default() -> Self {
        Self::new(LoanRateTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LoanPurpose;
    use rust_decimal_macros::dec;

    fn profile(share_capital: i64) -> MemberFinancialProfile {
        MemberFinancialProfile {
            share_capital: Money::from_major(share_capital),
        }
    }

    fn rice_personal(price: i64) -> CommodityContext {
        CommodityContext {
            price_per_unit: Some(Money::from_major(price)),
            purpose: LoanPurpose::Personal,
            loan_percentage: Rate::from_percentage(dec!(80)),
        }
    }

    #[test]
    fn test_rice_personal_boundary_member() {
        // member at exactly 6000 share capital requesting 4 sacks at 1500:
        // sack limit resolves to 4, requested matches the ceiling exactly
        let engine = LoanEngine::default();
        let ctx = rice_personal(1_500);
        let request = LoanRequest {
            product_type: LoanProductType::Rice,
            loan_amount: Money::ZERO,
            sacks: 4,
            term: None,
        };

        let eval = engine
            .evaluate(&profile(6_000), &request, Some(&ctx), None)
            .unwrap();

        assert_eq!(eval.sack_limit, Some(4));
        assert_eq!(eval.requested, Money::from_major(6_000));
        assert_eq!(eval.max_loanable, Money::from_major(6_000));
        assert!(eval.within_limit());
        assert!(eval.schedule.is_none());
    }

    #[test]
    fn test_regular_loan_full_flow() {
        let engine = LoanEngine::default();
        let request = LoanRequest {
            product_type: LoanProductType::Regular,
            loan_amount: Money::from_major(20_000),
            sacks: 0,
            term: None,
        };

        let eval = engine
            .evaluate(&profile(10_000), &request, None, None)
            .unwrap();

        assert_eq!(eval.max_loanable, Money::from_major(20_000));
        assert_eq!(eval.requested, Money::from_major(20_000));
        // 20000 falls in the [10001, 50000] bracket
        assert_eq!(eval.term, Some(12));
        let schedule = eval.schedule.unwrap();
        assert_eq!(
            schedule.total_repayment,
            eval.requested + schedule.total_interest + schedule.service_fee
        );
        assert!(eval.within_limit());
    }

    #[test]
    fn test_over_limit_request_is_reported_not_blocked() {
        let engine = LoanEngine::default();
        let request = LoanRequest {
            product_type: LoanProductType::BackToBack,
            loan_amount: Money::from_major(8_000),
            sacks: 0,
            term: None,
        };

        let eval = engine
            .evaluate(&profile(5_000), &request, None, None)
            .unwrap();

        assert_eq!(eval.max_loanable, Money::from_major(5_000));
        assert_eq!(eval.requested, Money::from_major(8_000));
        assert!(!eval.within_limit());
        // schedule still computed; approval is the workflow's call
        assert!(eval.schedule.is_some());
    }

    #[test]
    fn test_amount_below_term_brackets_rejected() {
        let engine = LoanEngine::default();
        let request = LoanRequest {
            product_type: LoanProductType::Regular,
            loan_amount: Money::from_major(5_000),
            sacks: 0,
            term: None,
        };

        let err = engine
            .evaluate(&profile(10_000), &request, None, None)
            .unwrap_err();
        assert!(matches!(err, EngineError::NoPermittedTerm { .. }));
    }

    #[test]
    fn test_explicit_term_wins_over_resolver() {
        let engine = LoanEngine::default();
        let request = LoanRequest {
            product_type: LoanProductType::Regular,
            loan_amount: Money::from_major(20_000),
            sacks: 0,
            term: Some(24),
        };

        let eval = engine
            .evaluate(&profile(15_000), &request, None, None)
            .unwrap();
        assert_eq!(eval.term, Some(24));
    }

    #[test]
    fn test_product_without_amount_rules_uses_caller_amount() {
        let engine = LoanEngine::default();
        let request = LoanRequest {
            product_type: LoanProductType::Educational,
            loan_amount: Money::from_major(12_000),
            sacks: 0,
            term: None,
        };

        let eval = engine
            .evaluate(&profile(10_000), &request, None, None)
            .unwrap();

        // ceiling is not computed by this policy
        assert_eq!(eval.max_loanable, Money::ZERO);
        assert_eq!(eval.requested, Money::from_major(12_000));
        assert!(eval.schedule.is_some());
    }

    #[test]
    fn test_injected_table_drives_schedule() {
        let json = r#"{"rates": {"regular": {"interest": "12", "fee": "0"}}}"#;
        let engine = LoanEngine::new(LoanRateTable::from_json(json).unwrap());

        let schedule = engine
            .schedule(Money::from_major(10_000), 12, LoanProductType::Regular, None)
            .unwrap();
        assert_eq!(schedule.total_interest, Money::from_major(1_200));
        assert_eq!(schedule.service_fee, Money::ZERO);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LoanEngine>();
    }
}
