use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};
use crate::rates::LoanRateTable;
use crate::types::{LoanCalculationResult, LoanProductType, ScheduleRule};

/// repayment schedule calculator for fixed-rate (non-commodity) loans
///
/// simple, non-compounding interest pro-rated by term:
/// interest = amount x (rate/100) x (term/12), fee = amount x (fee/100),
/// total = amount + interest + fee, monthly = total / term. intermediate
/// precision is preserved; rounding to currency happens only in
/// `LoanCalculationResult::rounded`.
pub struct ScheduleCalculator<'a> {
    table: &'a LoanRateTable,
}

impl<'a> ScheduleCalculator<'a> {
    pub fn new(table: &'a LoanRateTable) -> Self {
        Self { table }
    }

    /// compute the monetary breakdown for a loan
    ///
    /// `interment_interest` applies only to interment lot loans, whose
    /// interest is agreed per application; every other product takes its
    /// rate from the table, and a product the table does not price is
    /// charged zero interest and zero fee (a defined policy fallback,
    /// not an error).
    pub fn schedule(
        &self,
        amount: Money,
        term: u32,
        product: LoanProductType,
        interment_interest: Option<Rate>,
    ) -> Result<LoanCalculationResult> {
        if amount.is_negative() || amount.is_zero() {
            return Err(EngineError::InvalidAmount { amount });
        }
        if term == 0 {
            return Err(EngineError::InvalidTerm { term });
        }

        let (interest, fee) = match product.policy().schedule {
            ScheduleRule::Commodity => {
                return Err(EngineError::NotApplicable { product });
            }
            ScheduleRule::FeeOnly { fee } => {
                let interest = interment_interest.unwrap_or_else(|| {
                    warn!(
                        ?product,
                        "no per-application interest supplied; charging zero interest"
                    );
                    Rate::ZERO
                });
                (interest, fee)
            }
            ScheduleRule::Rated => match self.table.lookup(product) {
                Some(rate) => (rate.interest, rate.fee),
                None => (Rate::ZERO, Rate::ZERO),
            },
        };

        let years = Decimal::from(term) / dec!(12);
        let total_interest = interest.of(amount) * years;
        let service_fee = fee.of(amount);
        let total_repayment = amount + total_interest + service_fee;
        let monthly_payment = total_repayment / Decimal::from(term);

        Ok(LoanCalculationResult {
            total_interest,
            service_fee,
            total_repayment,
            monthly_payment,
        })
    }
}
