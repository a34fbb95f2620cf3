use rust_decimal::Decimal;
use tracing::warn;

use crate::decimal::Money;
use crate::errors::{EngineError, Result};
use crate::types::{
    CeilingRule, CommodityContext, LoanProductType, LoanRequest, MemberFinancialProfile,
    PrincipalRule,
};

/// resolve the unit price for a commodity calculation
///
/// when the pricing service supplies no price, the engine falls back to
/// the caller-entered amount as the unit price. this is a degraded mode
/// preserved from the original policy: it conflates "no price data" with
/// "use the requested amount as price" and can make the loanable ceiling
/// self-referential, so the fallback is logged every time it fires.
pub fn resolve_unit_price(
    commodity: Option<&CommodityContext>,
    entered_amount: Money,
) -> Result<Money> {
    match commodity.and_then(|c| c.price_per_unit) {
        Some(price) => {
            if price.is_negative() {
                return Err(EngineError::InvalidCommodityPrice { price });
            }
            Ok(price)
        }
        None => {
            if entered_amount.is_negative() {
                return Err(EngineError::InvalidAmount {
                    amount: entered_amount,
                });
            }
            warn!(
                %entered_amount,
                "no commodity price supplied; falling back to caller-entered amount as unit price"
            );
            Ok(entered_amount)
        }
    }
}

/// maximum amount the member is allowed to borrow for a product,
/// independent of what they are requesting
///
/// products whose ceiling rule is undefined in this engine yield 0,
/// meaning "not computed by this policy" rather than "eligible for
/// zero"; the caller applies product-specific eligibility elsewhere.
/// `entered_amount` is consulted only for the degraded commodity price
/// fallback.
pub fn max_loanable(
    product: LoanProductType,
    profile: &MemberFinancialProfile,
    commodity: Option<&CommodityContext>,
    sack_limit: u32,
    entered_amount: Money,
) -> Result<Money> {
    if profile.share_capital.is_negative() {
        return Err(EngineError::InvalidShareCapital {
            amount: profile.share_capital,
        });
    }

    match product.policy().ceiling {
        CeilingRule::CommoditySacks => {
            let price = resolve_unit_price(commodity, entered_amount)?;
            Ok(price * Decimal::from(sack_limit))
        }
        CeilingRule::Fixed(ceiling) => Ok(ceiling),
        CeilingRule::ShareCapitalMultiple(n) => Ok(profile.share_capital * Decimal::from(n)),
        CeilingRule::Undefined => Ok(Money::ZERO),
    }
}

/// principal the member is actually asking for, from their raw request
///
/// products whose principal rule is undefined yield 0; the caller
/// supplies the principal directly for those.
pub fn requested_amount(
    product: LoanProductType,
    request: &LoanRequest,
    commodity: Option<&CommodityContext>,
) -> Result<Money> {
    if request.loan_amount.is_negative() {
        return Err(EngineError::InvalidAmount {
            amount: request.loan_amount,
        });
    }

    match product.policy().principal {
        PrincipalRule::CommoditySacks => {
            let price = resolve_unit_price(commodity, request.loan_amount)?;
            Ok(price * Decimal::from(request.sacks))
        }
        PrincipalRule::CallerAmount => Ok(request.loan_amount),
        PrincipalRule::Undefined => Ok(Money::ZERO),
    }
}
