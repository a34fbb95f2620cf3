pub mod decimal;
pub mod eligibility;
pub mod engine;
pub mod errors;
pub mod rates;
pub mod schedule;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use engine::{LoanEngine, LoanEvaluation};
pub use errors::{EngineError, Result};
pub use rates::{LoanRate, LoanRateTable};
pub use schedule::ScheduleCalculator;
pub use types::{
    CeilingRule, CommodityContext, LoanCalculationResult, LoanProductType, LoanPurpose,
    LoanRequest, MemberFinancialProfile, PrincipalRule, ProductPolicy, ScheduleRule,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
