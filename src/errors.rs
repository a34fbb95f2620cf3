use thiserror::Error;

use crate::decimal::Money;
use crate::types::LoanProductType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid loan amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid loan term: {term} months")]
    InvalidTerm {
        term: u32,
    },

    #[error("invalid share capital: {amount}")]
    InvalidShareCapital {
        amount: Money,
    },

    #[error("invalid commodity price: {price}")]
    InvalidCommodityPrice {
        price: Money,
    },

    #[error("repayment schedule not applicable for product: {product:?}")]
    NotApplicable {
        product: LoanProductType,
    },

    #[error("no permitted term for amount: {amount}")]
    NoPermittedTerm {
        amount: Money,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
