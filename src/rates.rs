use std::collections::HashMap;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::types::LoanProductType;

/// per-product pricing: annual interest and one-time service fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRate {
    pub interest: Rate,
    pub fee: Rate,
}

impl LoanRate {
    pub fn new(interest: Rate, fee: Rate) -> Self {
        Self { interest, fee }
    }
}

/// immutable rate table, injected into the engine at construction
///
/// commodity products (feeds, rice) carry no entry by design: they are
/// governed by sack limits, not percentage rates. the interment lot entry
/// is a placeholder (interest 0) overridden per application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRateTable {
    rates: HashMap<LoanProductType, LoanRate>,
}

impl LoanRateTable {
    /// build a table from an explicit rate set
    pub fn new(rates: HashMap<LoanProductType, LoanRate>) -> Self {
        Self { rates }
    }

    /// the cooperative's standard book rates
    pub fn standard() -> Self {
        use LoanProductType::*;

        let mut rates = HashMap::new();
        let mut set = |product, interest, fee| {
            rates.insert(
                product,
                LoanRate::new(Rate::from_percentage(interest), Rate::from_percentage(fee)),
            );
        };

        set(Marketing, dec!(3.5), dec!(5));
        set(BackToBack, dec!(1.5), dec!(1));
        set(Regular, dec!(3.5), dec!(3));
        set(Livelihood, dec!(2.5), dec!(2));
        set(Educational, dec!(2), dec!(1));
        set(Emergency, dec!(2), dec!(1));
        set(QuickCash, dec!(5), dec!(2));
        set(Car, dec!(4), dec!(3));
        set(Housing, dec!(9), dec!(3));
        set(Motorcycle, dec!(4), dec!(3));
        set(MemorialLot, dec!(6), dec!(2));
        // placeholder: interest supplied per application, fee fixed at 2%
        set(IntermentLot, dec!(0), dec!(2));
        set(Travel, dec!(3), dec!(2));
        set(Ofw, dec!(3), dec!(2));
        set(Savings, dec!(2), dec!(1));
        set(Health, dec!(2), dec!(1));
        set(Special, dec!(5), dec!(3));
        set(Reconstruction, dec!(3), dec!(2));

        Self { rates }
    }

    /// load an alternate rate set from json configuration
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// look up the rate for a product; absent for commodity products and
    /// any product the table does not price
    pub fn lookup(&self, product: LoanProductType) -> Option<LoanRate> {
        self.rates.get(&product).copied()
    }
}

impl Default for LoanRateTable {
    fn default() -> Self {
        Self::standard()
    }
}
