mod amount;
mod sack_limit;
mod term;

pub use amount::{max_loanable, requested_amount, resolve_unit_price};
pub use sack_limit::max_sacks;
pub use term::resolve_term;
