use rust_decimal::Decimal;

/// One line of a category ledger. Deposits are positive, withdrawals negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub amount: Decimal,
    pub description: String,
}

impl LedgerEntry {
    pub fn new(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
