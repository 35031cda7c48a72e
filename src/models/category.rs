use rust_decimal::Decimal;

use super::LedgerEntry;
use crate::util::{fill_line, format_amount, round_cents, truncate};

const HEADER_STARS: usize = 13;
const LINE_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 23;

/// A named budget bucket with a running balance and an ordered ledger.
///
/// The balance is only changed together with a new ledger entry, so it always
/// equals the sum of the entry amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    balance: Decimal,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: Decimal::ZERO,
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance rounded to cents.
    pub fn balance(&self) -> Decimal {
        round_cents(self.balance)
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Record money coming in. The sign of `amount` is not checked.
    /// Returns `false` and leaves the category untouched when the new balance
    /// would fall outside the `Decimal` range.
    pub fn deposit(&mut self, amount: Decimal, description: impl Into<String>) -> bool {
        let Some(balance) = self.balance.checked_add(amount) else {
            return false;
        };
        self.balance = balance;
        self.ledger.push(LedgerEntry::new(amount, description));
        true
    }

    /// Record money going out. Returns `false` and leaves the category
    /// untouched when `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            return false;
        }
        let Some(balance) = self.balance.checked_sub(amount) else {
            return false;
        };
        self.balance = balance;
        self.ledger.push(LedgerEntry::new(-amount, description));
        true
    }

    pub fn check_funds(&self, amount: Decimal) -> bool {
        amount <= self.balance
    }

    /// Absolute values of every withdrawal, in ledger order.
    pub fn withdrawals(&self) -> Vec<Decimal> {
        self.ledger
            .iter()
            .filter(|e| e.is_withdrawal())
            .map(LedgerEntry::abs_amount)
            .collect()
    }

    /// Sum of [`Category::withdrawals`], or `None` if it overflows.
    pub fn total_withdrawn(&self) -> Option<Decimal> {
        self.ledger
            .iter()
            .filter(|e| e.is_withdrawal())
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.abs_amount()))
    }

    /// Move `amount` into `other`. Funds are checked before either side is
    /// touched; on `false` neither category changes.
    pub fn transfer(&mut self, amount: Decimal, other: &mut Category) -> bool {
        if !self.check_funds(amount)
            || self.balance.checked_sub(amount).is_none()
            || other.balance.checked_add(amount).is_none()
        {
            return false;
        }
        other.deposit(amount, format!("Transfer from {}", self.name));
        self.withdraw(amount, format!("Transfer to {}", other.name))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stars = "*".repeat(HEADER_STARS);
        writeln!(f, "{stars}{}{stars}", self.name)?;
        for entry in &self.ledger {
            let description = truncate(&entry.description, DESCRIPTION_WIDTH);
            let amount = format_amount(entry.amount);
            writeln!(f, "{}", fill_line(&description, &amount, LINE_WIDTH))?;
        }
        write!(f, "Total: {}", format_amount(self.balance))
    }
}
