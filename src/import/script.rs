use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::models::Book;

/// One ledger operation read from a script row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Deposit {
        category: String,
        amount: Decimal,
        description: String,
    },
    Withdraw {
        category: String,
        amount: Decimal,
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: Decimal,
    },
}

impl Operation {
    /// Categories the operation touches, source first.
    fn categories(&self) -> Vec<&str> {
        match self {
            Self::Deposit { category, .. } | Self::Withdraw { category, .. } => vec![category.as_str()],
            Self::Transfer { from, to, .. } => vec![from.as_str(), to.as_str()],
        }
    }
}

/// Outcome counts of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Replay {
    pub applied: usize,
    pub rejected: usize,
}

/// A list of ledger operations loaded from CSV.
///
/// Rows are `action,category,amount[,description|target]`. Blank rows and rows
/// starting with `#` are skipped, and a leading `action,...` row is a header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub operations: Vec<Operation>,
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open script: {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut operations = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result.context("Failed to read CSV record")?;
            let row: Vec<&str> = record.iter().collect();

            if row.iter().all(|field| field.is_empty()) {
                continue;
            }
            if i == 0 && row[0].eq_ignore_ascii_case("action") {
                continue;
            }

            let line = record.position().map_or(i + 1, |p| p.line() as usize);
            let op = parse_row(&row).with_context(|| format!("Row {line}: invalid operation"))?;
            operations.push(op);
        }

        Ok(Self { operations })
    }

    /// Replay every operation into `book`, opening categories on first mention.
    /// Rejected operations (missing funds, amounts out of range) are counted,
    /// not fatal.
    pub fn apply(&self, book: &mut Book) -> Result<Replay> {
        let mut replay = Replay::default();

        for op in &self.operations {
            for name in op.categories() {
                book.open(name);
            }

            let accepted = match op {
                Operation::Deposit {
                    category,
                    amount,
                    description,
                } => book.deposit(category, *amount, description.as_str())?,
                Operation::Withdraw {
                    category,
                    amount,
                    description,
                } => book.withdraw(category, *amount, description.as_str())?,
                Operation::Transfer { from, to, amount } => book.transfer(from, to, *amount)?,
            };

            if accepted {
                replay.applied += 1;
            } else {
                tracing::warn!(?op, "operation rejected, ledger unchanged");
                replay.rejected += 1;
            }
        }

        tracing::info!(
            applied = replay.applied,
            rejected = replay.rejected,
            categories = book.len(),
            "script replayed"
        );
        Ok(replay)
    }
}

fn parse_row(row: &[&str]) -> Result<Operation> {
    let field = |idx: usize, what: &str| -> Result<String> {
        match row.get(idx) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => anyhow::bail!("missing {what}"),
        }
    };
    let optional = |idx: usize| row.get(idx).map(|s| s.to_string()).unwrap_or_default();

    let action = field(0, "action")?.to_lowercase();
    let category = field(1, "category")?;
    let amount = parse_decimal(&field(2, "amount")?)?;

    let op = match action.as_str() {
        "deposit" => Operation::Deposit {
            category,
            amount,
            description: optional(3),
        },
        "withdraw" => Operation::Withdraw {
            category,
            amount,
            description: optional(3),
        },
        "transfer" => Operation::Transfer {
            from: category,
            to: field(3, "transfer target")?,
            amount,
        },
        other => anyhow::bail!("unknown action '{other}'"),
    };
    Ok(op)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(['$', ','], "");
    Decimal::from_str(cleaned.trim()).with_context(|| format!("Failed to parse '{s}' as decimal"))
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
