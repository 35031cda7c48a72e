use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Percentages are shares of total spending, which is undefined at zero.
    #[error("No spending to chart: no category has any withdrawals")]
    NoSpending,
    #[error("Spending total is too large to chart")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Category not found: {0}")]
    UnknownCategory(String),
}
