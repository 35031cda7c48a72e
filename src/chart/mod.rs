//! Plain-text spend chart: one column of `o` marks per category, showing its
//! share of total withdrawals in steps of ten percent.

use rust_decimal::Decimal;

use crate::error::ChartError;
use crate::models::Category;
use crate::util::capitalize;

const TITLE: &str = "Percentage spent by category";
const LABEL_INDENT: &str = "     ";

/// Render the spend chart for `categories`, in input order.
///
/// Fails with [`ChartError::NoSpending`] when no category has withdrawn
/// anything, since every bar is a share of the total, and with
/// [`ChartError::Overflow`] when the total leaves the `Decimal` range.
pub fn create_spend_chart(categories: &[Category]) -> Result<String, ChartError> {
    let spent: Vec<Decimal> = categories
        .iter()
        .map(Category::total_withdrawn)
        .collect::<Option<_>>()
        .ok_or(ChartError::Overflow)?;
    let total = spent
        .iter()
        .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(*s))
        .ok_or(ChartError::Overflow)?;
    if total.is_zero() {
        return Err(ChartError::NoSpending);
    }

    let hundred = Decimal::ONE_HUNDRED;
    let percents: Vec<Decimal> = spent.iter().map(|s| s / total * hundred).collect();

    let rows: Vec<String> = (0..=100u32)
        .rev()
        .step_by(10)
        .map(|threshold| chart_row(threshold, &percents))
        .collect();

    let axis = format!("    -{}", "---".repeat(categories.len()));
    let names: Vec<String> = categories.iter().map(|c| capitalize(c.name())).collect();

    Ok(format!(
        "{TITLE}\n{}\n{axis}\n{}",
        rows.join("\n"),
        format_names(&names)
    ))
}

fn chart_row(threshold: u32, percents: &[Decimal]) -> String {
    let bound = Decimal::from(threshold);
    let bars: String = percents
        .iter()
        .map(|p| if *p >= bound { "o  " } else { "   " })
        .collect();
    format!("{threshold:>3}| {bars}")
}

/// Write `names` vertically, one letter per row, each column followed by two
/// spaces and the whole block indented by five. Rows are newline-separated
/// with no newline after the last one.
pub fn format_names<S: AsRef<str>>(names: &[S]) -> String {
    let columns: Vec<Vec<char>> = names.iter().map(|n| n.as_ref().chars().collect()).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|i| {
            let letters: String = columns
                .iter()
                .map(|col| format!("{}  ", col.get(i).copied().unwrap_or(' ')))
                .collect();
            format!("{LABEL_INDENT}{letters}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
