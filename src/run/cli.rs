use anyhow::{Context, Result};
use std::path::Path;

use crate::import::Script;
use crate::models::Book;

const DEMO_SCRIPT: &str = "\
action,category,amount,detail
deposit,Food,1000,initial deposit
withdraw,Food,10.15,groceries
withdraw,Food,15.89,restaurant and more food for dessert
deposit,Clothing,500,initial deposit
transfer,Food,50,Clothing
withdraw,Clothing,25.55,jeans
withdraw,Clothing,100,winter coat
deposit,Auto,1000,initial deposit
withdraw,Auto,15,oil change
";

pub fn as_cli(args: &[String]) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "ledger" => cli_ledger(&load(&args[2..])?),
        "chart" => cli_chart(&load(&args[2..])?),
        "report" | "r" => cli_report(&load(&args[2..])?),
        "demo" => {
            let script = Script::from_reader(DEMO_SCRIPT.as_bytes())?;
            cli_report(&replay(&script)?)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budget-ledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budget-ledger — category ledgers and spend chart");
    println!();
    println!("Usage: budget-ledger <command>");
    println!();
    println!("Commands:");
    println!("  ledger <file.csv>             Replay a script and print every ledger");
    println!("  chart <file.csv>              Replay a script and print the spend chart");
    println!("  report, r <file.csv>          Ledgers followed by the spend chart");
    println!("  demo                          Report for a built-in example script");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Script rows: action,category,amount[,description|target]");
    println!("  actions: deposit, withdraw, transfer (4th column is the target)");
}

fn load(args: &[String]) -> Result<Book> {
    let Some(file_path) = args.first() else {
        anyhow::bail!("Usage: budget-ledger <ledger|chart|report> <file.csv>");
    };

    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }

    let script = Script::from_path(path)?;
    tracing::debug!(path = %path.display(), operations = script.operations.len(), "loaded script");
    replay(&script)
}

fn replay(script: &Script) -> Result<Book> {
    let mut book = Book::new();
    let outcome = script.apply(&mut book)?;
    if outcome.rejected > 0 {
        eprintln!(
            "Warning: {} operation(s) rejected (insufficient funds or amount out of range)",
            outcome.rejected
        );
    }
    Ok(book)
}

fn cli_ledger(book: &Book) -> Result<()> {
    if book.is_empty() {
        println!("No categories");
        return Ok(());
    }
    let ledgers: Vec<String> = book.categories().iter().map(ToString::to_string).collect();
    println!("{}", ledgers.join("\n\n"));
    Ok(())
}

fn cli_chart(book: &Book) -> Result<()> {
    let chart = book.spend_chart().context("Cannot draw spend chart")?;
    println!("{chart}");
    Ok(())
}

fn cli_report(book: &Book) -> Result<()> {
    cli_ledger(book)?;
    println!();
    cli_chart(book)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rust_decimal_macros::dec;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("budget-ledger")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_demo_script_replays_cleanly() {
        let script = Script::from_reader(DEMO_SCRIPT.as_bytes()).unwrap();
        let mut book = Book::new();
        let outcome = script.apply(&mut book).unwrap();
        assert_eq!(outcome.rejected, 0);
        assert_eq!(book.find("Food").unwrap().balance(), dec!(923.96));
        assert_eq!(book.find("Clothing").unwrap().balance(), dec!(424.45));
        assert_eq!(book.find("Auto").unwrap().balance(), dec!(985));
        assert!(book.spend_chart().is_ok());
    }

    #[test]
    fn test_cli_commands() {
        assert!(as_cli(&args(&[])).is_ok());
        assert!(as_cli(&args(&["--help"])).is_ok());
        assert!(as_cli(&args(&["-V"])).is_ok());
        assert!(as_cli(&args(&["demo"])).is_ok());
    }

    #[test]
    fn test_cli_unknown_command() {
        let err = as_cli(&args(&["frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn test_cli_missing_file() {
        assert!(as_cli(&args(&["chart"])).is_err());
        let err = as_cli(&args(&["chart", "/nonexistent/ops.csv"])).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_cli_chart_without_spending_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"deposit,Food,10\n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        assert!(as_cli(&args(&["ledger", path.as_str()])).is_ok());
        let err = as_cli(&args(&["chart", path.as_str()])).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Cannot draw spend chart: No spending to chart: no category has any withdrawals"
        );
    }
}
