use anyhow::Result;

fn main() -> Result<()> {
    budget_ledger::run::init_tracing();
    let args: Vec<String> = std::env::args().collect();
    budget_ledger::run::as_cli(&args)
}
