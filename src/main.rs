//! Retirement Planner CLI
//!
//! Command-line interface for account projections and loan payoff

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde_json::json;

use retirement_planner::account::load_accounts;
use retirement_planner::assumptions::loader::DEFAULT_ASSUMPTIONS_FILE;
use retirement_planner::assumptions::{
    load_assumptions, DEFAULT_FEDERAL_TAX_RATE, DEFAULT_INFLATION_RATE, DEFAULT_STATE_TAX_RATE,
};
use retirement_planner::rates::round_to_cents;
use retirement_planner::{
    Account, EconomicAssumptions, LoanPayoffCalculator, Portfolio, PortfolioProjection,
    SharedAssumptions,
};

/// Retirement account projections and loan payoff calculations
#[derive(Parser)]
#[command(name = "retirement_planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a single account
    Project(ProjectArgs),

    /// Project every account listed in a CSV file
    Portfolio(PortfolioArgs),

    /// Months left to pay off a loan
    Payoff(PayoffArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Inflation and tax rates given on the command line
#[derive(Args)]
struct ScenarioArgs {
    /// Annual inflation rate, percent
    #[arg(long, default_value_t = DEFAULT_INFLATION_RATE)]
    inflation: Decimal,

    /// Flat federal tax rate, percent
    #[arg(long, default_value_t = DEFAULT_FEDERAL_TAX_RATE)]
    federal_tax: Decimal,

    /// Flat state tax rate, percent
    #[arg(long, default_value_t = DEFAULT_STATE_TAX_RATE)]
    state_tax: Decimal,
}

impl ScenarioArgs {
    fn to_assumptions(&self) -> Result<EconomicAssumptions> {
        let assumptions =
            EconomicAssumptions::new(self.inflation, self.federal_tax, self.state_tax);
        assumptions.validate()?;
        Ok(assumptions)
    }
}

#[derive(Args)]
struct ProjectArgs {
    /// Account label
    #[arg(long, default_value = "401(k)")]
    name: String,

    /// Starting balance
    #[arg(long)]
    initial_value: Decimal,

    /// Annual growth rate, percent
    #[arg(long)]
    interest_rate: Decimal,

    /// Growth rate reached by the end of the horizon, percent
    #[arg(long)]
    final_interest_rate: Option<Decimal>,

    /// Horizon in years
    #[arg(long)]
    years: Decimal,

    /// Contributions were taxed up front
    #[arg(long)]
    roth: bool,

    #[command(flatten)]
    scenario: ScenarioArgs,
}

#[derive(Args)]
struct PortfolioArgs {
    /// CSV with name,initial_value,roth,interest_rate,years,final_interest_rate
    #[arg(long)]
    accounts: PathBuf,

    /// Scenario JSON; falls back to assumptions.json in the working directory, then defaults
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

#[derive(Args)]
struct PayoffArgs {
    /// Outstanding principal
    #[arg(long)]
    loan_amount: Decimal,

    /// Annual interest rate, percent
    #[arg(long)]
    interest_rate: Decimal,

    /// Fixed monthly payment
    #[arg(long)]
    payment: Decimal,

    /// Extra principal paid each month
    #[arg(long, default_value_t = Decimal::ZERO)]
    extra: Decimal,

    /// Write the full amortization schedule to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Project(args) => project(args, cli.format),
        Commands::Portfolio(args) => portfolio(args, cli.format),
        Commands::Payoff(args) => payoff(args, cli.format),
    }
}

fn project(args: ProjectArgs, format: OutputFormat) -> Result<()> {
    let assumptions = args.scenario.to_assumptions()?;
    let mut account = Account::new(
        args.name,
        args.initial_value,
        args.roth,
        args.interest_rate,
        args.years,
    )
    .with_assumptions(assumptions.into());
    account.set_final_interest_rate(args.final_interest_rate);

    let future_value = account.compute_future_value()?;
    let pre_tax = account.future_value_pre_tax()?;
    let after_tax = account.future_value_after_tax()?;

    match format {
        OutputFormat::Json => {
            let out = json!({
                "name": account.name,
                "roth": account.roth,
                "future_value": round_to_cents(future_value),
                "pre_tax": round_to_cents(pre_tax),
                "after_tax": round_to_cents(after_tax),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            println!("Account: {}", account);
            println!(
                "  Growth: {}% -> {}% over {} years",
                account.interest_rate,
                account.final_interest_rate(),
                account.years
            );
            println!("  Inflation: {}%", assumptions.inflation_rate);
            println!("  Future value (today's dollars): ${:.2}", future_value);
            println!("  Pre-tax:   ${:.2}", pre_tax);
            println!("  After-tax: ${:.2}", after_tax);
        }
    }
    Ok(())
}

fn portfolio(args: PortfolioArgs, format: OutputFormat) -> Result<()> {
    let assumptions = resolve_assumptions(args.assumptions.as_deref())?;
    let shared = SharedAssumptions::new(assumptions);

    let accounts = load_accounts(&args.accounts, &shared)
        .with_context(|| format!("loading accounts from {}", args.accounts.display()))?;

    let mut portfolio = Portfolio::new(shared);
    portfolio.extend(accounts);
    let projection = portfolio.project()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projection)?),
        OutputFormat::Table => print_portfolio(&projection),
    }
    Ok(())
}

fn resolve_assumptions(path: Option<&Path>) -> Result<EconomicAssumptions> {
    match path {
        Some(path) => load_assumptions(path)
            .with_context(|| format!("loading assumptions from {}", path.display())),
        None if Path::new(DEFAULT_ASSUMPTIONS_FILE).exists() => {
            Ok(load_assumptions(DEFAULT_ASSUMPTIONS_FILE)?)
        }
        None => {
            log::info!("no scenario file given, using default economic assumptions");
            Ok(EconomicAssumptions::default())
        }
    }
}

fn print_portfolio(projection: &PortfolioProjection) {
    let a = &projection.assumptions;
    println!(
        "Scenario: inflation {}%, federal tax {}%, state tax {}%\n",
        a.inflation_rate, a.federal_tax_rate, a.state_tax_rate
    );
    println!(
        "{:<20} {:>5} {:>14} {:>14} {:>14} {:>14}",
        "Account", "Roth", "Initial", "Future", "Pre-tax", "After-tax"
    );
    println!("{}", "-".repeat(86));
    for row in &projection.accounts {
        println!(
            "{:<20} {:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.name, row.roth, row.initial_value, row.future_value, row.pre_tax, row.after_tax
        );
    }
    println!("{}", "-".repeat(86));
    println!(
        "{:<20} {:>5} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
        "Total",
        "",
        projection.total_initial_value,
        projection.total_future_value,
        projection.total_pre_tax,
        projection.total_after_tax
    );
}

fn payoff(args: PayoffArgs, format: OutputFormat) -> Result<()> {
    let loan = LoanPayoffCalculator::new(args.loan_amount, args.interest_rate, args.payment)
        .with_extra_principal_payment(args.extra);

    let schedule = loan.schedule()?;
    let summary = schedule.summary();

    if let Some(path) = &args.schedule {
        let file = File::create(path)
            .with_context(|| format!("creating schedule file {}", path.display()))?;
        schedule.write_csv(BufWriter::new(file))?;
        log::info!("wrote {} periods to {}", schedule.len(), path.display());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => {
            println!("Months to payoff: {}", summary.months);
            println!("  Years:          {:.1}", Decimal::from(summary.months) / Decimal::from(12));
            println!("  Total interest: ${:.2}", summary.total_interest);
            println!("  Total paid:     ${:.2}", summary.total_paid);
        }
    }
    Ok(())
}
