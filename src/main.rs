//! Invest Calc CLI
//!
//! Command-line interface for running investment projections

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use invest_calc::plan::load_plans;
use invest_calc::projection::required_annual_rate;
use invest_calc::report::{format_money, write_projection_csv};
use invest_calc::{
    compute_projection, CalculatorConfig, InvestmentCalculator, InvestmentPlan, ScenarioRunner,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compound-interest calculator for recurring investments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single plan
    Run(RunArgs),
    /// Project every plan in a CSV file and write a summary CSV
    Batch(BatchArgs),
    /// Find the annual rate needed to reach a target value
    SolveRate(SolveArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Amount invested each period
    #[arg(long)]
    amount: f64,

    /// Investment duration in years
    #[arg(long)]
    years: u32,

    /// Contributions per year (12 = monthly)
    #[arg(long, default_value_t = 12)]
    periods_per_year: u32,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Annual rate as a decimal (0.12 for 12%)
    #[arg(long)]
    rate: f64,

    /// Print the breakdown report
    #[arg(long)]
    details: bool,

    /// Render the growth chart
    #[arg(long)]
    chart: bool,

    /// Save the chart to the output directory (implies --chart)
    #[arg(long)]
    save: bool,

    /// Directory for saved charts (overrides the config file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write every projection point to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// JSON calculator config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// CSV of plans (ContributionAmount,Years,PeriodsPerYear,AnnualRate)
    input: PathBuf,

    /// Summary CSV path (`-` for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,
}

#[derive(Parser, Debug)]
struct SolveArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Value to reach at the end of the horizon
    #[arg(long)]
    target: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Batch(args) => handle_batch(args),
        Command::SolveRate(args) => handle_solve(args),
    }
}

fn handle_run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(dir) = args.output_dir {
        config.chart.output_dir = dir;
    }

    let plan = InvestmentPlan::new(
        args.plan.amount,
        args.plan.years,
        args.plan.periods_per_year,
        args.rate,
    )
    .with_details(args.details)
    .with_chart(args.chart || args.save, args.save);

    let outcome = InvestmentCalculator::new(config).run(&plan)?;

    if let Some(path) = &args.csv {
        let projection = compute_projection(&plan)?;
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        write_projection_csv(&projection, BufWriter::new(file))?;
        println!("Projection written to: {}", path.display());
    }

    match &outcome.chart {
        Some(Ok(chart)) => {
            if let Some(path) = &chart.path {
                println!("Chart written to: {}", path.display());
            }
        }
        Some(Err(e)) => eprintln!("Chart not rendered: {}", e),
        None => {}
    }

    println!(
        "Total value after {} years: {}",
        plan.years,
        format_money(outcome.result.total_value)
    );

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<()> {
    let plans = load_plans(&args.input)
        .with_context(|| format!("failed to load plans from {}", args.input.display()))?;

    let runner = ScenarioRunner::new();
    let written = if args.output.as_os_str() == "-" {
        runner.write_summary_csv(&plans, io::stdout().lock())?
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?;
        let written = runner.write_summary_csv(&plans, BufWriter::new(file))?;
        eprintln!("Summary written to: {}", args.output.display());
        written
    };

    if written < plans.len() {
        eprintln!("{} of {} plans were invalid and skipped", plans.len() - written, plans.len());
    }
    Ok(())
}

fn handle_solve(args: SolveArgs) -> Result<()> {
    let plan = InvestmentPlan::new(
        args.plan.amount,
        args.plan.years,
        args.plan.periods_per_year,
        0.0,
    );
    plan.validate()?;

    match required_annual_rate(&plan, args.target) {
        Some(rate) => {
            println!(
                "Required annual rate to reach {}: {:.4}%",
                format_money(args.target),
                rate * 100.0
            );
            Ok(())
        }
        None => bail!(
            "{} is not reachable with {} {} for {} years at up to 1000% a year",
            format_money(args.target),
            format_money(plan.contribution_amount),
            plan.frequency_label(),
            plan.years
        ),
    }
}
