//! Savings Simulator CLI
//!
//! Command-line interface for running product projections

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use savings_simulator::{
    product::DEFAULT_CATALOG_PATH,
    projection::ProjectionResult,
    Catalog, ProductTerms, SimulationRequest, Simulator,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "savings-sim", version, about = "Project the growth of savings products")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single product from raw terms
    Project {
        /// Initial deposit
        #[arg(long, default_value_t = 0.0)]
        initial: f64,

        /// Monthly deposit
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,

        /// Term in years
        #[arg(long)]
        years: u32,

        /// Base annual yield in percent
        #[arg(long = "yield")]
        annual_yield: f64,

        /// Annual yield for terms of 5+ years
        #[arg(long)]
        tier5: Option<f64>,

        /// Annual yield for terms of 10+ years
        #[arg(long)]
        tier10: Option<f64>,

        /// Lifetime ceiling on contributed principal
        #[arg(long)]
        max_total: Option<f64>,

        /// First-year contribution ceiling
        #[arg(long)]
        annual_cap: Option<f64>,

        /// Write the monthly series to this CSV file
        #[arg(long)]
        series_csv: Option<PathBuf>,
    },

    /// Compare up to three catalog products for a goal
    Simulate {
        /// Catalog directory containing products.csv and goals.csv
        #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,

        /// JSON simulation request
        #[arg(long)]
        request: PathBuf,
    },

    /// List products eligible for a goal
    Products {
        #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: PathBuf,

        #[arg(long)]
        goal: String,

        /// Only list products that can be held for this many years
        #[arg(long)]
        years: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project {
            initial,
            monthly,
            years,
            annual_yield,
            tier5,
            tier10,
            max_total,
            annual_cap,
            series_csv,
        } => {
            let mut terms = ProductTerms::new(initial, monthly, years, annual_yield)
                .with_yield_tiers(tier5, tier10);
            terms.max_total_contribution = max_total;
            if let Some(limit) = annual_cap {
                terms = terms.with_annual_cap(limit);
            }

            let result = savings_simulator::project(&terms).context("projection failed")?;
            print_result(&result);

            if let Some(path) = series_csv {
                write_series_csv(&path, &result)?;
                println!("\nMonthly series written to: {}", path.display());
            }
        }
        Command::Simulate { catalog, request } => {
            let simulator = Simulator::from_catalog_path(&catalog)
                .with_context(|| format!("failed to load catalog from {}", catalog.display()))?;
            let file = File::open(&request)
                .with_context(|| format!("failed to open request {}", request.display()))?;
            let request = SimulationRequest::from_json_reader(file)?;

            let report = simulator.run(&request)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Products { catalog, goal, years } => {
            let catalog = Catalog::load_from(&catalog)
                .with_context(|| format!("failed to load catalog from {}", catalog.display()))?;
            let goal_name = catalog.goal(&goal)?.name.clone();

            println!("Products for {}:", goal_name);
            for product in catalog.eligible_products(&goal, years)? {
                println!(
                    "  {:<16} {:<28} {:>6.2}%",
                    product.id, product.name, product.annual_yield_percent
                );
            }
        }
    }

    Ok(())
}

fn print_result(result: &ProjectionResult) {
    let summary = result.summary();

    println!("Projection ({} months at {:.2}%):", summary.term_months, result.annual_yield_percent);
    println!("{:>5} {:>14}", "Year", "Value");
    println!("{}", "-".repeat(20));
    for point in result.yearly_points() {
        println!("{:>5} {:>14.2}", point.year, point.value);
    }

    println!("\nSummary:");
    println!("  Final Amount:       {:.2}", summary.final_amount);
    println!("  Total Contributed:  {:.2}", summary.total_contributed);
    println!("  Generated Interest: {:.2}", summary.generated_interest);
}

fn write_series_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    for point in &result.monthly_series {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
