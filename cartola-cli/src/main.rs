use anyhow::{Context, Result, bail};
use cartola_core::StatementReport;
use cartola_finance::{StatementExtractor, layout_summary, write_summary_pdf, write_transactions_csv};
use cartola_ingest::read_statement_text;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod state;

const TRANSACTIONS_FILE: &str = "transactions.csv";
const SUMMARY_FILE: &str = "summary.pdf";

#[derive(Parser, Debug)]
#[command(
    name = "cartola",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARTOLA_BUILD_SHA"), ")"),
    about = "Credit-card statement → categorized transactions and spending summary"
)]
struct Cli {
    /// Config file (defaults to ~/.cartola/config.toml, then built-in rules)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from a statement PDF (or .txt dump)
    Extract {
        input: PathBuf,

        /// Where transactions.csv and summary.pdf are written
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print the category a description would get
    Categorize { description: String },

    /// Manage ~/.cartola/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the built-in settings to ~/.cartola/config.toml
    Init,
    /// Print the effective settings as TOML
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    match cli.command {
        Command::Extract { input, out_dir } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            extract(&input, &out_dir, &StatementExtractor::new(&cfg)?)?;
        }

        Command::Categorize { description } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let extractor = StatementExtractor::new(&cfg)?;
            println!("{}", extractor.rules().categorize(&description));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn extract(input: &Path, out_dir: &Path, extractor: &StatementExtractor) -> Result<()> {
    if !input.exists() {
        bail!("statement not found: {}", input.display());
    }
    let text = read_statement_text(input)?;
    let report = extractor.extract(&text);

    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let csv_path = out_dir.join(TRANSACTIONS_FILE);
    let summary_path = out_dir.join(SUMMARY_FILE);

    // Never leave half of the outputs behind.
    if let Err(e) = write_outputs(&report, &csv_path, &summary_path) {
        state::remove_if_exists(&csv_path)?;
        state::remove_if_exists(&summary_path)?;
        return Err(e);
    }
    info!(csv = %csv_path.display(), summary = %summary_path.display(), "wrote outputs");

    print_summary(input, &report);
    Ok(())
}

fn write_outputs(report: &StatementReport, csv_path: &Path, summary_path: &Path) -> Result<()> {
    write_transactions_csv(csv_path, &report.transactions)?;

    let generated_at = chrono::Local::now().naive_local();
    write_summary_pdf(summary_path, &layout_summary(&report.summary), Some(generated_at))
}

fn print_summary(input: &Path, report: &StatementReport) {
    if report.is_empty() {
        println!("No transactions found in {}", input.display());
        return;
    }

    println!(
        "Parsed {} transactions from {}\n",
        report.transactions.len(),
        input.display()
    );
    for row in &report.summary {
        println!(
            "{:<16} {:>14} {:>6.0}%",
            row.category,
            row.formatted_total,
            row.share * 100.0
        );
    }

    let installments = report.transactions.iter().filter(|t| t.is_installment).count();
    let unparsed = report.transactions.iter().filter(|t| t.amount.is_none()).count();
    println!("\nInstallment rows: {} | rows without amount: {}", installments, unparsed);
}
