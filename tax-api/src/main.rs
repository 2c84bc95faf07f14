use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use tax_api::logging::init_tracing;
use tax_api::{ApiConfig, CalcName, CalculationHandler, ErrorResponse, RawRequest, csv_loader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Federal tax calculations: 2025 MFJ ordinary income tax and 2024
/// preferential-rate tax on qualified dividends and long-term gains.
///
/// Every command prints JSON envelopes to stdout; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "tax-calc", version, about, long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ordinary income tax on taxable income (FED_TAX_2025_MFJ).
    Ordinary {
        #[arg(allow_negative_numbers = true)]
        taxable_income: String,
    },

    /// Tax on preferential income stacked on ordinary income (FED_PREF_TAX_2024).
    Preferential {
        #[arg(allow_negative_numbers = true)]
        ordinary_taxable: String,
        #[arg(allow_negative_numbers = true)]
        pref_taxable: String,

        /// One of single, mfj, mfs, hoh. Defaults to the configured status.
        #[arg(short, long)]
        filing_status: Option<String>,
    },

    /// Evaluate a JSON request body given inline or on stdin.
    Request {
        body: Option<String>,
    },

    /// Evaluate every row of a CSV batch file.
    Batch {
        #[arg(short, long)]
        file: PathBuf,
    },
}

// ─── output ──────────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(
    config: &ApiConfig,
    value: &T,
) -> Result<()> {
    let text = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn run_raw(
    handler: &CalculationHandler,
    config: &ApiConfig,
    raw: &RawRequest,
) -> Result<()> {
    match handler.validate(raw) {
        Ok(request) => print_json(config, &handler.evaluate(&request)),
        Err(err) => {
            print_json(config, &ErrorResponse::from(&err))?;
            bail!(err)
        }
    }
}

fn text(value: String) -> Option<Value> {
    Some(Value::String(value))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ApiConfig::load_or_default(cli.config.as_deref())?;
    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    let handler = CalculationHandler::new(&config);

    match cli.command {
        Command::Ordinary { taxable_income } => {
            let raw = RawRequest {
                calc: text(CalcName::FedTax2025Mfj.as_str().to_string()),
                taxable_income: text(taxable_income),
                ..RawRequest::default()
            };
            run_raw(&handler, &config, &raw)
        }
        Command::Preferential {
            ordinary_taxable,
            pref_taxable,
            filing_status,
        } => {
            let raw = RawRequest {
                calc: text(CalcName::FedPrefTax2024.as_str().to_string()),
                ordinary_taxable: text(ordinary_taxable),
                pref_taxable: text(pref_taxable),
                filing_status: filing_status.and_then(text),
                ..RawRequest::default()
            };
            run_raw(&handler, &config, &raw)
        }
        Command::Request { body } => {
            let body = match body {
                Some(body) => body,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read request body from stdin")?;
                    buf
                }
            };

            let (ok, envelope) = handler.handle_json(&body);
            print_json(&config, &envelope)?;
            if !ok {
                bail!("request rejected");
            }
            Ok(())
        }
        Command::Batch { file } => {
            let requests = csv_loader::load_from_file(&file, config.default_filing_status)
                .with_context(|| format!("Failed to load batch: {}", file.display()))?;

            for request in &requests {
                print_json(&config, &handler.evaluate(request))?;
            }
            info!(count = requests.len(), file = %file.display(), "batch complete");
            Ok(())
        }
    }
}
