use std::{
    env,
    fs::File,
    io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, OptionExt, WrapErr, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{OutputFormat, ReportConfig},
    domain::{Dataset, ReportCsvRow, ReportRow},
};

mod config;
mod domain;
mod engine;
mod error;
mod strategy;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let input = parse_args()?;
    let config = ReportConfig::from_env()?;

    let data = read_dataset(&input)?;
    info!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        customers = data.customers.len(),
        purchase_records = data.purchase_records.len(),
        "dataset loaded"
    );

    let analyzer = config.analyzer()?;
    let report = analyzer.analyze(&data)?;
    info!(rows = report.len(), "report computed");

    write_report(&report, config.format)
}

fn read_dataset(path: &Path) -> eyre::Result<Dataset> {
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open dataset {}", path.display()))?;
    let data: Dataset = serde_json::from_reader(io::BufReader::new(file))
        .wrap_err("Invalid input data")?;
    Ok(data)
}

fn write_report(report: &[ReportRow], format: OutputFormat) -> eyre::Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for row in report {
                writer.serialize(ReportCsvRow::from(row))?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(io::stdout(), report)?;
            println!();
        }
    }
    Ok(())
}

fn parse_args() -> eyre::Result<PathBuf> {
    let mut args = env::args();
    args.next(); // Skip the program name

    let input_path = args
        .next()
        .ok_or_eyre("Please provide the path to the input JSON dataset.")?;

    if args.next().is_some() {
        bail!("Too many arguments provided. Please provide only the path to the input JSON dataset.");
    }

    Ok(PathBuf::from(input_path))
}
