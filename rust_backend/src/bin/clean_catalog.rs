use anyhow::{bail, Context, Result};
use std::env;
use std::fs::File;
use std::path::PathBuf;

use nci_rust::io::loaders::save_cleaned_csv;
use nci_rust::parsing::catalog_csv::dataframe_to_titles;
use nci_rust::preprocessing::pipeline::{PrepConfig, PrepPipeline};

struct Args {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    report: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut positional: Vec<String> = Vec::new();
    let mut config = None;
    let mut report = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config expects a file path")?;
                config = Some(PathBuf::from(value));
            }
            "--report" => {
                let value = args.next().context("--report expects a file path")?;
                report = Some(PathBuf::from(value));
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        bail!("usage: clean-catalog <input.csv> <output.csv> [--config <file.toml>] [--report <file.json>]");
    }

    Ok(Args {
        input: PathBuf::from(&positional[0]),
        output: PathBuf::from(&positional[1]),
        config,
        report,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => PrepConfig::load(path)?,
        None => PrepConfig::default(),
    };
    let label_column = config.multi_label_column.clone();

    let pipeline = PrepPipeline::with_config(config);
    let result = pipeline.process(&args.input)?;

    let titles = dataframe_to_titles(&result.dataframe, &label_column)
        .context("Failed to materialize cleaned titles")?;
    let sentinel_dated = titles.iter().filter(|t| t.is_sentinel_dated()).count();

    let mut df = result.dataframe;
    save_cleaned_csv(&mut df, &args.output)?;

    println!(
        "cleaned {} of {} titles ({} category columns, {} never dated)",
        result.kept_titles,
        result.total_titles,
        result.category_labels.len(),
        sentinel_dated,
    );
    for warning in &result.validation.warnings {
        println!("warning: {warning}");
    }

    if let Some(report_path) = &args.report {
        let file = File::create(report_path)
            .with_context(|| format!("Failed to create report file {}", report_path.display()))?;
        serde_json::to_writer_pretty(file, &result.validation)
            .context("Failed to serialize validation report")?;
    }

    if !result.validation.is_valid {
        for error in &result.validation.errors {
            eprintln!("error: {error}");
        }
        bail!(
            "cleaned batch failed validation with {} error(s)",
            result.validation.errors.len()
        );
    }

    Ok(())
}
