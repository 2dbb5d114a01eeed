use clap::Parser;
use ctclass_core::cli::{Cli, OutputFormat};
use ctclass_core::{Acquisition, ClassificationResult, CtSeries, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    info!("Loading series from {}", cli.directory.display());

    let series = match CtSeries::from_directory_with_options(&cli.directory, cli.ignore_modality) {
        Ok(series) => series,
        Err(e) => {
            error!("Failed to load series: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!("Loaded {} images", series.len());

    let acquisition = match cli.label {
        Some(label) => Acquisition::new(label),
        None => series.default_acquisition(),
    };

    let result = match series.classify(&acquisition) {
        Ok(result) => result,
        Err(e) => {
            error!("Classification failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_result(&acquisition, &series, &result, cli.format);
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn output_result(
    acquisition: &Acquisition,
    series: &CtSeries,
    result: &ClassificationResult,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(&acquisition.label, series.len(), result)
                .with_image_type(series.header.image_type.as_ref());
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
