use crate::args::{Args, OnErr};
use crate::location::{location_transform, SourceRecord, ViewModel};
use clap::Parser;
use eyre::{eyre, WrapErr};
use gauntlet::{
    apply, ignore_on_err, try_unwrap_ok_results, unwrap_ok_results, unwrap_or_default,
    TransformError, TransformResult, UnwrapOkResultsOptions,
};
use std::io::stderr;
use std::path::Path;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;
mod location;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting gauntlet with args: {args:?}");
    debug!("gauntlet version: {}", env!("CARGO_PKG_VERSION"));

    let mut records = vec![];
    for file in &args.files {
        records.extend(read_records(file)?);
    }
    debug!("read {} records", records.len());

    let results = apply(&location_transform(), records);
    let output = collapse(results, args.on_err)?;
    println!("{output}");

    Ok(())
}

fn read_records(path: &Path) -> eyre::Result<Vec<SourceRecord>> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("could not read {}", path.display()))?;
    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("{} is not a list of records", path.display()))
}

/// Collapses the transform results according to the failure policy, rendering them as json
fn collapse(
    results: Vec<TransformResult<SourceRecord, ViewModel>>,
    on_err: OnErr,
) -> eyre::Result<String> {
    let rendered = match on_err {
        OnErr::Ignore => serde_json::to_string_pretty(&unwrap_ok_results(
            results,
            UnwrapOkResultsOptions::new(ignore_on_err),
        ))?,
        OnErr::Log => serde_json::to_string_pretty(&unwrap_ok_results(
            results,
            UnwrapOkResultsOptions::new(|e: TransformError<SourceRecord>| {
                warn!("skipping record {}: {}", e.value.id, e.message)
            }),
        ))?,
        OnErr::Fail => {
            let views = try_unwrap_ok_results(results).map_err(|e| {
                eyre!("could not transform record {}: {}", e.value.id, e.message)
            })?;
            serde_json::to_string_pretty(&views)?
        }
        OnErr::Default => serde_json::to_string_pretty(&unwrap_or_default(
            results.into_iter().map(|result| result.map(Some)),
            |e| {
                debug!("record {} replaced with null: {}", e.value.id, e.message);
                None
            },
        ))?,
    };
    Ok(rendered)
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
