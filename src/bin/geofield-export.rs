//! Headless CSV export of the built-in datasets.
//!
//! Runs the query engine over a dataset and saves the result as CSV,
//! without the desktop shell. Useful for scripted exports and smoke
//! testing the core on machines with no display.
//!
//! # Usage
//!
//! ```text
//! geofield-export [OPTIONS]
//!   --dataset <compilation|users|analysis>   dataset to export (default: compilation)
//!   --filter <field=text>                    substring filter, repeatable
//!   --equals <field=text>                    equality filter, repeatable
//!   --sort <field>                           sort key
//!   --desc                                   sort descending
//!   --out <dir>                              output directory (default: download dir)
//!   --name <file.csv>                        output filename (default: <dataset>.csv)
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};

use geofield::data;
use geofield::export;
use geofield::query::{self, FilterSet, Predicate, SortDirection};
use geofield::record::Record;

struct Options {
    dataset: String,
    filters: FilterSet,
    sort_key: Option<String>,
    direction: SortDirection,
    out_dir: Option<PathBuf>,
    name: Option<String>,
}

fn parse_field_value(raw: &str, flag: &str) -> anyhow::Result<(String, String)> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => bail!("{} expects field=value, got {:?}", flag, raw),
    }
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options {
        dataset: "compilation".to_string(),
        filters: FilterSet::new(),
        sort_key: None,
        direction: SortDirection::Ascending,
        out_dir: None,
        name: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dataset" => {
                options.dataset = args.next().context("--dataset expects a value")?;
            }
            "--filter" => {
                let raw = args.next().context("--filter expects field=text")?;
                let (field, value) = parse_field_value(&raw, "--filter")?;
                options.filters.set(field, Predicate::Contains(value));
            }
            "--equals" => {
                let raw = args.next().context("--equals expects field=text")?;
                let (field, value) = parse_field_value(&raw, "--equals")?;
                options.filters.set(field, Predicate::Equals(value));
            }
            "--sort" => {
                options.sort_key = Some(args.next().context("--sort expects a field")?);
            }
            "--desc" => options.direction = SortDirection::Descending,
            "--out" => {
                options.out_dir =
                    Some(PathBuf::from(args.next().context("--out expects a directory")?));
            }
            "--name" => {
                options.name = Some(args.next().context("--name expects a filename")?);
            }
            "--help" | "-h" => {
                println!(
                    "geofield-export --dataset <compilation|users|analysis> \
                     [--filter field=text]... [--equals field=text]... \
                     [--sort field] [--desc] [--out dir] [--name file.csv]"
                );
                std::process::exit(0);
            }
            other => bail!("Unknown argument {:?} (try --help)", other),
        }
    }

    Ok(options)
}

fn dataset_records(name: &str) -> anyhow::Result<Vec<Record>> {
    match name {
        "compilation" => Ok(data::compilation_points()),
        "users" => Ok(data::users().iter().map(|u| u.to_record()).collect()),
        "analysis" => Ok(data::recent_analyses()
            .iter()
            .flat_map(|a| a.to_records())
            .collect()),
        other => bail!("Unknown dataset {:?} (compilation, users, analysis)", other),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "geofield=info".to_string()),
        ))
        .init();

    let options = parse_args()?;
    let records = dataset_records(&options.dataset)?;

    let selected = query::filter_and_sort(
        &records,
        &options.filters,
        options.sort_key.as_deref(),
        options.direction,
    );
    tracing::info!(
        "Dataset {}: {} of {} records selected",
        options.dataset,
        selected.len(),
        records.len()
    );

    let filename = options
        .name
        .unwrap_or_else(|| format!("{}.csv", options.dataset));

    let out_dir = match options.out_dir {
        Some(dir) => dir,
        None => export::download_dir().context("No download directory available; pass --out")?,
    };

    let path = export::export_csv_to(&out_dir, &selected, &filename)
        .with_context(|| format!("Failed to export {}", filename))?;
    println!("{}", path.display());

    Ok(())
}
