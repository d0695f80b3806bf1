use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vtpool::{ImportConfiguration, InputFormat, PoolImporter};

#[derive(Parser, Debug)]
#[command(name = "vtpool", version, about = "Convert VT object pools to XML")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
    /// Root dimension attribute
    #[arg(long, default_value_t = 200)]
    dimension: u16,
    #[arg(long, default_value_t = 60)]
    sk_width: u16,
    #[arg(long, default_value_t = 32)]
    sk_height: u16,
    /// Render unsupported pictures without a file instead of failing
    #[arg(long)]
    skip_unsupported_pictures: bool,
    /// Also write the pool re-encoded as binary records
    #[arg(long)]
    iop: bool,
    /// Also write the pool re-encoded as text records
    #[arg(long)]
    sav: bool,
    /// Pool files (.iop, .sav or .h)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn stem(input: &Path) -> Result<&OsStr> {
    input
        .file_stem()
        .with_context(|| format!("{} has no file name", input.display()))
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Every input must map to its own outputs
fn check_outputs(inputs: &[PathBuf]) -> Result<()> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();
    for input in inputs {
        if let Some(first) = seen.insert(stem(input)?, input) {
            bail!(
                "{} and {} would write the same output files",
                first.display(),
                input.display()
            );
        }
    }
    Ok(())
}

fn convert(
    cli: &Cli,
    config: &ImportConfiguration,
    inputs: &HashSet<PathBuf>,
    input: &Path,
) -> Result<()> {
    let stem = stem(input)?;
    let config = ImportConfiguration {
        std_bitmap_path: format!("{}/{}", config.std_bitmap_path, stem.to_string_lossy()),
        ..config.clone()
    };

    let pool = PoolImporter::from_file(input)
        .and_then(|importer| importer.with_configuration(config).import())
        .with_context(|| format!("failed to import {}", input.display()))?;

    for notification in &pool.notifications {
        warn!(input = %input.display(), "{notification}");
    }

    let output = |extension: &str| -> Result<PathBuf> {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(extension);
        let path = cli.output.join(name);
        if inputs.contains(&canonical(&path)) {
            bail!("refusing to overwrite input {}", path.display());
        }
        Ok(path)
    };

    let xml_path = output("xml")?;
    pool.write_to(&xml_path)
        .with_context(|| format!("failed to write {}", xml_path.display()))?;

    if cli.iop {
        let path = output("iop")?;
        pool.write_pool(&path, InputFormat::Binary)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if cli.sav {
        let path = output("sav")?;
        pool.write_pool(&path, InputFormat::Text)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!(input = %input.display(), objects = pool.objects.len(), "converted");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .init();

    let config = ImportConfiguration {
        dimension: cli.dimension,
        sk_width: cli.sk_width,
        sk_height: cli.sk_height,
        skip_unsupported_pictures: cli.skip_unsupported_pictures,
        ..ImportConfiguration::default()
    };

    if let Err(err) = check_outputs(&cli.inputs) {
        error!("{err:#}");
        return ExitCode::FAILURE;
    }
    let inputs: HashSet<PathBuf> = cli.inputs.iter().map(|input| canonical(input)).collect();

    let failures = cli
        .inputs
        .par_iter()
        .filter_map(|input| convert(&cli, &config, &inputs, input).err())
        .inspect(|err| error!("{err:#}"))
        .count();

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
