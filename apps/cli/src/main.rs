#![deny(warnings)]

//! Headless CLI: load a configuration or saved scenario, run the model, and
//! print the weekly report.

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use spa_core::{Scenario, SpaConfig, TierGuard, TierPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    scenario: Option<PathBuf>,
    tiers: TierPolicy,
    json: bool,
    write_defaults: Option<PathBuf>,
    version: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                out.config = Some(it.next().context("--config needs a path")?.into());
            }
            "--scenario" => {
                out.scenario = Some(it.next().context("--scenario needs a path")?.into());
            }
            "--tiers" => {
                let name = it.next().context("--tiers needs a policy name")?;
                out.tiers = name.parse()?;
            }
            "--json" => out.json = true,
            "--write-defaults" => {
                let path = it.next().context("--write-defaults needs a path")?;
                out.write_defaults = Some(path.into());
            }
            "--version" => out.version = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    if out.config.is_some() && out.scenario.is_some() {
        bail!("--config and --scenario are mutually exclusive");
    }
    Ok(out)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("parsing YAML {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing JSON {}", path.display()))?
    };
    Ok(doc)
}

fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = if is_yaml(path) {
        serde_yaml::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn load_config(args: &Args) -> Result<SpaConfig> {
    if let Some(path) = &args.config {
        info!(path = %path.display(), "loading configuration");
        return read_document(path);
    }
    if let Some(path) = &args.scenario {
        let scenario: Scenario = read_document(path)?;
        info!(id = %scenario.id, name = %scenario.name, "loaded scenario");
        return Ok(scenario.inputs);
    }
    info!("no input given, using default configuration");
    Ok(SpaConfig::default())
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.version {
        println!(
            "spa-model {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    info!(?args, "starting CLI");

    if let Some(path) = &args.write_defaults {
        write_document(path, &SpaConfig::default())?;
        info!(path = %path.display(), "wrote default configuration");
        return Ok(());
    }

    let cfg = args.tiers.guard_config(load_config(&args)?)?;
    let out = spa_econ::compute(&cfg)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", report::render(&cfg, &out));
    }
    Ok(())
}
