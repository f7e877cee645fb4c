//! Command-line front end: read a raw model reply, print the recovered JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use json_salvage::prelude::*;
use serde_json::{Map, Value};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with the raw model reply ("-" or absent reads stdin)
    input: Option<PathBuf>,

    /// Print every recovered object, one per line, instead of only the first
    #[arg(long)]
    all: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Skip response cleanup (code-fence and language-tag stripping)
    #[arg(long)]
    raw: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let reply = read_input(cli.input.as_deref())?;
    tracing::debug!(bytes = reply.len(), "reply loaded");

    let text = if cli.raw {
        reply
    } else {
        ResponseCleaner::default().clean(&reply)
    };

    if cli.all {
        let objects = extract_all_json_objects(&text);
        if objects.is_empty() {
            bail!("no JSON object found in input");
        }
        for object in &objects {
            print_object(object, cli.pretty)?;
        }
        return Ok(());
    }

    match extract_first_json_object(&text) {
        Some(object) => print_object(&object, cli.pretty),
        None => bail!("no JSON object found in input"),
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn print_object(object: &Map<String, Value>, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(object)?
    } else {
        serde_json::to_string(object)?
    };
    println!("{rendered}");
    Ok(())
}
