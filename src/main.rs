use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jute::JuteDocument;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a JSON file to decode.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let Some(input) = args.input else {
        println!("Missing filename, please include file name for the parsing");
        std::process::exit(1);
    };

    debug!(input = ?input);

    let doc = JuteDocument::from_file(&input)
        .with_context(|| format!("failed to decode `{}`", input.display()))?;

    println!("Parsed Data: {:#?}", doc.root());

    Ok(())
}
